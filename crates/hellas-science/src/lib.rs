//! Hellas Science
//!
//! Small numeric and sequence helpers:
//!
//! - [`ngrams`] / [`bigrams`] / [`char_ngrams`]: sliding windows over sequences
//! - [`haversine`] / [`distance_points`]: great-circle distance in kilometres
//! - [`bit_set`] / [`bits_count`]: single-bit manipulation

#![warn(unreachable_pub)]

mod bits;
mod geo;
mod grams;

pub use bits::{bit_set, bits_count, BitError};
pub use geo::{distance_points, haversine, GeoPoint, EARTH_RADIUS_KM};
pub use grams::{bigrams, char_ngrams, ngrams};
