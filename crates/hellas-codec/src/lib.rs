//! Hellas Codec
//!
//! Byte-level helpers:
//!
//! - [`Codec`]: serde values to zlib-compressed JSON and back
//! - [`file_to_base64`] / [`reader_to_base64`]: whole inputs as base64 text,
//!   with an optional size cap
//! - [`base62`]: compact alphanumeric rendering of integers
//!
//! ```
//! use hellas_codec::Codec;
//!
//! let codec = Codec::default();
//! let packed = codec.compress(&vec![1, 2, 3]).unwrap();
//! let back: Vec<u8> = codec.decompress(&packed).unwrap();
//! assert_eq!(back, [1, 2, 3]);
//! ```

#![warn(unreachable_pub)]

pub mod base62;
mod compress;
mod encode;
mod error;

pub use compress::{Codec, CodecConfig, CompressionStats};
pub use encode::{file_to_base64, reader_to_base64, BYTES_PER_MB};
pub use error::{CodecError, CodecResult};
