//! Hellas Attr
//!
//! Attribute-style access over JSON mappings, plus a couple of small
//! dictionary helpers.
//!
//! # Core Concepts
//!
//! - [`AttrMap`]: Owned storage with top-level attribute writes
//! - [`AttrView`]: Read-only facade wrapping nested mappings on access
//! - [`Attr`]: Result of an attribute read (nested view or plain value)
//! - [`KeyedRecord`]: Single-entry mappings under a type-level key
//! - [`relations`]: Symmetric relation map from groups of related items
//!
//! # Example
//!
//! ```rust
//! use hellas_attr::AttrMap;
//!
//! let mut map = AttrMap::from_json_str(r#"{"a": 1, "b": {"c": 2}}"#).unwrap();
//! assert_eq!(map.get_attr("b").unwrap().get_attr("c").unwrap(), 2);
//!
//! map.set_attr("a", 5);
//! assert_eq!(map.get_attr("a").unwrap(), 5);
//! ```

#![warn(unreachable_pub)]

mod error;
mod keyed;
mod map;
mod relations;

pub use error::{AttrError, AttrResult};
pub use keyed::KeyedRecord;
pub use map::{Attr, AttrMap, AttrView};
pub use relations::relations;
