//! Hellas
//!
//! One dependency for the whole utility set:
//! - [`tree`]: Attribute-path trees rooted at an anchor object
//! - [`attr`]: JSON-backed maps with dotted-path attribute access
//! - [`science`]: Geo distance, n-grams and bit helpers
//! - [`format`]: Console colors, table layouts, numbers and dates
//! - [`trace`]: Logging setup and retries
//! - [`codec`]: Compressed JSON, base64 and base62
//!
//! # Example
//!
//! ```rust
//! use hellas::prelude::*;
//!
//! let config = HellasConfig::from_toml_str("[codec]\nlevel = 9\n").unwrap();
//! let codec = config.codec();
//! let packed = codec.compress(&"hellas").unwrap();
//! let text: String = codec.decompress(&packed).unwrap();
//! assert_eq!(text, "hellas");
//!
//! let node = PathNode::root().child("a").child("b");
//! assert_eq!(node.path("/"), "root/a/b");
//! ```

#![warn(unreachable_pub)]

mod config;
mod error;

pub use hellas_attr as attr;
pub use hellas_codec as codec;
pub use hellas_format as format;
pub use hellas_science as science;
pub use hellas_trace as trace;
pub use hellas_tree as tree;

pub use config::HellasConfig;
pub use error::{HellasError, HellasResult};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Hellas
    pub use crate::attr::{Attr, AttrMap, AttrView, KeyedRecord};
    pub use crate::codec::{Codec, CodecConfig};
    pub use crate::format::{Color, Dhms, TableFormat};
    pub use crate::science::GeoPoint;
    pub use crate::trace::{LogLevel, LoggerConfig, RetryPolicy};
    pub use crate::tree::{Anchor, CallArgs, Dispatcher, PathNode};
    pub use crate::{HellasConfig, HellasError, HellasResult};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
