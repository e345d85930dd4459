//! Hellas Tree
//!
//! Arbitrary dotted paths built one segment at a time, turned into dispatched
//! commands by the object that owns the root.
//!
//! # Core Concepts
//!
//! - [`PathNode`]: Immutable path segment with a back-reference to its parent
//! - [`Anchor`]: External owner terminating a chain of nodes
//! - [`Dispatcher`]: Capability an anchor exposes to execute built paths
//! - [`NodeRecord`]: Flat root-to-node name list for persistence
//!
//! # Example
//!
//! ```rust
//! use hellas_tree::PathNode;
//!
//! let node = PathNode::root().child("users").child("list");
//! assert_eq!(node.path("/"), "root/users/list");
//!
//! let (anchor, names) = node.root_and_path();
//! assert!(anchor.is_none());
//! assert_eq!(names, vec!["users", "list"]);
//! ```

#![warn(unreachable_pub)]

mod dispatch;
mod error;
mod node;

pub use dispatch::{Anchor, CallArgs, DispatchError, Dispatcher};
pub use error::{TreeError, TreeResult};
pub use node::{Ancestors, NodeRecord, Parent, PathNode, DEFAULT_ROOT_NAME};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
