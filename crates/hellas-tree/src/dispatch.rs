//! Anchors and the dispatch capability
//!
//! An [`Anchor`] terminates a chain of [`PathNode`]s. Anchors that want built
//! paths to become commands expose a [`Dispatcher`].

use crate::node::PathNode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// External object owning the root of a path tree
///
/// # Example
/// ```rust
/// use hellas_tree::{Anchor, CallArgs, DispatchError, Dispatcher, PathNode};
/// use serde_json::Value;
/// use std::sync::Arc;
///
/// struct Client;
///
/// impl Dispatcher for Client {
///     fn dispatch(&self, node: &PathNode, _args: CallArgs) -> Result<Value, DispatchError> {
///         Ok(Value::String(node.path(".")))
///     }
/// }
///
/// impl Anchor for Client {
///     fn dispatcher(&self) -> Option<&dyn Dispatcher> {
///         Some(self)
///     }
/// }
///
/// let users = PathNode::anchored(Arc::new(Client)).child("users");
/// let out = users.child("list").invoke(CallArgs::new()).unwrap();
/// assert_eq!(out, Value::String("root.users.list".into()));
/// ```
pub trait Anchor: Send + Sync {
    /// Type name reported in errors
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Dispatch hook, if this anchor supports invoking paths
    fn dispatcher(&self) -> Option<&dyn Dispatcher> {
        None
    }
}

/// Executes a built path against its anchor
pub trait Dispatcher: Send + Sync {
    /// Handle an invocation of `node` with the given arguments
    ///
    /// # Errors
    /// Implementation-defined; surfaced to the caller as
    /// [`TreeError::Dispatch`](crate::TreeError::Dispatch)
    fn dispatch(&self, node: &PathNode, args: CallArgs) -> Result<Value, DispatchError>;
}

impl<F> Dispatcher for F
where
    F: Fn(&PathNode, CallArgs) -> Result<Value, DispatchError> + Send + Sync,
{
    fn dispatch(&self, node: &PathNode, args: CallArgs) -> Result<Value, DispatchError> {
        self(node, args)
    }
}

/// Positional and keyword arguments of an invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallArgs {
    /// Positional arguments, in call order
    #[serde(default)]
    pub positional: Vec<Value>,

    /// Keyword arguments
    #[serde(default)]
    pub keyword: Map<String, Value>,
}

impl CallArgs {
    /// Empty argument list
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument
    #[must_use]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a keyword argument
    #[must_use]
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.insert(key.into(), value.into());
        self
    }

    /// Check if no arguments were supplied
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }
}

impl From<Vec<Value>> for CallArgs {
    fn from(positional: Vec<Value>) -> Self {
        Self {
            positional,
            keyword: Map::new(),
        }
    }
}

/// Errors reported by a [`Dispatcher`]
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Dispatcher does not recognise the path
    #[error("unknown path: {path}")]
    UnknownPath {
        /// Dotted path that was invoked
        path: String,
    },

    /// Arguments rejected for the path
    #[error("invalid arguments for {path}: {reason}")]
    InvalidArguments {
        /// Dotted path that was invoked
        path: String,
        /// What was wrong with the arguments
        reason: String,
    },

    /// Command ran and failed
    #[error("command failed: {0}")]
    Failed(String),
}

impl DispatchError {
    /// Create unknown path error
    pub fn unknown_path(path: impl Into<String>) -> Self {
        Self::UnknownPath { path: path.into() }
    }

    /// Create invalid arguments error
    pub fn invalid_arguments(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
