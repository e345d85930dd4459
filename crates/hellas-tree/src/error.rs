//! Error types for path trees

use crate::dispatch::DispatchError;

/// Errors raised while resolving or persisting a [`PathNode`](crate::PathNode)
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The chain's anchor has no dispatch hook (or there is no anchor)
    #[error("unsupported operation: anchor '{anchor_type}' does not dispatch paths")]
    Unsupported {
        /// Type name of the anchor, `<none>` when the chain has none
        anchor_type: String,
    },

    /// The anchor's dispatcher rejected the call
    #[error("dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),

    /// Record could not be encoded or decoded
    #[error("record serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TreeError {
    /// Create unsupported error for an anchor type name
    pub fn unsupported(anchor_type: impl Into<String>) -> Self {
        Self::Unsupported {
            anchor_type: anchor_type.into(),
        }
    }
}

/// Result type alias for tree operations
pub type TreeResult<T> = Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_display_names_anchor() {
        let err = TreeError::unsupported("my_crate::Client");
        assert_eq!(
            err.to_string(),
            "unsupported operation: anchor 'my_crate::Client' does not dispatch paths"
        );
    }

    #[test]
    fn dispatch_error_converts() {
        let err: TreeError = DispatchError::unknown_path("root/x").into();
        assert!(matches!(err, TreeError::Dispatch(_)));
    }
}
