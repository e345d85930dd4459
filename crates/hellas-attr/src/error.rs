//! Error types for attribute maps

/// Errors raised by [`AttrMap`](crate::AttrMap) and its views
#[derive(Debug, thiserror::Error)]
pub enum AttrError {
    /// Attribute (or dotted path) not present
    #[error("attribute not found: '{key}'")]
    NotFound {
        /// Missing key or unresolved dotted prefix
        key: String,
    },

    /// Input was not a JSON object
    #[error("expected a mapping, found {found}")]
    NotAMapping {
        /// JSON type that was given instead
        found: &'static str,
    },

    /// JSON parse or encode failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AttrError {
    /// Create not-found error for a key
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }
}

/// Result type alias for attribute operations
pub type AttrResult<T> = Result<T, AttrError>;
