//! Session store error types

/// Errors from a session store.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A stored value did not have the expected shape.
    #[error("Session value '{key}' could not be decoded: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded for storage.
    #[error("Session value '{key}' could not be encoded: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The backing storage failed.
    #[error("Session storage error: {0}")]
    Storage(String),
}
