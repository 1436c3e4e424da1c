//! Widget boundary error types

/// Errors crossing the boundary to the embedded widget.
#[derive(Debug, thiserror::Error)]
pub enum BoundaryError {
    /// The widget could not be reached (e.g. its endpoint is not serving).
    #[error("Widget unavailable: {0}")]
    Unavailable(String),

    /// The widget delivered a value that is neither a selection nor an action.
    #[error("Unexpected widget value ({reason}): {value}")]
    UnexpectedValue {
        /// Why the value was rejected.
        reason: String,
        /// The raw value as delivered.
        value: serde_json::Value,
    },

    /// The payload could not be serialized.
    #[error("Payload serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl BoundaryError {
    /// Creates an unexpected value error.
    pub fn unexpected(reason: impl Into<String>, value: serde_json::Value) -> Self {
        Self::UnexpectedValue {
            reason: reason.into(),
            value,
        }
    }
}
