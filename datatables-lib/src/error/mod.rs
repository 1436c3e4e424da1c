//! Error types

mod boundary;
mod config;
mod session;

pub use boundary::*;
pub use config::*;
pub use session::*;

/// Top-level error for rendering a table widget.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The dataset or table configuration was rejected before rendering.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The widget boundary failed or returned something unusable.
    #[error("Widget boundary error: {0}")]
    Boundary(#[from] BoundaryError),

    /// The session store could not read or write a value.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// A page kept requesting reruns past the configured limit.
    #[error("Page requested more than {0} consecutive reruns")]
    RerunLimit(usize),
}

impl Error {
    /// Returns `true` if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
