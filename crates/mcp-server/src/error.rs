//! Error types for the relay server.

use thiserror::Error;

/// Main error type for server wiring. Tool-call failures never surface here;
/// they are normalized into envelopes at the façade.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration errors (invalid values, missing required settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Startup errors (server failed to bind or start)
    #[error("Startup error: {0}")]
    Startup(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;
