use thiserror::Error;

/// Top-level error type for the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Local storage error.
    #[error("storage error: {0}")]
    Storage(String),

    /// Caller supplied a value outside the accepted domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Referenced entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
