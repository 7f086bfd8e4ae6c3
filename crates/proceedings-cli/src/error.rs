//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reference data could not be loaded
    #[error("Reference data error: {0}")]
    ReferenceData(#[from] proceedings_refdata::ReferenceDataError),

    /// Engine could not be built
    #[error("Engine error: {0}")]
    Engine(#[from] proceedings_engine::EngineError),

    /// Application payload could not be converted
    #[error("Payload error: {0}")]
    Payload(#[from] crate::payload::PayloadError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
