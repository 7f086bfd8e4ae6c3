//! Engine error types

use thiserror::Error;

/// Errors raised while configuring the engine
///
/// Deciding never fails; only building an engine from bad configuration does.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration TOML could not be parsed
    #[error("Failed to parse engine config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration could not be written as TOML
    #[error("Failed to serialize engine config TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Reference data could not be loaded
    #[error("Reference data error: {0}")]
    ReferenceData(#[from] proceedings_refdata::ReferenceDataError),
}
