//! Engine configuration

use crate::EngineError;
use serde::{Deserialize, Serialize};

/// Configuration for the conclusion engine
///
/// Controls which offence result categories stop offences counting as final.
///
/// # Examples
///
/// ```
/// use proceedings_engine::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.blocking_categories, vec!["INTERMEDIARY".to_string()]);
/// assert!(!config.unrecognised_categories_block);
///
/// let config = EngineConfig::strict();
/// assert!(config.unrecognised_categories_block);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Result categories that mark an offence as still live
    ///
    /// Must include INTERMEDIARY; FINAL and ANCILLARY are never allowed.
    /// Default: ["INTERMEDIARY"]
    #[serde(default = "default_blocking_categories")]
    pub blocking_categories: Vec<String>,

    /// Treat categories outside FINAL/INTERMEDIARY/ANCILLARY as blocking too
    /// Default: false
    #[serde(default)]
    pub unrecognised_categories_block: bool,
}

fn default_blocking_categories() -> Vec<String> {
    vec!["INTERMEDIARY".to_string()]
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            blocking_categories: default_blocking_categories(),
            unrecognised_categories_block: false,
        }
    }
}

impl EngineConfig {
    /// Strict preset: any category the catalogue does not know blocks finality
    pub fn strict() -> Self {
        Self {
            blocking_categories: default_blocking_categories(),
            unrecognised_categories_block: true,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.blocking_categories.is_empty() {
            return Err(EngineError::Config(
                "blocking_categories must name at least one category".to_string(),
            ));
        }
        if self.blocking_categories.iter().any(|c| c.trim().is_empty()) {
            return Err(EngineError::Config(
                "blocking_categories cannot contain blank names".to_string(),
            ));
        }
        if let Some(name) = self.blocking_categories.iter().find(|c| {
            let c = c.trim();
            c.eq_ignore_ascii_case("FINAL") || c.eq_ignore_ascii_case("ANCILLARY")
        }) {
            return Err(EngineError::Config(format!(
                "{} cannot block finality",
                name.trim()
            )));
        }
        if !self
            .blocking_categories
            .iter()
            .any(|c| c.trim().eq_ignore_ascii_case("INTERMEDIARY"))
        {
            return Err(EngineError::Config(
                "blocking_categories must include INTERMEDIARY".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, EngineError> {
        let config: EngineConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, EngineError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
        assert!(EngineConfig::strict().validate().is_ok());
    }

    #[test]
    fn test_empty_blocking_categories() {
        let config = EngineConfig {
            blocking_categories: vec![],
            unrecognised_categories_block: false,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_final_cannot_block() {
        let config = EngineConfig {
            blocking_categories: vec!["INTERMEDIARY".to_string(), "final".to_string()],
            unrecognised_categories_block: false,
        };
        assert!(matches!(config.validate(), Err(EngineError::Config(_))));
    }

    #[test]
    fn test_ancillary_cannot_block() {
        let config = EngineConfig {
            blocking_categories: vec!["INTERMEDIARY".to_string(), "Ancillary".to_string()],
            unrecognised_categories_block: false,
        };
        assert!(matches!(config.validate(), Err(EngineError::Config(_))));
    }

    #[test]
    fn test_intermediary_required() {
        let config = EngineConfig {
            blocking_categories: vec!["PROVISIONAL".to_string()],
            unrecognised_categories_block: false,
        };
        assert!(matches!(config.validate(), Err(EngineError::Config(_))));
        assert!(EngineConfig::from_toml(r#"blocking_categories = ["PROVISIONAL"]"#).is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EngineConfig::from_toml("unrecognised_categories_block = true").unwrap();
        assert_eq!(config.blocking_categories, vec!["INTERMEDIARY"]);
        assert!(config.unrecognised_categories_block);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig::strict();
        let parsed = EngineConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_json_accepts_the_same_shape() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"blocking_categories": ["INTERMEDIARY", "PROVISIONAL"]}"#).unwrap();
        assert_eq!(config.blocking_categories.len(), 2);
        assert!(config.validate().is_ok());
    }
}
