//! TOML loading for reference data
//!
//! The file layout:
//!
//! ```toml
//! [[result_types]]
//! id = "6feb0f2e-8d1e-4a5c-9b7a-0c1f6c1a0001"
//! code = "APA"
//! label = "Appeal abandoned"          # optional, ignored by the engine
//!
//! [[application_types]]
//! type_code = "APPEAL_AGAINST_CONVICTION"
//! category = "APPEAL_CONVICTION"
//!
//! [[rules]]
//! category = "APPEAL_CONVICTION"
//! codes = ["APA"]
//! outcome = "CONCLUDES"
//! ```

use crate::{ReferenceData, ReferenceDataError};
use proceedings_domain::{ApplicationCategory, Outcome, ResultTypeId};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ReferenceDataFile {
    #[serde(default)]
    result_types: Vec<ResultTypeEntry>,

    #[serde(default)]
    application_types: Vec<ApplicationTypeEntry>,

    #[serde(default)]
    rules: Vec<RuleEntry>,
}

#[derive(Debug, Deserialize)]
struct ResultTypeEntry {
    id: String,
    code: String,
}

#[derive(Debug, Deserialize)]
struct ApplicationTypeEntry {
    type_code: String,
    category: String,
}

#[derive(Debug, Deserialize)]
struct RuleEntry {
    category: String,
    codes: Vec<String>,
    outcome: String,
}

fn parse_category(name: &str) -> Result<ApplicationCategory, ReferenceDataError> {
    ApplicationCategory::parse(name).ok_or_else(|| ReferenceDataError::InvalidCategory(name.to_string()))
}

impl ReferenceData {
    /// Load reference data from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReferenceDataError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let data = Self::from_toml(&contents)?;

        tracing::info!(
            path = %path.display(),
            result_types = data.result_type_count(),
            application_types = data.application_type_count(),
            rules = data.rule_count(),
            "Loaded reference data"
        );

        Ok(data)
    }

    /// Parse and validate reference data from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ReferenceDataError> {
        let file: ReferenceDataFile = toml::from_str(toml_str)?;
        let mut builder = ReferenceData::builder();

        for entry in file.result_types {
            let id = ResultTypeId::parse(&entry.id).map_err(ReferenceDataError::InvalidResultTypeId)?;
            builder = builder.result_type(id, entry.code);
        }

        for entry in file.application_types {
            let category = parse_category(&entry.category)?;
            builder = builder.application_type(entry.type_code, category);
        }

        for entry in file.rules {
            let category = parse_category(&entry.category)?;
            let outcome = Outcome::parse(&entry.outcome)
                .ok_or_else(|| ReferenceDataError::InvalidOutcome(entry.outcome.clone()))?;
            builder = builder.rule(category, entry.codes, outcome);
        }

        builder.build()
    }
}
