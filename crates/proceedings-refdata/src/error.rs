//! Reference data error types

use proceedings_domain::{ApplicationCategory, CodeSet, ResultCode, ResultTypeId};
use thiserror::Error;

/// Errors raised while loading or validating reference data
///
/// These only ever surface at load time; a table that was built successfully
/// never produces an error during lookups.
#[derive(Error, Debug)]
pub enum ReferenceDataError {
    /// Failed to read the reference data file
    #[error("Failed to read reference data file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the TOML document
    #[error("Failed to parse reference data TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A result type id is blank
    #[error("Invalid result type id: {0}")]
    InvalidResultTypeId(String),

    /// An application category name is not recognised
    #[error("Invalid application category: {0}")]
    InvalidCategory(String),

    /// An outcome name is not recognised
    #[error("Invalid outcome: {0}")]
    InvalidOutcome(String),

    /// A result type was registered with a blank code
    #[error("Result type {0} has an empty code")]
    EmptyCode(ResultTypeId),

    /// The same result type id was registered twice
    #[error("Result type {0} is defined more than once")]
    DuplicateResultType(ResultTypeId),

    /// An application type entry has a blank type code
    #[error("Application type entry has an empty type code")]
    EmptyTypeCode,

    /// The same application type code was registered twice
    #[error("Application type code '{0}' is defined more than once")]
    DuplicateApplicationType(String),

    /// An application type code was mapped onto UNMAPPED explicitly
    #[error("Application type code '{0}' cannot be mapped to UNMAPPED")]
    UnmappedApplicationType(String),

    /// A rule targets the UNMAPPED category
    #[error("Rule {0} targets UNMAPPED, which never has rules")]
    RuleForUnmapped(CodeSet),

    /// A rule has no codes
    #[error("Rule for {0} has no codes")]
    EmptyRule(ApplicationCategory),

    /// A rule lists the same code twice
    #[error("Rule for {category} lists code {code} more than once")]
    DuplicateCodeInRule {
        /// Category of the offending rule
        category: ApplicationCategory,
        /// Repeated code
        code: ResultCode,
    },

    /// A rule references a code no result type carries
    #[error("Rule for {category} references unknown code {code}")]
    UnknownCode {
        /// Category of the offending rule
        category: ApplicationCategory,
        /// Code with no result type behind it
        code: ResultCode,
    },

    /// Two rules share the same (category, codes) key
    #[error("Rule for {category} with codes {codes} is defined more than once")]
    DuplicateRule {
        /// Category of the duplicated key
        category: ApplicationCategory,
        /// Codes of the duplicated key
        codes: CodeSet,
    },
}
