//! Application categories - the rule families application types map onto

use std::fmt;

/// Category of a court application
///
/// Many legal application type codes share a category (every breach-of-order
/// type shares `Breach`, for instance). `Unmapped` is what an unrecognised
/// type code resolves to; no rule ever applies to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ApplicationCategory {
    /// Appeal against conviction
    AppealConviction,

    /// Appeal against sentence
    AppealSentence,

    /// Appeal against both conviction and sentence
    AppealConvictionAndSentence,

    /// Statutory declaration (proceedings the defendant did not know about)
    StatutoryDeclaration,

    /// Application to reopen a case
    ReopenCase,

    /// Breach of a community, suspended-sentence or other order
    Breach,

    /// Confiscation order
    ConfiscationOrder,

    /// Type code absent from the reference data
    Unmapped,
}

impl ApplicationCategory {
    /// Every category rules can be written for (everything except `Unmapped`)
    pub const MAPPED: [ApplicationCategory; 7] = [
        ApplicationCategory::AppealConviction,
        ApplicationCategory::AppealSentence,
        ApplicationCategory::AppealConvictionAndSentence,
        ApplicationCategory::StatutoryDeclaration,
        ApplicationCategory::ReopenCase,
        ApplicationCategory::Breach,
        ApplicationCategory::ConfiscationOrder,
    ];

    /// Get the category name as used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationCategory::AppealConviction => "APPEAL_CONVICTION",
            ApplicationCategory::AppealSentence => "APPEAL_SENTENCE",
            ApplicationCategory::AppealConvictionAndSentence => "APPEAL_CONVICTION_AND_SENTENCE",
            ApplicationCategory::StatutoryDeclaration => "STATUTORY_DECLARATION",
            ApplicationCategory::ReopenCase => "REOPEN_CASE",
            ApplicationCategory::Breach => "BREACH",
            ApplicationCategory::ConfiscationOrder => "CONFISCATION_ORDER",
            ApplicationCategory::Unmapped => "UNMAPPED",
        }
    }

    /// Parse a category name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "APPEAL_CONVICTION" => Some(ApplicationCategory::AppealConviction),
            "APPEAL_SENTENCE" => Some(ApplicationCategory::AppealSentence),
            "APPEAL_CONVICTION_AND_SENTENCE" => Some(ApplicationCategory::AppealConvictionAndSentence),
            "STATUTORY_DECLARATION" => Some(ApplicationCategory::StatutoryDeclaration),
            "REOPEN_CASE" => Some(ApplicationCategory::ReopenCase),
            "BREACH" => Some(ApplicationCategory::Breach),
            "CONFISCATION_ORDER" => Some(ApplicationCategory::ConfiscationOrder),
            "UNMAPPED" => Some(ApplicationCategory::Unmapped),
            _ => None,
        }
    }

    /// Whether rules can apply to this category
    pub fn is_mapped(&self) -> bool {
        !matches!(self, ApplicationCategory::Unmapped)
    }
}

impl fmt::Display for ApplicationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ApplicationCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid application category: {}", s))
    }
}
