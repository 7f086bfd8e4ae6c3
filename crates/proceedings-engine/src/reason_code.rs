//! Reason code formatting
//!
//! The reason code is the short code of every recognised primary result,
//! joined with `" & "` in encounter order. Downstream legal-aid and search
//! documents store it verbatim, so both literals below are part of the
//! external contract.

use proceedings_domain::{CodeSet, JudicialResult, ResultCode};
use proceedings_refdata::ReferenceData;

/// Reason code used when primary results exist but none is recognised
pub const UNKNOWN_RESULT: &str = "UNKNOWN_RESULT";

/// Separator between codes in a multi-result reason code
pub const CODE_SEPARATOR: &str = " & ";

/// Primary results mapped through the result-code table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedCodes {
    /// Codes that resolved, in encounter order, duplicates kept
    pub codes: Vec<ResultCode>,

    /// How many primary results had no registered code
    pub unresolved: usize,
}

impl ResolvedCodes {
    /// Look up the code of each primary result
    pub fn resolve(primary: &[&JudicialResult], reference: &ReferenceData) -> Self {
        let codes: Vec<ResultCode> = primary
            .iter()
            .filter_map(|r| reference.code_of(&r.result_type_id).cloned())
            .collect();
        let unresolved = primary.len() - codes.len();
        Self { codes, unresolved }
    }

    /// Whether there were no primary results at all
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty() && self.unresolved == 0
    }

    /// Whether every primary result had a registered code
    pub fn is_fully_resolved(&self) -> bool {
        self.unresolved == 0
    }

    /// The resolved codes as a rule key
    pub fn code_set(&self) -> CodeSet {
        self.codes.iter().cloned().collect()
    }

    /// Canonical reason code
    ///
    /// - no primary results: `None`
    /// - primary results, none recognised: `"UNKNOWN_RESULT"`
    /// - otherwise the recognised codes joined with `" & "`
    pub fn reason_code(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        if self.codes.is_empty() {
            return Some(UNKNOWN_RESULT.to_string());
        }
        let codes: Vec<&str> = self.codes.iter().map(ResultCode::as_str).collect();
        Some(codes.join(CODE_SEPARATOR))
    }
}

/// Reason code for a list of primary results
pub fn format_reason_code(primary: &[&JudicialResult], reference: &ReferenceData) -> Option<String> {
    ResolvedCodes::resolve(primary, reference).reason_code()
}
