//! Metrics collection over batches of decisions

use crate::Decision;
use proceedings_domain::ApplicationCategory;
use std::collections::BTreeMap;

/// Counts accumulated while deciding a batch of applications
///
/// The engine itself never records anything; callers feed decisions in.
#[derive(Debug, Clone, Default)]
pub struct DecisionMetrics {
    /// Decisions recorded
    pub decisions: usize,

    /// Decisions with `concluded == true`
    pub concluded: usize,

    /// Decisions per basis label
    pub by_basis: BTreeMap<&'static str, usize>,

    /// Decisions per application category
    pub by_category: BTreeMap<ApplicationCategory, usize>,

    /// Decisions reported with the UNKNOWN_RESULT reason code
    pub unknown_results: usize,
}

impl DecisionMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one decision
    pub fn record(&mut self, decision: &Decision) {
        self.decisions += 1;
        if decision.concluded {
            self.concluded += 1;
        }
        *self.by_basis.entry(decision.basis.as_str()).or_insert(0) += 1;
        *self.by_category.entry(decision.category).or_insert(0) += 1;
        if decision.reason_code.as_deref() == Some(crate::UNKNOWN_RESULT) {
            self.unknown_results += 1;
        }
    }

    /// Decisions that left proceedings open
    pub fn not_concluded(&self) -> usize {
        self.decisions - self.concluded
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Decision Metrics Summary".to_string(),
            "========================".to_string(),
            format!("Decisions: {}", self.decisions),
            format!("Concluded: {}", self.concluded),
            format!("Not concluded: {}", self.not_concluded()),
            format!("Unknown results: {}", self.unknown_results),
        ];

        if !self.by_basis.is_empty() {
            lines.push(String::new());
            lines.push("By basis:".to_string());
            for (basis, count) in &self.by_basis {
                lines.push(format!("  {}: {}", basis, count));
            }
        }

        if !self.by_category.is_empty() {
            lines.push(String::new());
            lines.push("By category:".to_string());
            for (category, count) in &self.by_category {
                lines.push(format!("  {}: {}", category, count));
            }
        }

        lines.join("\n")
    }
}
