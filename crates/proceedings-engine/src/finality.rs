//! Offence finality evaluation

use crate::EngineConfig;
use proceedings_domain::{Application, ResultCategory};
use std::collections::HashSet;

/// Which result categories stop an offence counting as final
///
/// INTERMEDIARY always blocks and FINAL and ANCILLARY never do, whatever the
/// configuration says; configuration only adds further categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalityPolicy {
    blocking: HashSet<ResultCategory>,
    unrecognised_block: bool,
}

impl FinalityPolicy {
    /// Build the policy described by `config`
    pub fn from_config(config: &EngineConfig) -> Self {
        let mut blocking: HashSet<ResultCategory> = config
            .blocking_categories
            .iter()
            .map(|name| ResultCategory::parse(name))
            .filter(|category| !matches!(category, ResultCategory::Final | ResultCategory::Ancillary))
            .collect();
        blocking.insert(ResultCategory::Intermediary);

        Self {
            blocking,
            unrecognised_block: config.unrecognised_categories_block,
        }
    }

    /// Whether a result of this category keeps the matter live
    pub fn blocks(&self, category: &ResultCategory) -> bool {
        self.blocking.contains(category) || (self.unrecognised_block && !category.is_recognised())
    }
}

impl Default for FinalityPolicy {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

/// Whether every result on every reachable offence is final
///
/// Offences are gathered from each case and from the court order, so both
/// appeals (offences under a case) and breaches (offences under the order)
/// are covered. With no offence results at all there is no evidence of
/// finality and the answer is `false`.
pub fn offences_all_final(application: &Application, policy: &FinalityPolicy) -> bool {
    let mut seen_any = false;
    for result in application.offence_results() {
        if policy.blocks(&result.category) {
            return false;
        }
        seen_any = true;
    }
    seen_any
}
