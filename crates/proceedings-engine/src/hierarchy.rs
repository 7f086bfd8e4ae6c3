//! Result hierarchy filtering

use proceedings_domain::JudicialResult;

/// Keep only primary (root-level) results, in encounter order
///
/// Nested results (an ancillary order hanging off a sentence, say) are not
/// independent disposals and must never take part in a rule lookup.
pub fn primary_results(results: &[JudicialResult]) -> Vec<&JudicialResult> {
    results.iter().filter(|r| r.is_primary()).collect()
}
