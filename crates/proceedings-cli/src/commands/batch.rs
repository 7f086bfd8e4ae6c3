//! Batch command implementation.

use crate::cli::BatchArgs;
use crate::commands::read_input;
use crate::error::Result;
use crate::output::{BatchEntry, Formatter};
use crate::payload::ApplicationPayload;
use proceedings_domain::Application;
use proceedings_engine::{ConclusionEngine, DecisionMetrics};

/// Execute the batch command.
pub fn execute_batch(
    args: BatchArgs,
    engine: &ConclusionEngine,
    formatter: &Formatter,
) -> Result<()> {
    let input = read_input(&args.input)?;
    let payloads: Vec<ApplicationPayload> = serde_json::from_str(&input)?;

    let mut metrics = DecisionMetrics::new();
    let entries = decide_all(payloads, engine, &mut metrics);

    println!("{}", formatter.format_batch(&entries)?);

    if args.summary {
        // stderr keeps stdout parseable in json and quiet modes
        eprintln!("{}", metrics.summary());
    }

    Ok(())
}

/// Decide every payload, recording decisions in `metrics`.
///
/// A payload that fails conversion is reported and skipped; the rest of the
/// batch is still decided.
pub fn decide_all(
    payloads: Vec<ApplicationPayload>,
    engine: &ConclusionEngine,
    metrics: &mut DecisionMetrics,
) -> Vec<BatchEntry> {
    // One snapshot for the whole batch
    let reference = engine.reference_data().snapshot();

    payloads
        .into_iter()
        .enumerate()
        .map(|(index, payload)| match Application::try_from(payload) {
            Ok(application) => {
                let decision = engine.evaluate_against(&reference, &application);
                metrics.record(&decision);
                BatchEntry::Decided(decision)
            }
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping application");
                BatchEntry::Rejected {
                    index,
                    message: e.to_string(),
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proceedings_domain::{ApplicationCategory, Outcome, ResultTypeId};
    use proceedings_refdata::ReferenceData;

    fn engine() -> ConclusionEngine {
        let data = ReferenceData::builder()
            .result_type(ResultTypeId::from_u128(0xa01), "APA")
            .application_type("APPEAL_AGAINST_CONVICTION", ApplicationCategory::AppealConviction)
            .rule(ApplicationCategory::AppealConviction, ["APA"], Outcome::Concludes)
            .build()
            .unwrap();
        ConclusionEngine::with_defaults(data)
    }

    #[test]
    fn test_batch_continues_past_bad_payload() {
        let payloads: Vec<ApplicationPayload> = serde_json::from_str(
            r#"[
                { "typeCode": "APPEAL_AGAINST_CONVICTION",
                  "judicialResults": [{ "judicialResultTypeId": "00000000-0000-0000-0000-000000000a01", "category": "FINAL" }] },
                { "id": "not-a-uuid", "typeCode": "APPEAL_AGAINST_CONVICTION" },
                { "typeCode": "SOMETHING_ELSE" }
            ]"#,
        )
        .unwrap();

        let mut metrics = DecisionMetrics::new();
        let entries = decide_all(payloads, &engine(), &mut metrics);

        assert_eq!(entries.len(), 3);
        assert!(matches!(&entries[0], BatchEntry::Decided(d) if d.concluded));
        assert!(matches!(&entries[1], BatchEntry::Rejected { index: 1, .. }));
        assert!(matches!(&entries[2], BatchEntry::Decided(d) if !d.concluded));

        assert_eq!(metrics.decisions, 2);
        assert_eq!(metrics.concluded, 1);
        assert_eq!(metrics.by_category.get(&ApplicationCategory::Unmapped), Some(&1));
    }

    #[test]
    fn test_batch_decides_unregistered_ids_and_blank_type_codes() {
        let payloads: Vec<ApplicationPayload> = serde_json::from_str(
            r#"[
                { "typeCode": "APPEAL_AGAINST_CONVICTION",
                  "judicialResults": [{ "judicialResultTypeId": "NEW-RESULT-42", "category": "FINAL" }] },
                { "typeCode": "" }
            ]"#,
        )
        .unwrap();

        let mut metrics = DecisionMetrics::new();
        let entries = decide_all(payloads, &engine(), &mut metrics);

        assert!(matches!(
            &entries[0],
            BatchEntry::Decided(d) if !d.concluded && d.reason_code.as_deref() == Some("UNKNOWN_RESULT")
        ));
        assert!(matches!(
            &entries[1],
            BatchEntry::Decided(d) if d.category == ApplicationCategory::Unmapped
        ));
        assert_eq!(metrics.decisions, 2);
        assert_eq!(metrics.unknown_results, 1);
    }
}
