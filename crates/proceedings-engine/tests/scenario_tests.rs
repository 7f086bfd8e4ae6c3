//! End-to-end decisions against reference data loaded from TOML
//!
//! Appeal-against-conviction scenarios plus breach applications, whose
//! offences sit under the court order rather than a case.

use proceedings_domain::{
    Application, ApplicationCategory, ApplicationId, Case, CourtOrder, JudicialResult, Offence,
    ResultCategory, ResultTypeId,
};
use proceedings_engine::{ConclusionEngine, DecisionBasis, UNKNOWN_RESULT};
use proceedings_refdata::ReferenceData;
use std::sync::Arc;
use std::thread;

const APA: ResultTypeId = ResultTypeId::from_u128(0x0A01);
const AACD: ResultTypeId = ResultTypeId::from_u128(0x0A02);
const ASV: ResultTypeId = ResultTypeId::from_u128(0x0A03);
const BRO: ResultTypeId = ResultTypeId::from_u128(0x0B01);
const UNREGISTERED: ResultTypeId = ResultTypeId::from_u128(0xFFFF);
const OFFENCE_RESULT: ResultTypeId = ResultTypeId::from_u128(0x0C01);

const REFERENCE_DATA: &str = r#"
[[result_types]]
id = "00000000-0000-0000-0000-000000000a01"
code = "APA_CODE"

[[result_types]]
id = "00000000-0000-0000-0000-000000000a02"
code = "AACD_CODE"

[[result_types]]
id = "00000000-0000-0000-0000-000000000a03"
code = "ASV_CODE"

[[result_types]]
id = "00000000-0000-0000-0000-000000000b01"
code = "BRO_CODE"

[[application_types]]
type_code = "APPEAL_AGAINST_CONVICTION"
category = "APPEAL_CONVICTION"

[[application_types]]
type_code = "BREACH_COMMUNITY_ORDER"
category = "BREACH"

[[application_types]]
type_code = "BREACH_SUSPENDED_SENTENCE"
category = "BREACH"

[[rules]]
category = "APPEAL_CONVICTION"
codes = ["APA_CODE"]
outcome = "CONCLUDES"

[[rules]]
category = "APPEAL_CONVICTION"
codes = ["ASV_CODE"]
outcome = "CONCLUDES_IF_OFFENCES_FINAL"

[[rules]]
category = "APPEAL_CONVICTION"
codes = ["AACD_CODE", "ASV_CODE"]
outcome = "DOES_NOT_CONCLUDE"

[[rules]]
category = "BREACH"
codes = ["BRO_CODE"]
outcome = "CONCLUDES_IF_OFFENCES_FINAL"
"#;

fn engine() -> ConclusionEngine {
    ConclusionEngine::with_defaults(ReferenceData::from_toml(REFERENCE_DATA).unwrap())
}

fn appeal(ids: &[ResultTypeId]) -> Application {
    ids.iter().fold(
        Application::new(ApplicationId::new(), "APPEAL_AGAINST_CONVICTION"),
        |app, id| app.with_result(JudicialResult::primary(id.clone(), ResultCategory::Final)),
    )
}

fn offences(categories: &[ResultCategory]) -> Vec<Offence> {
    categories
        .iter()
        .map(|c| Offence::new(vec![JudicialResult::primary(OFFENCE_RESULT, c.clone())]))
        .collect()
}

#[test]
fn test_single_concluding_result() {
    let decision = engine().decide(Some(&appeal(&[APA]))).unwrap();

    assert!(decision.concluded);
    assert_eq!(decision.reason_code.as_deref(), Some("APA_CODE"));
    assert_eq!(decision.category, ApplicationCategory::AppealConviction);
}

#[test]
fn test_combination_that_does_not_conclude() {
    let decision = engine().decide(Some(&appeal(&[AACD, ASV]))).unwrap();

    assert!(!decision.concluded);
    assert_eq!(decision.reason_code.as_deref(), Some("AACD_CODE & ASV_CODE"));
}

#[test]
fn test_conditional_result_without_offences() {
    let decision = engine().decide(Some(&appeal(&[ASV]))).unwrap();

    assert!(!decision.concluded);
    assert_eq!(decision.reason_code.as_deref(), Some("ASV_CODE"));
}

#[test]
fn test_conditional_result_with_final_offences() {
    let app = appeal(&[ASV]).with_case(Case::new(offences(&[
        ResultCategory::Final,
        ResultCategory::Final,
    ])));
    let decision = engine().decide(Some(&app)).unwrap();

    assert!(decision.concluded);
    assert_eq!(decision.reason_code.as_deref(), Some("ASV_CODE"));
}

#[test]
fn test_unregistered_result() {
    let decision = engine().decide(Some(&appeal(&[UNREGISTERED]))).unwrap();

    assert!(!decision.concluded);
    assert_eq!(decision.reason_code.as_deref(), Some(UNKNOWN_RESULT));
    assert_eq!(decision.reason_code.as_deref(), Some("UNKNOWN_RESULT"));
}

#[test]
fn test_no_primary_results_with_interlocutory_offence() {
    let app = appeal(&[]).with_case(Case::new(offences(&[
        ResultCategory::Final,
        ResultCategory::Intermediary,
    ])));
    let decision = engine().decide(Some(&app)).unwrap();

    assert!(!decision.concluded);
    assert_eq!(decision.reason_code, None);
    assert_eq!(decision.basis, DecisionBasis::OffenceFinality { all_final: false });
}

#[test]
fn test_nothing_recorded_anywhere() {
    let decision = engine().decide(Some(&appeal(&[]))).unwrap();

    assert!(!decision.concluded);
    assert_eq!(decision.reason_code, None);
}

#[test]
fn test_absent_application() {
    assert!(engine().decide(None).is_none());
}

#[test]
fn test_breach_types_share_rules() {
    for type_code in ["BREACH_COMMUNITY_ORDER", "BREACH_SUSPENDED_SENTENCE"] {
        let app = Application::new(ApplicationId::new(), type_code)
            .with_result(JudicialResult::primary(BRO, ResultCategory::Final))
            .with_court_order(CourtOrder::new(offences(&[ResultCategory::Final])));
        let decision = engine().decide(Some(&app)).unwrap();

        assert_eq!(decision.category, ApplicationCategory::Breach);
        assert!(decision.concluded, "{} should conclude", type_code);
        assert_eq!(decision.reason_code.as_deref(), Some("BRO_CODE"));
    }
}

#[test]
fn test_unknown_application_type() {
    let app = Application::new(ApplicationId::new(), "NEW_TYPE_NOT_YET_REGISTERED")
        .with_result(JudicialResult::primary(APA, ResultCategory::Final));
    let decision = engine().decide(Some(&app)).unwrap();

    assert!(!decision.concluded);
    assert_eq!(decision.category, ApplicationCategory::Unmapped);
    assert_eq!(decision.reason_code.as_deref(), Some("APA_CODE"));
}

#[test]
fn test_concurrent_decisions_during_reload() {
    let engine = Arc::new(engine());
    let app = Arc::new(appeal(&[APA]));

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let app = Arc::clone(&app);
            thread::spawn(move || {
                for _ in 0..200 {
                    let decision = engine.evaluate(&app);
                    // Either the full table (concluded) or the empty one (unmapped), never a mix
                    match decision.category {
                        ApplicationCategory::AppealConviction => assert!(decision.concluded),
                        ApplicationCategory::Unmapped => {
                            assert!(!decision.concluded);
                            assert_eq!(decision.reason_code.as_deref(), Some(UNKNOWN_RESULT));
                        }
                        other => panic!("Unexpected category {}", other),
                    }
                }
            })
        })
        .collect();

    for _ in 0..25 {
        engine.reference_data().replace(ReferenceData::empty());
        engine
            .reference_data()
            .replace(ReferenceData::from_toml(REFERENCE_DATA).unwrap());
    }

    for worker in workers {
        worker.join().unwrap();
    }
}
