//! Decide command implementation.

use crate::cli::DecideArgs;
use crate::commands::read_input;
use crate::error::Result;
use crate::output::Formatter;
use crate::payload::ApplicationPayload;
use proceedings_domain::Application;
use proceedings_engine::{ConclusionEngine, Decision};

/// Execute the decide command.
pub fn execute_decide(
    args: DecideArgs,
    engine: &ConclusionEngine,
    formatter: &Formatter,
) -> Result<()> {
    let input = read_input(&args.input)?;
    let decision = decide_json(&input, engine)?;
    println!("{}", formatter.format_decision(decision.as_ref())?);
    Ok(())
}

/// Decide one application given as JSON; `null` yields no decision.
pub fn decide_json(input: &str, engine: &ConclusionEngine) -> Result<Option<Decision>> {
    let payload: Option<ApplicationPayload> = serde_json::from_str(input)?;
    let application = payload.map(Application::try_from).transpose()?;
    Ok(engine.decide(application.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use proceedings_domain::{ApplicationCategory, Outcome, ResultTypeId};
    use proceedings_engine::DecisionBasis;
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
    fn test_decide_payload() {
        let input = r#"{
            "typeCode": "APPEAL_AGAINST_CONVICTION",
            "judicialResults": [
                { "judicialResultTypeId": "00000000-0000-0000-0000-000000000a01", "category": "FINAL" }
            ]
        }"#;

        let decision = decide_json(input, &engine()).unwrap().unwrap();
        assert!(decision.concluded);
        assert_eq!(decision.reason_code.as_deref(), Some("APA"));
    }

    #[test]
    fn test_decide_blank_type_code() {
        let decision = decide_json(r#"{"typeCode": " "}"#, &engine()).unwrap().unwrap();
        assert_eq!(decision.category, ApplicationCategory::Unmapped);
        assert!(!decision.concluded);
    }

    #[test]
    fn test_decide_unregistered_result_id() {
        let input = r#"{
            "typeCode": "APPEAL_AGAINST_CONVICTION",
            "judicialResults": [
                { "judicialResultTypeId": "NEW-RESULT-42", "category": "FINAL" }
            ]
        }"#;

        let decision = decide_json(input, &engine()).unwrap().unwrap();
        assert!(!decision.concluded);
        assert_eq!(decision.reason_code.as_deref(), Some("UNKNOWN_RESULT"));
        assert_eq!(decision.basis, DecisionBasis::UnresolvedResult { unresolved: 1 });
    }

    #[test]
    fn test_decide_null() {
        assert!(decide_json("null", &engine()).unwrap().is_none());
    }

    #[test]
    fn test_decide_malformed_json() {
        assert!(matches!(
            decide_json("{", &engine()),
            Err(CliError::Serialization(_))
        ));
    }
}
