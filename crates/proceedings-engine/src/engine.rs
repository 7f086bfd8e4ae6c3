//! The proceedings-concluded decision

use crate::finality::{offences_all_final, FinalityPolicy};
use crate::hierarchy::primary_results;
use crate::reason_code::ResolvedCodes;
use crate::{EngineConfig, EngineError};
use proceedings_domain::{Application, ApplicationCategory, ApplicationId, Outcome};
use proceedings_refdata::{ReferenceData, ReferenceDataHandle};
use std::fmt;

/// Why a decision came out the way it did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionBasis {
    /// The application type code has no category
    UnmappedCategory,

    /// Nothing was recorded on the application; offences decided it
    OffenceFinality {
        /// Whether every offence result was final
        all_final: bool,
    },

    /// At least one primary result has no registered code
    UnresolvedResult {
        /// Number of unrecognised primary results
        unresolved: usize,
    },

    /// The combination of codes has no rule for this category
    NoRule,

    /// A rule matched
    Rule {
        /// The rule's outcome
        outcome: Outcome,
        /// Offence finality, when the outcome depends on it
        offences_final: Option<bool>,
    },
}

impl DecisionBasis {
    /// Whether this basis means the proceedings are concluded
    pub fn concluded(&self) -> bool {
        match self {
            DecisionBasis::UnmappedCategory
            | DecisionBasis::UnresolvedResult { .. }
            | DecisionBasis::NoRule => false,
            DecisionBasis::OffenceFinality { all_final } => *all_final,
            DecisionBasis::Rule { outcome, offences_final } => match outcome {
                Outcome::Concludes => true,
                Outcome::ConcludesIfOffencesFinal => offences_final.unwrap_or(false),
                Outcome::DoesNotConclude => false,
            },
        }
    }

    /// Short label, used in logs and metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionBasis::UnmappedCategory => "unmapped_category",
            DecisionBasis::OffenceFinality { .. } => "offence_finality",
            DecisionBasis::UnresolvedResult { .. } => "unresolved_result",
            DecisionBasis::NoRule => "no_rule",
            DecisionBasis::Rule { .. } => "rule",
        }
    }
}

impl fmt::Display for DecisionBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionBasis::OffenceFinality { all_final } => {
                write!(f, "offence_finality (all final: {})", all_final)
            }
            DecisionBasis::UnresolvedResult { unresolved } => {
                write!(f, "unresolved_result ({} unrecognised)", unresolved)
            }
            DecisionBasis::Rule { outcome, offences_final: Some(all_final) } => {
                write!(f, "rule {} (all final: {})", outcome, all_final)
            }
            DecisionBasis::Rule { outcome, offences_final: None } => write!(f, "rule {}", outcome),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Verdict on whether an application's proceedings are concluded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// Application the decision is about
    pub application_id: ApplicationId,

    /// Category the application type resolved to
    pub category: ApplicationCategory,

    /// Whether the proceedings are concluded
    pub concluded: bool,

    /// Codes of the primary results, computed whatever the verdict
    pub reason_code: Option<String>,

    /// Which path produced the verdict
    pub basis: DecisionBasis,
}

/// Decides whether applications' court proceedings are concluded
///
/// Stateless apart from its configuration and a handle on the reference
/// data; safe to share between threads. Each evaluation takes one snapshot
/// of the reference data and uses nothing else, so a concurrent reload is
/// either seen completely or not at all.
///
/// # Examples
///
/// ```
/// use proceedings_domain::{Application, ApplicationCategory, ApplicationId, JudicialResult, Outcome, ResultCategory, ResultTypeId};
/// use proceedings_engine::ConclusionEngine;
/// use proceedings_refdata::ReferenceData;
///
/// let apa = ResultTypeId::from_u128(1);
/// let reference = ReferenceData::builder()
///     .result_type(apa.clone(), "APA")
///     .application_type("APPEAL_AGAINST_CONVICTION", ApplicationCategory::AppealConviction)
///     .rule(ApplicationCategory::AppealConviction, ["APA"], Outcome::Concludes)
///     .build()
///     .unwrap();
/// let engine = ConclusionEngine::with_defaults(reference);
///
/// let application = Application::new(ApplicationId::new(), "APPEAL_AGAINST_CONVICTION")
///     .with_result(JudicialResult::primary(apa, ResultCategory::Final));
///
/// let decision = engine.decide(Some(&application)).unwrap();
/// assert!(decision.concluded);
/// assert_eq!(decision.reason_code.as_deref(), Some("APA"));
///
/// assert!(engine.decide(None).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ConclusionEngine {
    reference: ReferenceDataHandle,
    config: EngineConfig,
    policy: FinalityPolicy,
}

impl ConclusionEngine {
    /// Create an engine, validating `config`
    pub fn new(
        reference: impl Into<ReferenceDataHandle>,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let policy = FinalityPolicy::from_config(&config);
        Ok(Self {
            reference: reference.into(),
            config,
            policy,
        })
    }

    /// Create an engine with the default configuration
    pub fn with_defaults(reference: impl Into<ReferenceDataHandle>) -> Self {
        let config = EngineConfig::default();
        Self {
            reference: reference.into(),
            policy: FinalityPolicy::from_config(&config),
            config,
        }
    }

    /// Handle on the reference data in use; replace through it to hot-reload
    pub fn reference_data(&self) -> &ReferenceDataHandle {
        &self.reference
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Decide an application, if there is one
    ///
    /// Returns `None` only when `application` is `None`. Unknown application
    /// types and unknown result types are ordinary answers, never errors.
    pub fn decide(&self, application: Option<&Application>) -> Option<Decision> {
        application.map(|application| self.evaluate(application))
    }

    /// Decide an application against the reference data currently in service
    pub fn evaluate(&self, application: &Application) -> Decision {
        let reference = self.reference.snapshot();
        self.evaluate_against(&reference, application)
    }

    /// Decide an application against a specific reference data table
    pub fn evaluate_against(&self, reference: &ReferenceData, application: &Application) -> Decision {
        let category = reference.category_of(&application.type_code);
        let primary = primary_results(&application.judicial_results);
        let resolved = ResolvedCodes::resolve(&primary, reference);
        let reason_code = resolved.reason_code();

        let basis = self.basis(category, &resolved, application, reference);
        let concluded = basis.concluded();

        tracing::debug!(
            application_id = %application.id,
            type_code = %application.type_code,
            category = %category,
            primary_results = primary.len(),
            basis = %basis,
            concluded,
            reason_code = reason_code.as_deref().unwrap_or("-"),
            "Decided proceedings conclusion"
        );

        Decision {
            application_id: application.id,
            category,
            concluded,
            reason_code,
            basis,
        }
    }

    fn basis(
        &self,
        category: ApplicationCategory,
        resolved: &ResolvedCodes,
        application: &Application,
        reference: &ReferenceData,
    ) -> DecisionBasis {
        // 1. Never act on an application type nobody registered
        if !category.is_mapped() {
            tracing::warn!(
                application_id = %application.id,
                type_code = %application.type_code,
                "Application type code has no category"
            );
            return DecisionBasis::UnmappedCategory;
        }

        // 2. Nothing recorded on the application itself
        if resolved.is_empty() {
            return DecisionBasis::OffenceFinality {
                all_final: offences_all_final(application, &self.policy),
            };
        }

        // 3. One unrecognised result spoils the whole combination
        if !resolved.is_fully_resolved() {
            tracing::warn!(
                application_id = %application.id,
                unresolved = resolved.unresolved,
                "Primary results with unregistered result types"
            );
            return DecisionBasis::UnresolvedResult {
                unresolved: resolved.unresolved,
            };
        }

        // 4. Exact combination lookup
        match reference.outcome_of(category, &resolved.code_set()) {
            None => DecisionBasis::NoRule,
            Some(outcome @ Outcome::ConcludesIfOffencesFinal) => DecisionBasis::Rule {
                outcome,
                offences_final: Some(offences_all_final(application, &self.policy)),
            },
            Some(outcome @ (Outcome::Concludes | Outcome::DoesNotConclude)) => DecisionBasis::Rule {
                outcome,
                offences_final: None,
            },
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proceedings_domain::{Case, JudicialResult, Offence, ResultCategory, ResultTypeId};
    use proptest::prelude::*;

    // Ids 1..=4 are registered, 5 and 6 are not
    fn reference() -> ReferenceData {
        ReferenceData::builder()
            .result_type(ResultTypeId::from_u128(1), "APA")
            .result_type(ResultTypeId::from_u128(2), "AACD")
            .result_type(ResultTypeId::from_u128(3), "ASV")
            .result_type(ResultTypeId::from_u128(4), "BRO")
            .application_type("AC", ApplicationCategory::AppealConviction)
            .application_type("BR", ApplicationCategory::Breach)
            .rule(ApplicationCategory::AppealConviction, ["APA"], Outcome::Concludes)
            .rule(ApplicationCategory::AppealConviction, ["ASV"], Outcome::ConcludesIfOffencesFinal)
            .rule(ApplicationCategory::AppealConviction, ["AACD", "ASV"], Outcome::DoesNotConclude)
            .rule(ApplicationCategory::Breach, ["BRO"], Outcome::Concludes)
            .build()
            .unwrap()
    }

    fn category() -> impl Strategy<Value = ResultCategory> {
        prop_oneof![
            Just(ResultCategory::Final),
            Just(ResultCategory::Intermediary),
            Just(ResultCategory::Ancillary),
        ]
    }

    fn application() -> impl Strategy<Value = Application> {
        (
            prop_oneof![Just("AC"), Just("BR"), Just("ZZ")],
            prop::collection::vec((1u128..=6, category()), 0..4),
            prop::collection::vec(category(), 0..4),
        )
            .prop_map(|(type_code, results, offence_categories)| {
                let offences = offence_categories
                    .into_iter()
                    .map(|c| Offence::new(vec![JudicialResult::primary(ResultTypeId::from_u128(50), c)]))
                    .collect();
                results
                    .into_iter()
                    .fold(
                        Application::new(ApplicationId::new(), type_code),
                        |app, (id, c)| app.with_result(JudicialResult::primary(ResultTypeId::from_u128(id), c)),
                    )
                    .with_case(Case::new(offences))
            })
    }

    proptest! {
        /// Property: deciding is pure
        #[test]
        fn test_decide_is_idempotent(app in application()) {
            let engine = ConclusionEngine::with_defaults(reference());
            prop_assert_eq!(engine.decide(Some(&app)), engine.decide(Some(&app)));
        }

        /// Property: child results never change a decision
        #[test]
        fn test_child_results_never_change_decision(
            app in application(),
            child in 1u128..=6,
            root in 7u128..=9,
            c in category(),
        ) {
            let engine = ConclusionEngine::with_defaults(reference());
            let before = engine.evaluate(&app);

            let with_child = app.with_result(JudicialResult::child_of(
                ResultTypeId::from_u128(child),
                ResultTypeId::from_u128(root),
                c,
            ));
            prop_assert_eq!(before, engine.evaluate(&with_child));
        }

        /// Property: an unknown primary result always forces concluded = false
        #[test]
        fn test_unknown_primary_never_concludes(app in application(), index in 0usize..4) {
            prop_assume!(!app.judicial_results.is_empty());

            let mut app = app;
            let slot = index % app.judicial_results.len();
            let unknown = ResultTypeId::from_u128(0xDEAD);
            app.judicial_results[slot].result_type_id = unknown.clone();
            app.judicial_results[slot].root_result_type_id = unknown;

            let engine = ConclusionEngine::with_defaults(reference());
            prop_assert!(!engine.evaluate(&app).concluded);
        }

        /// Property: a single always-concluding result concludes whatever the offences say
        #[test]
        fn test_always_concludes_ignores_offences(offences in prop::collection::vec(category(), 0..5)) {
            let offences = offences
                .into_iter()
                .map(|c| Offence::new(vec![JudicialResult::primary(ResultTypeId::from_u128(50), c)]))
                .collect();
            let app = Application::new(ApplicationId::new(), "AC")
                .with_result(JudicialResult::primary(ResultTypeId::from_u128(1), ResultCategory::Final))
                .with_case(Case::new(offences));

            let engine = ConclusionEngine::with_defaults(reference());
            prop_assert!(engine.evaluate(&app).concluded);
        }

        /// Property: a single conditional result concludes exactly when the offences are final
        #[test]
        fn test_conditional_matches_offence_finality(offences in prop::collection::vec(category(), 0..5)) {
            let offences: Vec<Offence> = offences
                .into_iter()
                .map(|c| Offence::new(vec![JudicialResult::primary(ResultTypeId::from_u128(50), c)]))
                .collect();
            let app = Application::new(ApplicationId::new(), "AC")
                .with_result(JudicialResult::primary(ResultTypeId::from_u128(3), ResultCategory::Final))
                .with_case(Case::new(offences));

            let engine = ConclusionEngine::with_defaults(reference());
            let expected = offences_all_final(&app, &FinalityPolicy::default());
            prop_assert_eq!(engine.evaluate(&app).concluded, expected);
        }
    }
}
