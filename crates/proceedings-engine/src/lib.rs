//! Proceedings Conclusion Engine
//!
//! Decides whether a court application's proceedings are legally concluded
//! and reports the reason code of the results that drove the decision.
//!
//! The decision, in order:
//! 1. Resolve the application type code to a category; an unmapped type
//!    never concludes
//! 2. Keep only primary results (children of another result are ignored)
//! 3. With no primary results, the proceedings are concluded exactly when
//!    every offence result is final
//! 4. Any primary result without a registered code means not concluded
//! 5. Otherwise the exact set of codes is looked up in the rule table;
//!    missing combinations do not conclude, conditional ones defer to the
//!    offences
//!
//! The reason code is computed in every case: the codes joined with `" & "`,
//! `"UNKNOWN_RESULT"` when none is recognised, or nothing when nothing was
//! recorded.
//!
//! # Examples
//!
//! ```no_run
//! use proceedings_engine::{ConclusionEngine, EngineConfig};
//! use proceedings_refdata::ReferenceDataHandle;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let reference = ReferenceDataHandle::from_file("config/reference-data.toml")?;
//! let engine = ConclusionEngine::new(reference, EngineConfig::default())?;
//!
//! // let decision = engine.decide(Some(&application));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod finality;
mod hierarchy;
mod metrics;
mod reason_code;

pub use config::EngineConfig;
pub use engine::{ConclusionEngine, Decision, DecisionBasis};
pub use error::EngineError;
pub use finality::{offences_all_final, FinalityPolicy};
pub use hierarchy::primary_results;
pub use metrics::DecisionMetrics;
pub use reason_code::{format_reason_code, ResolvedCodes, CODE_SEPARATOR, UNKNOWN_RESULT};
