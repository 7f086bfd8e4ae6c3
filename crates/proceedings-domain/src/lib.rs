//! Proceedings Domain Layer
//!
//! Value types shared by every layer of the proceedings-concluded decision
//! engine. The only external dependency is `uuid`, used for the identifiers
//! the upstream case-management events carry.
//!
//! ## Key Concepts
//!
//! - **Application**: an appeal, breach, confiscation order, statutory
//!   declaration or reopening, together with its cases and court order
//! - **Judicial Result**: a result recorded against the application or one of
//!   its offences; nested results point at their root via `root_result_type_id`
//! - **Application Category**: closed set of rule families an application
//!   type code maps onto, with `Unmapped` as an explicit value
//! - **Outcome**: what a recognised combination of result codes means for the
//!   proceedings
//!
//! Snapshots are assembled by the caller and are never mutated by the engine.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod application;
pub mod category;
pub mod judicial_result;
pub mod outcome;

// Re-exports for convenience
pub use application::{Application, ApplicationId, Case, CourtOrder, Offence};
pub use category::ApplicationCategory;
pub use judicial_result::{JudicialResult, ResultCategory, ResultTypeId};
pub use outcome::{CodeSet, Outcome, ResultCode};
