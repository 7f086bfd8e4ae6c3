//! Application payloads and their conversion to domain types
//!
//! Mirrors the JSON shape upstream "hearing resulted" events carry for an
//! application: camelCase fields, UUID strings for ids.

use proceedings_domain::{
    Application, ApplicationId, Case, CourtOrder, JudicialResult, Offence, ResultCategory,
    ResultTypeId,
};
use serde::{Deserialize, Serialize};

/// Error type for payload conversion failures
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// Application id is not a UUID
    #[error("Invalid application id: {0}")]
    InvalidApplicationId(String),
}

/// A court application as received from upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPayload {
    /// Application id; a fresh one is generated when absent
    #[serde(default)]
    pub id: Option<String>,

    /// Legal application type code; a blank or missing one resolves to no category
    #[serde(default)]
    pub type_code: String,

    /// Results recorded directly on the application
    #[serde(default)]
    pub judicial_results: Vec<JudicialResultPayload>,

    /// Linked prosecution cases
    #[serde(default)]
    pub cases: Vec<CasePayload>,

    /// Court order the application relates to
    #[serde(default)]
    pub court_order: Option<CourtOrderPayload>,
}

/// A judicial result as received from upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudicialResultPayload {
    /// Result type id, usually a UUID; any other form is kept as an unregistered id
    pub judicial_result_type_id: String,

    /// Root result type id; a result without one is its own root
    #[serde(default)]
    pub root_judicial_result_type_id: Option<String>,

    /// Result category (FINAL, INTERMEDIARY, ANCILLARY, ...)
    pub category: String,
}

/// A prosecution case as received from upstream
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasePayload {
    /// Offences on the case
    #[serde(default)]
    pub offences: Vec<OffencePayload>,
}

/// A court order as received from upstream
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtOrderPayload {
    /// Offences the order was made for
    #[serde(default)]
    pub offences: Vec<OffencePayload>,
}

/// An offence as received from upstream
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffencePayload {
    /// Results recorded against the offence
    #[serde(default)]
    pub judicial_results: Vec<JudicialResultPayload>,
}

fn offences_from_payload(offences: Vec<OffencePayload>) -> Vec<Offence> {
    offences
        .into_iter()
        .map(|offence| {
            Offence::new(offence.judicial_results.into_iter().map(JudicialResult::from).collect())
        })
        .collect()
}

impl From<JudicialResultPayload> for JudicialResult {
    fn from(payload: JudicialResultPayload) -> Self {
        let id = ResultTypeId::new(&payload.judicial_result_type_id);
        let root = match payload.root_judicial_result_type_id.as_deref() {
            Some(root) => ResultTypeId::new(root),
            None => id.clone(),
        };
        JudicialResult::new(id, root, ResultCategory::parse(&payload.category))
    }
}

impl TryFrom<ApplicationPayload> for Application {
    type Error = PayloadError;

    fn try_from(payload: ApplicationPayload) -> Result<Self, Self::Error> {
        let id = match payload.id.as_deref() {
            Some(id) => ApplicationId::parse(id)
                .map_err(|_| PayloadError::InvalidApplicationId(id.to_string()))?,
            None => ApplicationId::new(),
        };

        let judicial_results = payload
            .judicial_results
            .into_iter()
            .map(JudicialResult::from)
            .collect();

        let cases = payload
            .cases
            .into_iter()
            .map(|case| Case::new(offences_from_payload(case.offences)))
            .collect();

        let court_order = payload
            .court_order
            .map(|order| CourtOrder::new(offences_from_payload(order.offences)));

        Ok(Application {
            id,
            type_code: payload.type_code,
            judicial_results,
            cases,
            court_order,
        })
    }
}
