//! Application module - the snapshot the decision engine evaluates

use crate::JudicialResult;
use std::fmt;

/// Unique identifier for an application, based on UUID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApplicationId(uuid::Uuid);

impl ApplicationId {
    /// Generate a new time-ordered ApplicationId
    ///
    /// # Examples
    ///
    /// ```
    /// use proceedings_domain::ApplicationId;
    ///
    /// let a = ApplicationId::new();
    /// let b = ApplicationId::new();
    /// assert_ne!(a, b);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Wrap an existing UUID
    pub fn from_uuid(id: uuid::Uuid) -> Self {
        Self(id)
    }

    /// Parse an ApplicationId from a UUID string
    pub fn parse(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| format!("Invalid application id '{}': {}", s, e))
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> uuid::Uuid {
        self.0
    }
}

impl Default for ApplicationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An offence and the results recorded against it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Offence {
    /// Results recorded against the offence, in order
    pub judicial_results: Vec<JudicialResult>,
}

impl Offence {
    /// Create an offence carrying the given results
    pub fn new(judicial_results: Vec<JudicialResult>) -> Self {
        Self { judicial_results }
    }
}

/// A prosecution case linked to the application
///
/// Appeals carry their substantive offences here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Case {
    /// Offences on the case
    pub offences: Vec<Offence>,
}

impl Case {
    /// Create a case with the given offences
    pub fn new(offences: Vec<Offence>) -> Self {
        Self { offences }
    }
}

/// The court order an application relates to
///
/// Breach-of-order applications carry their substantive offences here
/// rather than under a case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourtOrder {
    /// Offences the order was made for
    pub offences: Vec<Offence>,
}

impl CourtOrder {
    /// Create a court order with the given offences
    pub fn new(offences: Vec<Offence>) -> Self {
        Self { offences }
    }
}

/// A court application and everything reachable from it
///
/// A read-only snapshot assembled by the caller from upstream events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    /// Unique identifier
    pub id: ApplicationId,

    /// Legal application type code, mapped onto an `ApplicationCategory`
    /// through reference data
    pub type_code: String,

    /// Results recorded directly against the application, in order
    pub judicial_results: Vec<JudicialResult>,

    /// Linked prosecution cases
    pub cases: Vec<Case>,

    /// Court order the application relates to, if any
    pub court_order: Option<CourtOrder>,
}

impl Application {
    /// Create an application with no results, cases or court order
    pub fn new(id: ApplicationId, type_code: impl Into<String>) -> Self {
        Self {
            id,
            type_code: type_code.into(),
            judicial_results: Vec::new(),
            cases: Vec::new(),
            court_order: None,
        }
    }

    /// Append a result recorded directly against the application
    pub fn with_result(mut self, result: JudicialResult) -> Self {
        self.judicial_results.push(result);
        self
    }

    /// Append a linked case
    pub fn with_case(mut self, case: Case) -> Self {
        self.cases.push(case);
        self
    }

    /// Set the court order
    pub fn with_court_order(mut self, order: CourtOrder) -> Self {
        self.court_order = Some(order);
        self
    }

    /// Every offence reachable from the application
    ///
    /// Case offences come first, in case order, followed by the court
    /// order's offences.
    pub fn offences(&self) -> impl Iterator<Item = &Offence> {
        self.cases
            .iter()
            .flat_map(|case| case.offences.iter())
            .chain(self.court_order.iter().flat_map(|order| order.offences.iter()))
    }

    /// Every judicial result recorded against any reachable offence
    pub fn offence_results(&self) -> impl Iterator<Item = &JudicialResult> {
        self.offences()
            .flat_map(|offence| offence.judicial_results.iter())
    }
}
