//! Judicial results and their reference-data identifiers

use std::fmt;
use std::sync::Arc;

/// Identifier of a judicial result type in the reference data catalogue
///
/// Opaque to the engine: it is only ever compared for equality and looked up
/// in the result-code table. Catalogue ids are UUIDs, but payloads can carry
/// ids in other forms ahead of any registration, so those are kept verbatim
/// and simply never match a registered id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResultTypeId(Repr);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Repr {
    Uuid(uuid::Uuid),
    Opaque(Arc<str>),
}

impl ResultTypeId {
    /// Build an id from any string
    ///
    /// A string that parses as a UUID becomes a UUID id (so case and
    /// formatting differences do not matter); anything else is kept as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use proceedings_domain::ResultTypeId;
    ///
    /// let id = ResultTypeId::new("A1B2C3D4-0000-4000-8000-000000000001");
    /// assert_eq!(id.to_string(), "a1b2c3d4-0000-4000-8000-000000000001");
    /// assert!(id.as_uuid().is_some());
    ///
    /// let id = ResultTypeId::new("NEW-RESULT-42");
    /// assert_eq!(id.to_string(), "NEW-RESULT-42");
    /// assert!(id.as_uuid().is_none());
    /// ```
    pub fn new(s: &str) -> Self {
        let s = s.trim();
        match uuid::Uuid::parse_str(s) {
            Ok(id) => Self(Repr::Uuid(id)),
            Err(_) => Self(Repr::Opaque(Arc::from(s))),
        }
    }

    /// Wrap an existing UUID
    pub fn from_uuid(id: uuid::Uuid) -> Self {
        Self(Repr::Uuid(id))
    }

    /// Create an id from a raw u128 value
    ///
    /// Mostly useful for fixtures, where readable constant ids are handy.
    pub const fn from_u128(value: u128) -> Self {
        Self(Repr::Uuid(uuid::Uuid::from_u128(value)))
    }

    /// Parse an id, rejecting blank strings
    pub fn parse(s: &str) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err("Result type id cannot be blank".to_string());
        }
        Ok(Self::new(s))
    }

    /// The underlying UUID, if the id is one
    pub fn as_uuid(&self) -> Option<uuid::Uuid> {
        match &self.0 {
            Repr::Uuid(id) => Some(*id),
            Repr::Opaque(_) => None,
        }
    }
}

impl fmt::Display for ResultTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Uuid(id) => write!(f, "{}", id),
            Repr::Opaque(id) => f.write_str(id),
        }
    }
}

impl std::str::FromStr for ResultTypeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Category of a judicial result
///
/// The catalogue only distinguishes final, interlocutory and ancillary
/// results today, but new categories can appear in payloads before anybody
/// registers them, so anything else is carried through as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResultCategory {
    /// Disposes of the matter
    Final,

    /// Interlocutory; the matter is still live
    Intermediary,

    /// Attached to a disposal without being one (costs, orders ancillary to sentence)
    Ancillary,

    /// A category this build does not know about, upper-cased
    Other(String),
}

impl ResultCategory {
    /// Get the category name as it appears in payloads
    pub fn as_str(&self) -> &str {
        match self {
            ResultCategory::Final => "FINAL",
            ResultCategory::Intermediary => "INTERMEDIARY",
            ResultCategory::Ancillary => "ANCILLARY",
            ResultCategory::Other(name) => name,
        }
    }

    /// Parse a category name; never fails
    pub fn parse(s: &str) -> Self {
        let name = s.trim().to_uppercase();
        match name.as_str() {
            "FINAL" => ResultCategory::Final,
            "INTERMEDIARY" => ResultCategory::Intermediary,
            "ANCILLARY" => ResultCategory::Ancillary,
            _ => ResultCategory::Other(name),
        }
    }

    /// Whether this is one of the catalogued categories
    pub fn is_recognised(&self) -> bool {
        !matches!(self, ResultCategory::Other(_))
    }
}

impl fmt::Display for ResultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ResultCategory {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// A judicial result recorded against an application or an offence
///
/// Results form a forest through `root_result_type_id`: a result whose own
/// type id equals its root id is a primary (root-level) result, anything
/// else hangs off another result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JudicialResult {
    /// Reference-data id of this result's type
    pub result_type_id: ResultTypeId,

    /// Reference-data id of the root of the tree this result belongs to
    pub root_result_type_id: ResultTypeId,

    /// Result category
    pub category: ResultCategory,
}

impl JudicialResult {
    /// Create a judicial result
    pub fn new(
        result_type_id: ResultTypeId,
        root_result_type_id: ResultTypeId,
        category: ResultCategory,
    ) -> Self {
        Self {
            result_type_id,
            root_result_type_id,
            category,
        }
    }

    /// Create a primary result (its own root)
    pub fn primary(result_type_id: ResultTypeId, category: ResultCategory) -> Self {
        Self::new(result_type_id.clone(), result_type_id, category)
    }

    /// Create a result nested under `root`
    pub fn child_of(
        result_type_id: ResultTypeId,
        root: ResultTypeId,
        category: ResultCategory,
    ) -> Self {
        Self::new(result_type_id, root, category)
    }

    /// Whether this result is a primary (root-level) result
    pub fn is_primary(&self) -> bool {
        self.result_type_id == self.root_result_type_id
    }
}
