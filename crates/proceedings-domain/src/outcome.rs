//! Result codes, code sets and rule outcomes

use std::collections::BTreeSet;
use std::fmt;

/// Short code the reference data assigns to a result type (e.g. "APA")
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResultCode(String);

impl ResultCode {
    /// Create a result code; surrounding whitespace is dropped
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_string())
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResultCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// An unordered combination of result codes, used as a rule key
///
/// Two sets are equal whenever they hold the same codes, whatever order the
/// codes were added in. `{A, B}` never matches `{A}` or `{B}`.
///
/// # Examples
///
/// ```
/// use proceedings_domain::CodeSet;
///
/// let a: CodeSet = ["ASV", "AACD"].into_iter().collect();
/// let b: CodeSet = ["AACD", "ASV"].into_iter().collect();
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "{AACD, ASV}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodeSet(BTreeSet<ResultCode>);

impl CodeSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a code; returns false if it was already present
    pub fn insert(&mut self, code: ResultCode) -> bool {
        self.0.insert(code)
    }

    /// Whether the set holds `code`
    pub fn contains(&self, code: &ResultCode) -> bool {
        self.0.contains(code)
    }

    /// Number of distinct codes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the codes in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &ResultCode> {
        self.0.iter()
    }
}

impl FromIterator<ResultCode> for CodeSet {
    fn from_iter<I: IntoIterator<Item = ResultCode>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for CodeSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(ResultCode::new).collect())
    }
}

impl fmt::Display for CodeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = self.0.iter().map(ResultCode::as_str).collect();
        write!(f, "{{{}}}", codes.join(", "))
    }
}

/// What a recognised combination of results means for the proceedings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Proceedings are concluded
    Concludes,

    /// Proceedings are concluded once every offence result is non-interlocutory
    ConcludesIfOffencesFinal,

    /// Proceedings remain live
    DoesNotConclude,
}

impl Outcome {
    /// Get the outcome name as used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Concludes => "CONCLUDES",
            Outcome::ConcludesIfOffencesFinal => "CONCLUDES_IF_OFFENCES_FINAL",
            Outcome::DoesNotConclude => "DOES_NOT_CONCLUDE",
        }
    }

    /// Parse an outcome name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "CONCLUDES" => Some(Outcome::Concludes),
            "CONCLUDES_IF_OFFENCES_FINAL" => Some(Outcome::ConcludesIfOffencesFinal),
            "DOES_NOT_CONCLUDE" => Some(Outcome::DoesNotConclude),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Outcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid outcome: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsets_are_distinct_keys() {
        let both: CodeSet = ["A", "B"].into_iter().collect();
        let a: CodeSet = ["A"].into_iter().collect();
        let b: CodeSet = ["B"].into_iter().collect();

        assert_ne!(both, a);
        assert_ne!(both, b);
        assert_eq!(both.len(), 2);
    }

    #[test]
    fn test_code_trimming() {
        assert_eq!(ResultCode::new(" APA "), ResultCode::new("APA"));
    }

    #[test]
    fn test_outcome_parse() {
        assert_eq!(Outcome::parse("concludes"), Some(Outcome::Concludes));
        assert_eq!(
            Outcome::parse("CONCLUDES_IF_OFFENCES_FINAL"),
            Some(Outcome::ConcludesIfOffencesFinal)
        );
        assert!("MAYBE".parse::<Outcome>().is_err());
    }
}
