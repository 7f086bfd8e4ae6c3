//! The reference data table and its validating builder

use crate::ReferenceDataError;
use proceedings_domain::{ApplicationCategory, CodeSet, Outcome, ResultCode, ResultTypeId};
use std::collections::{HashMap, HashSet};

/// Immutable reference data consulted by the decision engine
///
/// Holds three maps:
/// - result type id → short result code
/// - application type code → application category
/// - (category, exact set of codes) → outcome
///
/// A missing key is an ordinary answer ("unrecognised"), never an error.
/// Build one through [`ReferenceData::builder`] or load it from TOML with
/// [`ReferenceData::from_file`].
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    codes: HashMap<ResultTypeId, ResultCode>,
    application_types: HashMap<String, ApplicationCategory>,
    rules: HashMap<ApplicationCategory, HashMap<CodeSet, Outcome>>,
}

impl ReferenceData {
    /// Start building a table
    pub fn builder() -> ReferenceDataBuilder {
        ReferenceDataBuilder::default()
    }

    /// A table with no entries: every type maps to UNMAPPED, no id resolves
    pub fn empty() -> Self {
        Self::default()
    }

    /// Short code for a result type, if registered
    pub fn code_of(&self, id: &ResultTypeId) -> Option<&ResultCode> {
        self.codes.get(id)
    }

    /// Category for an application type code; unknown codes are `Unmapped`
    pub fn category_of(&self, type_code: &str) -> ApplicationCategory {
        self.application_types
            .get(type_code.trim())
            .copied()
            .unwrap_or(ApplicationCategory::Unmapped)
    }

    /// Outcome registered for exactly this combination of codes
    pub fn outcome_of(&self, category: ApplicationCategory, codes: &CodeSet) -> Option<Outcome> {
        self.rules
            .get(&category)
            .and_then(|rules| rules.get(codes))
            .copied()
    }

    /// Number of registered result types
    pub fn result_type_count(&self) -> usize {
        self.codes.len()
    }

    /// Number of registered application type codes
    pub fn application_type_count(&self) -> usize {
        self.application_types.len()
    }

    /// Number of rules across all categories
    pub fn rule_count(&self) -> usize {
        self.rules.values().map(HashMap::len).sum()
    }

    /// Number of rules registered for one category
    pub fn rule_count_for(&self, category: ApplicationCategory) -> usize {
        self.rules.get(&category).map_or(0, HashMap::len)
    }
}

/// Collects reference data entries and validates them as a whole
///
/// # Examples
///
/// ```
/// use proceedings_domain::{ApplicationCategory, CodeSet, Outcome, ResultTypeId};
/// use proceedings_refdata::ReferenceData;
///
/// let apa = ResultTypeId::from_u128(1);
/// let table = ReferenceData::builder()
///     .result_type(apa, "APA")
///     .application_type("APPEAL_CONV", ApplicationCategory::AppealConviction)
///     .rule(ApplicationCategory::AppealConviction, ["APA"], Outcome::Concludes)
///     .build()
///     .unwrap();
///
/// let key: CodeSet = ["APA"].into_iter().collect();
/// assert_eq!(table.outcome_of(ApplicationCategory::AppealConviction, &key), Some(Outcome::Concludes));
/// ```
#[derive(Debug, Default)]
pub struct ReferenceDataBuilder {
    result_types: Vec<(ResultTypeId, ResultCode)>,
    application_types: Vec<(String, ApplicationCategory)>,
    rules: Vec<(ApplicationCategory, Vec<ResultCode>, Outcome)>,
}

impl ReferenceDataBuilder {
    /// Register a result type and its short code
    pub fn result_type(mut self, id: ResultTypeId, code: impl AsRef<str>) -> Self {
        self.result_types.push((id, ResultCode::new(code)));
        self
    }

    /// Map an application type code onto a category
    pub fn application_type(mut self, type_code: impl AsRef<str>, category: ApplicationCategory) -> Self {
        self.application_types
            .push((type_code.as_ref().trim().to_string(), category));
        self
    }

    /// Register the outcome for an exact combination of codes
    pub fn rule<I, S>(mut self, category: ApplicationCategory, codes: I, outcome: Outcome) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codes = codes.into_iter().map(ResultCode::new).collect();
        self.rules.push((category, codes, outcome));
        self
    }

    /// Validate every entry and produce the table
    ///
    /// Fails on the first problem found: blank or duplicate result types,
    /// blank, duplicate or UNMAPPED application types, and rules that are
    /// empty, target UNMAPPED, repeat a code, reference an unregistered code
    /// or duplicate another rule's key.
    pub fn build(self) -> Result<ReferenceData, ReferenceDataError> {
        let mut codes = HashMap::with_capacity(self.result_types.len());
        for (id, code) in self.result_types {
            if code.as_str().is_empty() {
                return Err(ReferenceDataError::EmptyCode(id));
            }
            if codes.contains_key(&id) {
                return Err(ReferenceDataError::DuplicateResultType(id));
            }
            codes.insert(id, code);
        }

        let mut application_types = HashMap::with_capacity(self.application_types.len());
        for (type_code, category) in self.application_types {
            if type_code.is_empty() {
                return Err(ReferenceDataError::EmptyTypeCode);
            }
            if !category.is_mapped() {
                return Err(ReferenceDataError::UnmappedApplicationType(type_code));
            }
            if application_types.contains_key(&type_code) {
                return Err(ReferenceDataError::DuplicateApplicationType(type_code));
            }
            application_types.insert(type_code, category);
        }

        let known: HashSet<&ResultCode> = codes.values().collect();
        let mut rules: HashMap<ApplicationCategory, HashMap<CodeSet, Outcome>> = HashMap::new();
        for (category, listed, outcome) in self.rules {
            let mut key = CodeSet::new();
            for code in listed {
                if !known.contains(&code) {
                    return Err(ReferenceDataError::UnknownCode { category, code });
                }
                if key.contains(&code) {
                    return Err(ReferenceDataError::DuplicateCodeInRule { category, code });
                }
                key.insert(code);
            }

            if !category.is_mapped() {
                return Err(ReferenceDataError::RuleForUnmapped(key));
            }
            if key.is_empty() {
                return Err(ReferenceDataError::EmptyRule(category));
            }

            let by_codes = rules.entry(category).or_default();
            if by_codes.contains_key(&key) {
                return Err(ReferenceDataError::DuplicateRule { category, codes: key });
            }
            by_codes.insert(key, outcome);
        }

        Ok(ReferenceData {
            codes,
            application_types,
            rules,
        })
    }
}
