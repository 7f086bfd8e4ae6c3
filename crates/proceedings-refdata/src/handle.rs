//! Shared, hot-swappable access to the current reference data

use crate::{ReferenceData, ReferenceDataError};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Cloneable handle to the reference data currently in service
///
/// Readers take an [`Arc`] snapshot and keep using it for as long as they
/// need; replacement swaps the whole table in one step, so a reader never
/// sees a mix of old and new entries.
///
/// # Examples
///
/// ```
/// use proceedings_refdata::{ReferenceData, ReferenceDataHandle};
///
/// let handle = ReferenceDataHandle::new(ReferenceData::empty());
/// let before = handle.snapshot();
///
/// let replacement = ReferenceData::builder()
///     .result_type(proceedings_domain::ResultTypeId::from_u128(1), "APA")
///     .build()
///     .unwrap();
/// handle.replace(replacement);
///
/// assert_eq!(before.result_type_count(), 0);
/// assert_eq!(handle.snapshot().result_type_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ReferenceDataHandle {
    current: Arc<RwLock<Arc<ReferenceData>>>,
}

impl ReferenceDataHandle {
    /// Put `data` into service
    pub fn new(data: ReferenceData) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(data))),
        }
    }

    /// Load a file and put it into service
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReferenceDataError> {
        Ok(Self::new(ReferenceData::from_file(path)?))
    }

    /// The table currently in service
    pub fn snapshot(&self) -> Arc<ReferenceData> {
        // The lock only guards a pointer swap, so a poisoned guard still holds a whole table
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Swap in a new table, returning the one it replaced
    pub fn replace(&self, data: ReferenceData) -> Arc<ReferenceData> {
        self.swap(Arc::new(data))
    }

    /// Load and validate a file, then swap it in
    ///
    /// Returns the table that was loaded, even if another replacement has
    /// already followed it. If loading fails the table in service is left
    /// untouched.
    pub fn reload_from_file<P: AsRef<Path>>(&self, path: P) -> Result<Arc<ReferenceData>, ReferenceDataError> {
        let path = path.as_ref();
        match ReferenceData::from_file(path) {
            Ok(data) => {
                let loaded = Arc::new(data);
                self.swap(Arc::clone(&loaded));
                Ok(loaded)
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Reference data reload failed, keeping current table"
                );
                Err(e)
            }
        }
    }

    fn swap(&self, next: Arc<ReferenceData>) -> Arc<ReferenceData> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, next);

        tracing::info!(
            result_types = guard.result_type_count(),
            application_types = guard.application_type_count(),
            rules = guard.rule_count(),
            "Reference data replaced"
        );

        previous
    }
}

impl From<ReferenceData> for ReferenceDataHandle {
    fn from(data: ReferenceData) -> Self {
        Self::new(data)
    }
}
