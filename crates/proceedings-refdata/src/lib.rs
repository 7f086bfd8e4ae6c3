//! Proceedings Reference Data
//!
//! The configuration tables the conclusion engine consults:
//! result-type codes, the application type code → category mapping, and
//! the rule table keyed by (category, exact set of codes).
//!
//! Tables are validated as a whole when loaded and are immutable afterwards.
//! [`ReferenceDataHandle`] lets a long-running service swap in a reloaded
//! table without readers ever observing a half-updated one.
//!
//! # Examples
//!
//! ```no_run
//! use proceedings_refdata::ReferenceDataHandle;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let handle = ReferenceDataHandle::from_file("config/reference-data.toml")?;
//!
//! // Later, after the file has been edited
//! handle.reload_from_file("config/reference-data.toml")?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod handle;
mod loader;
mod table;

pub use error::ReferenceDataError;
pub use handle::ReferenceDataHandle;
pub use table::{ReferenceData, ReferenceDataBuilder};
