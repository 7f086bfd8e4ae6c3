//! Check command implementation.

use crate::error::Result;
use crate::output::Formatter;
use proceedings_refdata::ReferenceData;
use std::path::Path;

/// Execute the check command: load and validate a reference data file.
pub fn execute_check(path: &Path, formatter: &Formatter) -> Result<()> {
    let data = ReferenceData::from_file(path)?;
    println!("{}", formatter.format_reference_data(&data)?);
    Ok(())
}
