//! Command implementations.

pub mod batch;
pub mod check;
pub mod decide;

pub use self::batch::execute_batch;
pub use self::check::execute_check;
pub use self::decide::execute_decide;

use crate::error::Result;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read command input from a file, or from stdin when the path is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}
