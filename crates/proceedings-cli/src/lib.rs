//! Proceedings CLI library.
//!
//! Reads court applications as JSON, decides whether their proceedings are
//! concluded against reference data loaded from TOML, and prints the verdicts.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod payload;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::{BatchEntry, Formatter};
pub use payload::{ApplicationPayload, PayloadError};
