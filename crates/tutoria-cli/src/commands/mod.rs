//! Subcommand handlers
//!
//! Records print as pretty JSON; acknowledgements print one short line.

use serde::Serialize;

pub mod assignment;
pub mod file;
pub mod notification;
pub mod session;
pub mod system;
pub mod topic;
pub mod user;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
