//! Command implementations.

mod check;
mod run;

pub use check::{check, check_human, CheckFormat};
pub use run::{run, RunOptions};

use std::io::Read;

use crate::CliError;

/// Read all of stdin.
pub fn read_stdin() -> Result<String, CliError> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input)
}
