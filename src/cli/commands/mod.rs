//! CLI command handlers
//!
//! Routes a parsed CLI invocation to the generation driver.

pub mod generate;

use crate::cli::args::Cli;
use crate::error::Result;

/// Run a parsed CLI invocation.
///
/// # Errors
///
/// Returns an error if generation fails.
pub fn dispatch(cli: &Cli) -> Result<()> {
    let report = generate::run(&cli.generate)?;
    if !cli.quiet {
        println!("{report}");
    }
    Ok(())
}
