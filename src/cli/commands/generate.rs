//! Generation command handler.
//!
//! Reads the configuration, renders the document and writes it out. The
//! output file is only touched once the input has loaded successfully.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::args::GenerateArgs;
use crate::config;
use crate::docgen;
use crate::error::{DocgenError, Result};

/// Outcome of a successful run, printed as the confirmation line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Path the document was written to.
    pub output: PathBuf,
    /// Effective `use_unix_line_endings` value.
    pub use_unix_line_endings: bool,
}

impl fmt::Display for GenerateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generato `{}` (use_unix_line_endings={})",
            self.output.display(),
            self.use_unix_line_endings
        )
    }
}

/// Execute one generation run.
///
/// # Errors
///
/// Returns an error if the input is missing, unreadable or malformed, or if
/// the output cannot be written.
pub fn run(args: &GenerateArgs) -> Result<GenerateReport> {
    let config = config::load(&args.input)?;
    let document = docgen::render(&config);

    write_document(&args.output, &document.to_text())?;
    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        lines = document.lines().len(),
        "wrote document"
    );

    Ok(GenerateReport {
        output: args.output.clone(),
        use_unix_line_endings: config.use_unix_line_endings(),
    })
}

/// Write the document as UTF-8, creating or truncating `path`.
fn write_document(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| DocgenError::Write {
        path: path.to_path_buf(),
        source,
    })
}
