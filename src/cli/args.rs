//! CLI argument definitions
//!
//! Clap derive structs for `copilot-docgen` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser};

/// Default input path, relative to the working directory.
pub const DEFAULT_INPUT: &str = "copilot-custom.json";

/// Default output path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "copilot-custom.md";

// ============================================================================
// Root CLI
// ============================================================================

/// Generate copilot-custom.md from copilot-custom.json.
#[derive(Parser, Debug)]
#[command(name = "copilot-docgen", author, version, about)]
pub struct Cli {
    /// Input and output paths.
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress logging and the confirmation line.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

// ============================================================================
// Generation Arguments
// ============================================================================

/// Paths for one generation run.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the source JSON configuration.
    #[arg(
        short,
        long,
        default_value = DEFAULT_INPUT,
        env = "COPILOT_DOCGEN_INPUT"
    )]
    pub input: PathBuf,

    /// Path to write the generated Markdown document.
    #[arg(
        short,
        long,
        default_value = DEFAULT_OUTPUT,
        env = "COPILOT_DOCGEN_OUTPUT"
    )]
    pub output: PathBuf,
}

// ============================================================================
// Tests
// ============================================================================
