//! `copilot-docgen` - Generate copilot-custom.md from copilot-custom.json

use clap::Parser;

use copilot_docgen::cli::args::Cli;
use copilot_docgen::cli::commands;
use copilot_docgen::error::ExitCode;
use copilot_docgen::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.verbose);
    }

    match commands::dispatch(&cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    }
}
