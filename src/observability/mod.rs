//! Observability module
//!
//! Diagnostic logging for `copilot-docgen` runs.

pub mod logging;

pub use logging::init_logging;
