//! Configuration module
//!
//! Loads `copilot-custom.json` and turns it into a typed [`Configuration`].

pub mod loader;
pub mod schema;

pub use loader::{load, parse_source, read_source};
pub use schema::{Configuration, UNIX_LINE_ENDINGS_KEY, is_truthy};
