//! `copilot-docgen` - Markdown documentation for Copilot settings
//!
//! Reads a `copilot-custom.json` configuration and renders the Italian
//! `copilot-custom.md` summary of its version, defaults and prompts.

pub mod cli;
pub mod config;
pub mod docgen;
pub mod error;
pub mod observability;
