//! Command-line interface
//!
//! Argument definitions and the generation driver.

pub mod args;
pub mod commands;
