//! Markdown generation for `copilot-custom.json`
//!
//! Turns a [`Configuration`](crate::config::Configuration) into the
//! `copilot-custom.md` document.

pub mod document;
pub mod json;
pub mod render;

pub use document::{Document, LineEnding};
pub use render::render;
