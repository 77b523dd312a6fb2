//! `copilot-custom.md` page generation.
//!
//! Assembles the fixed Italian prose and the per-key field listings into a
//! [`Document`]. The output is regenerated from scratch on every run, so
//! the text must be byte-for-byte stable for a given configuration.

use serde_json::Value;
use tracing::debug;

use crate::config::Configuration;
use crate::docgen::document::{Document, LineEnding};
use crate::docgen::json::to_inline_json;

const TITLE: &str = "# `copilot-custom.md` \\- Documentazione impostazioni Copilot";
const GENERATED_NOTICE: &str = "**Generato automaticamente da** `copilot-custom.json`. Non modificare manualmente questo file.";

const PURPOSE: [&str; 2] = [
    "## Scopo",
    "Descrivere in italiano le impostazioni definite nel file `copilot-custom.json` che influenzano il comportamento dell'assistente per questo progetto.",
];

const LOCATION: [&str; 2] = [
    "## Dove salvarlo",
    "Posiziona questo file nella root del repository (accanto a `Cargo.toml`) insieme a `copilot-custom.json`.",
];

const OVERVIEW: [&str; 4] = [
    "## Panoramica del file JSON",
    "- `version`: versione della struttura di configurazione.",
    "- `defaults`: valori predefiniti per il comportamento dell'assistente.",
    "- `prompts`: messaggi/prompts personalizzati usati come sistema o titoli.",
];

const PRACTICAL_NOTES: [&str; 3] = [
    "## Note pratiche",
    "- Mantieni `copilot-custom.json` come fonte primaria; questo file viene rigenerato automaticamente.",
    "- Aggiungi uno step CI o un pre\\-commit hook che esegua la rigenerazione e fallisca il commit se ci sono diff.",
];

/// Render the Markdown document for a configuration.
///
/// Pure: the same configuration always yields the same document. The line
/// terminator is fixed up front from `defaults.use_unix_line_endings`.
#[must_use]
pub fn render(config: &Configuration) -> Document {
    let line_ending = LineEnding::from_unix_flag(config.use_unix_line_endings());

    let mut lines = Vec::new();

    lines.push(TITLE.to_string());
    lines.push(String::new());
    lines.push(GENERATED_NOTICE.to_string());
    lines.push(String::new());

    push_block(&mut lines, &PURPOSE);
    push_block(&mut lines, &LOCATION);
    push_block(&mut lines, &OVERVIEW);

    lines.push("## Descrizione dei campi principali".to_string());
    lines.push(String::new());

    render_version(&mut lines, &config.version);
    render_defaults(&mut lines, config);
    render_prompts(&mut lines, config);

    push_block(&mut lines, &PRACTICAL_NOTES);

    debug!(
        lines = lines.len(),
        unix_line_endings = line_ending == LineEnding::Unix,
        "rendered document"
    );

    Document::new(lines, line_ending)
}

/// Push fixed lines followed by a blank separator line.
fn push_block(lines: &mut Vec<String>, block: &[&str]) {
    lines.extend(block.iter().map(|line| (*line).to_string()));
    lines.push(String::new());
}

/// Render the `version` subsection.
fn render_version(lines: &mut Vec<String>, version: &str) {
    lines.push("### `version`".to_string());
    lines.push(format!(
        "- Indica la versione del formato di configurazione (es. `{version}`)."
    ));
    lines.push(String::new());
}

/// Render the `defaults` subsection, one line per key in sorted order.
fn render_defaults(lines: &mut Vec<String>, config: &Configuration) {
    lines.push("### `defaults`".to_string());

    let mut entries: Vec<(&String, &Value)> = config.defaults.iter().collect();
    entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

    for (key, value) in entries {
        lines.push(format!("- `{key}`: `{}`", default_display(value)));
    }
    lines.push(String::new());
}

/// Render the `prompts` subsection, one line per key in sorted order.
fn render_prompts(lines: &mut Vec<String>, config: &Configuration) {
    lines.push("### `prompts`".to_string());
    for (key, text) in &config.prompts {
        lines.push(format!("- `{key}`: {}", escape_line_breaks(text)));
    }
    lines.push(String::new());
}

/// Display form of a default value: strings verbatim, anything else as
/// inline JSON.
fn default_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => to_inline_json(other),
    }
}

/// Replace CR and LF with the two-character escapes `\r` and `\n` so a
/// prompt stays on one physical line.
#[must_use]
pub fn escape_line_breaks(text: &str) -> String {
    text.replace('\r', "\\r").replace('\n', "\\n")
}
