//! Configuration schema for `copilot-custom.json`.
//!
//! The input is accepted as loosely as the generated document allows:
//! only the three top-level keys are looked at, and only `prompts` values
//! are required to have a specific type.

use std::collections::BTreeMap;
use std::num::FpCategory;

use serde_json::{Map, Value};

use crate::docgen::json::to_inline_json;
use crate::error::ConfigError;

/// Key inside `defaults` that selects the document line terminator.
pub const UNIX_LINE_ENDINGS_KEY: &str = "use_unix_line_endings";

/// Assistant settings read from `copilot-custom.json`.
///
/// Read-only once built; rendering borrows it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Configuration {
    /// Display string for the configuration format version.
    pub version: String,

    /// Default behavior settings, in input order.
    pub defaults: Map<String, Value>,

    /// Named prompt texts, sorted by name.
    pub prompts: BTreeMap<String, String>,
}

impl Configuration {
    /// Builds a configuration from a parsed JSON document.
    ///
    /// Missing top-level keys fall back to an empty version string and
    /// empty mappings. A non-string `version` is kept as its inline JSON
    /// text, and `null` counts as missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the root, `defaults` or `prompts` is not a
    /// JSON object, or if any prompt value is not a string.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        let Value::Object(mut root) = value else {
            return Err(ConfigError::RootNotObject {
                found: json_type_name(&value),
            });
        };

        let version = match root.remove("version") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s,
            Some(other) => to_inline_json(&other),
        };

        let defaults = match root.remove("defaults") {
            None => Map::new(),
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(ConfigError::SectionNotObject {
                    field: "defaults",
                    found: json_type_name(&other),
                });
            }
        };

        let prompts: BTreeMap<String, String> = match root.remove("prompts") {
            None => BTreeMap::new(),
            Some(Value::Object(map)) => map
                .into_iter()
                .map(|(key, value)| match value {
                    Value::String(text) => Ok((key, text)),
                    other => Err(ConfigError::PromptNotString {
                        found: json_type_name(&other),
                        key,
                    }),
                })
                .collect::<Result<_, _>>()?,
            Some(other) => {
                return Err(ConfigError::SectionNotObject {
                    field: "prompts",
                    found: json_type_name(&other),
                });
            }
        };

        Ok(Self {
            version,
            defaults,
            prompts,
        })
    }

    /// Whether the document should use `\n` instead of `\r\n`.
    ///
    /// Reads `defaults.use_unix_line_endings` with JSON truthiness; absent
    /// means `false`.
    #[must_use]
    pub fn use_unix_line_endings(&self) -> bool {
        self.defaults
            .get(UNIX_LINE_ENDINGS_KEY)
            .is_some_and(is_truthy)
    }
}

/// JSON truthiness: `false`, `null`, zero and empty containers are falsy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.classify() != FpCategory::Zero),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Human-readable JSON type name used in shape errors.
#[must_use]
pub const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
