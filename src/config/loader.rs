//! Configuration loader
//!
//! Loading runs in three stages, each failing before the next starts:
//! 1. Existence check on the input path
//! 2. Read as UTF-8 text
//! 3. JSON decode and shape conversion

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::schema::{Configuration, UNIX_LINE_ENDINGS_KEY};
use crate::error::{DocgenError, Result};

/// Loads and parses the configuration at `path`.
///
/// # Errors
///
/// Returns [`DocgenError::InputNotFound`] if `path` does not exist,
/// [`DocgenError::InputRead`] or [`DocgenError::InputParse`] if it cannot be
/// read or decoded, and [`DocgenError::Config`] if the JSON has the wrong shape.
pub fn load(path: &Path) -> Result<Configuration> {
    let source = read_source(path)?;
    let config = parse_source(path, &source)?;
    if let Some(flag) = non_boolean_line_ending_flag(&config) {
        warn!(
            path = %path.display(),
            value = %flag,
            effective = config.use_unix_line_endings(),
            "`defaults.use_unix_line_endings` is not a boolean; using its truthiness"
        );
    }
    info!(
        path = %path.display(),
        defaults = config.defaults.len(),
        prompts = config.prompts.len(),
        "loaded configuration"
    );
    Ok(config)
}

/// Reads the raw configuration text after checking that `path` exists.
///
/// # Errors
///
/// Returns [`DocgenError::InputNotFound`] if `path` does not exist, or
/// [`DocgenError::InputRead`] if it cannot be read as UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(DocgenError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let source = fs::read_to_string(path).map_err(|source| DocgenError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = source.len(), "read configuration source");
    Ok(source)
}

/// Decodes configuration text. `path` is only used in error messages.
///
/// # Errors
///
/// Returns [`DocgenError::InputParse`] for invalid JSON and
/// [`DocgenError::Config`] for a document of the wrong shape.
pub fn parse_source(path: &Path, source: &str) -> Result<Configuration> {
    let value: Value = serde_json::from_str(source).map_err(|source| DocgenError::InputParse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Configuration::from_value(value)?)
}

/// The line-ending flag, when it is set to something other than a boolean.
fn non_boolean_line_ending_flag(config: &Configuration) -> Option<&Value> {
    config
        .defaults
        .get(UNIX_LINE_ENDINGS_KEY)
        .filter(|value| !value.is_boolean())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, ExitCode};

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("copilot-custom.json");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, DocgenError::InputNotFound { .. }));
        assert_eq!(err.exit_code(), ExitCode::INPUT_ERROR);
    }

    #[test]
    fn test_load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("copilot-custom.json");
        fs::write(&path, r#"{"version": "2.1", "prompts": {"a": "b"}}"#).unwrap();
        let config = load(&path).unwrap();
        assert_eq!(config.version, "2.1");
        assert_eq!(config.prompts.len(), 1);
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("copilot-custom.json");
        fs::write(&path, [0xff, 0xfe, 0x7b]).unwrap();
        let err = read_source(&path).unwrap_err();
        assert!(matches!(err, DocgenError::InputRead { .. }));
        assert_eq!(err.exit_code(), ExitCode::INPUT_ERROR);
    }

    #[test]
    fn test_parse_not_json() {
        let err = parse_source(Path::new("in.json"), "not json").unwrap_err();
        assert!(matches!(err, DocgenError::InputParse { .. }));
        assert_eq!(err.exit_code(), ExitCode::INPUT_ERROR);
    }

    #[test]
    fn test_parse_empty_input() {
        let err = parse_source(Path::new("in.json"), "").unwrap_err();
        assert!(matches!(err, DocgenError::InputParse { .. }));
    }

    #[test]
    fn test_non_boolean_line_ending_flag() {
        let path = Path::new("in.json");
        let flagged = |text: &str| {
            let config = parse_source(path, text).unwrap();
            non_boolean_line_ending_flag(&config).cloned()
        };
        assert_eq!(flagged("{}"), None);
        assert_eq!(
            flagged(r#"{"defaults": {"use_unix_line_endings": false}}"#),
            None
        );
        assert_eq!(
            flagged(r#"{"defaults": {"use_unix_line_endings": "no"}}"#),
            Some(Value::String("no".to_string()))
        );
    }

    #[test]
    fn test_parse_wrong_shape() {
        let err = parse_source(Path::new("in.json"), r#"{"prompts": {"a": 1}}"#).unwrap_err();
        assert!(matches!(
            err,
            DocgenError::Config(ConfigError::PromptNotString { .. })
        ));
        assert_eq!(err.exit_code(), ExitCode::ERROR);
    }
}
