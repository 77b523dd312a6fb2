//! Error types for `copilot-docgen`
//!
//! Every failure of a generation run maps to one variant of [`DocgenError`],
//! and every variant maps to a process exit code.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `copilot-docgen` runs.
pub struct ExitCode;

impl ExitCode {
    /// Document generated and written
    pub const SUCCESS: i32 = 0;

    /// Configuration shape mismatch or output write failure
    pub const ERROR: i32 = 1;

    /// Input file missing, unreadable, or not valid JSON
    pub const INPUT_ERROR: i32 = 2;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for a generation run.
///
/// Display strings are the user-facing messages printed to stderr, in the
/// same language as the generated document.
#[derive(Debug, Error)]
pub enum DocgenError {
    /// The input path does not exist.
    #[error("Errore: `{}` non trovato.", path.display())]
    InputNotFound {
        /// Resolved input path
        path: PathBuf,
    },

    /// The input exists but could not be read as UTF-8 text.
    #[error("Errore durante la lettura di `{}`: {source}", path.display())]
    InputRead {
        /// Resolved input path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The input was read but is not valid JSON.
    #[error("Errore durante la lettura di `{}`: {source}", path.display())]
    InputParse {
        /// Resolved input path
        path: PathBuf,
        /// Decoder error, including line and column
        source: serde_json::Error,
    },

    /// The JSON document does not have the expected shape.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The rendered document could not be written.
    #[error("Errore durante la scrittura di `{}`: {source}", path.display())]
    Write {
        /// Resolved output path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl DocgenError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InputNotFound { .. } | Self::InputRead { .. } | Self::InputParse { .. } => {
                ExitCode::INPUT_ERROR
            }
            Self::Config(_) | Self::Write { .. } => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Shape errors found while turning parsed JSON into a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The document root is not a JSON object.
    #[error("configurazione non valida: la radice deve essere un oggetto JSON, trovato {found}")]
    RootNotObject {
        /// JSON type name of the root value
        found: &'static str,
    },

    /// A top-level section is present but is not a JSON object.
    #[error("configurazione non valida: `{field}` deve essere un oggetto JSON, trovato {found}")]
    SectionNotObject {
        /// Name of the section (`defaults` or `prompts`)
        field: &'static str,
        /// JSON type name of the value found
        found: &'static str,
    },

    /// A prompt value is not a string.
    #[error("configurazione non valida: `prompts.{key}` deve essere una stringa, trovato {found}")]
    PromptNotString {
        /// Prompt name
        key: String,
        /// JSON type name of the value found
        found: &'static str,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `copilot-docgen` operations.
pub type Result<T> = std::result::Result<T, DocgenError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::INPUT_ERROR, 2);
    }

    #[test]
    fn test_input_not_found_exit_code() {
        let err = DocgenError::InputNotFound {
            path: PathBuf::from("copilot-custom.json"),
        };
        assert_eq!(err.exit_code(), ExitCode::INPUT_ERROR);
    }

    #[test]
    fn test_input_not_found_display() {
        let err = DocgenError::InputNotFound {
            path: PathBuf::from("copilot-custom.json"),
        };
        assert_eq!(err.to_string(), "Errore: `copilot-custom.json` non trovato.");
    }

    #[test]
    fn test_input_parse_exit_code_and_display() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = DocgenError::InputParse {
            path: PathBuf::from("in.json"),
            source,
        };
        assert_eq!(err.exit_code(), ExitCode::INPUT_ERROR);
        let msg = err.to_string();
        assert!(msg.starts_with("Errore durante la lettura di `in.json`: "));
        assert!(msg.contains("line 1"), "decoder position missing: {msg}");
    }

    #[test]
    fn test_config_error_exit_code() {
        let err: DocgenError = ConfigError::PromptNotString {
            key: "system".to_string(),
            found: "number",
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::ERROR);
        assert!(err.to_string().contains("prompts.system"));
    }

    #[test]
    fn test_write_error_exit_code() {
        let err = DocgenError::Write {
            path: PathBuf::from("out.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.exit_code(), ExitCode::ERROR);
        assert!(err.to_string().contains("out.md"));
    }
}
