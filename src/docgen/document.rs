//! Rendered document and its line terminator.

use std::fmt;

/// Line terminator used throughout one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`
    Unix,
    /// `\r\n`
    #[default]
    Windows,
}

impl LineEnding {
    /// Chooses the terminator from the `use_unix_line_endings` flag.
    #[must_use]
    pub const fn from_unix_flag(use_unix: bool) -> Self {
        if use_unix { Self::Unix } else { Self::Windows }
    }

    /// The terminator characters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unix => "\n",
            Self::Windows => "\r\n",
        }
    }
}

/// An ordered list of Markdown lines and the terminator that joins them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    line_ending: LineEnding,
}

impl Document {
    pub(crate) const fn new(lines: Vec<String>, line_ending: LineEnding) -> Self {
        Self { lines, line_ending }
    }

    /// The document lines, without terminators.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The terminator chosen for this document.
    #[must_use]
    pub const fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Joins the lines into the final file contents.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.lines.join(self.line_ending.as_str())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
