//! Source code representation and error management.

pub mod error;

use std::fmt;

pub use error::{Error, LexError, RuntimeError, StaticTypeError, SyntaxError};

/// Represents source code.
pub struct Source<'a> {
    /// Original source code.
    pub content: &'a str,
}

impl<'a> Source<'a> {
    /// Create a new `Source` with the specified `content`.
    pub fn new(content: &'a str) -> Self {
        Self { content }
    }

    /// Returns the text of the 1-based `line`, without its terminator.
    pub fn line_text(&self, line: usize) -> Option<&'a str> {
        if line == 0 {
            return None;
        }
        self.content
            .split('\n')
            .nth(line - 1)
            .map(|text| text.trim_end_matches('\r'))
    }

    /// Pairs `error` with this source for display.
    pub fn report<'b>(&'b self, error: &'b Error) -> Report<'b> {
        Report {
            source: self,
            error,
        }
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(content: &'a str) -> Self {
        Source::new(content)
    }
}

/// A diagnostic: the error message followed by the offending source line.
pub struct Report<'b> {
    source: &'b Source<'b>,
    error: &'b Error,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ERROR: {}", self.error)?;
        let line = self.error.line();
        if let Some(text) = self.source.line_text(line) {
            writeln!(f, "{:>4} | {}", line, text)?;
        }
        Ok(())
    }
}
