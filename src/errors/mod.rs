//! Error handling for MineLang
//!
//! Provides structured error types with line/column tracking
//! for helpful diagnostic messages.

mod diagnostic;

use std::fmt;
use std::ops::Range;
use thiserror::Error;

pub use diagnostic::{format_error, print_error};

/// A span in the source code, represented as a byte range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceSpan {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl SourceSpan {
    /// Create a new source span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<SourceSpan> for Range<usize> {
    fn from(span: SourceSpan) -> Self {
        span.start..span.end
    }
}

/// A 1-based line/column position plus the byte span it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
    pub span: SourceSpan,
}

impl Location {
    pub fn new(line: usize, column: usize, span: SourceSpan) -> Self {
        Self { line, column, span }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The main error type for MineLang operations
#[derive(Error, Debug)]
pub enum MineError {
    #[error("Lexical error at {location}: {message}")]
    Lexical { message: String, location: Location },

    #[error("Translation error at {location}: {message}")]
    Translation { message: String, location: Location },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MineError {
    /// Get the source location associated with this error, if any
    pub fn location(&self) -> Option<Location> {
        match self {
            MineError::Lexical { location, .. } => Some(*location),
            MineError::Translation { location, .. } => Some(*location),
            MineError::Io(_) => None,
        }
    }

    /// Create a lexical error
    pub fn lexical(message: impl Into<String>, location: Location) -> Self {
        MineError::Lexical {
            message: message.into(),
            location,
        }
    }

    /// Create a translation error
    pub fn translation(message: impl Into<String>, location: Location) -> Self {
        MineError::Translation {
            message: message.into(),
            location,
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self, MineError::Lexical { .. })
    }

    pub fn is_translation(&self) -> bool {
        matches!(self, MineError::Translation { .. })
    }
}

/// Result type alias for MineLang operations
pub type MineResult<T> = Result<T, MineError>;
