//! Error handling for Lox
//!
//! Provides structured lexical error records with source location tracking,
//! the sinks that receive them, and the crate-level error type used by the
//! command-line driver.

mod diagnostic;
mod sink;

use std::ops::Range;
use thiserror::Error;

pub use diagnostic::{format_error, print_error, print_errors};
pub use sink::{ErrorSink, NullSink, StreamSink};

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

    /// Get the length of this span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl From<Range<usize>> for SourceSpan {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<SourceSpan> for Range<usize> {
    fn from(span: SourceSpan) -> Self {
        span.start..span.end
    }
}

/// A lexical error found while scanning.
///
/// Scan errors never stop the scanner; they are handed to an [`ErrorSink`]
/// and scanning carries on with the next character.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("[line {line}] Error: Unexpected character")]
    UnexpectedCharacter {
        character: char,
        line: usize,
        span: SourceSpan,
    },

    #[error("[line {line}] Error: Unterminated string")]
    UnterminatedString { line: usize, span: SourceSpan },
}

impl ScanError {
    /// The 1-based line the error is reported on
    pub fn line(&self) -> usize {
        match self {
            ScanError::UnexpectedCharacter { line, .. } => *line,
            ScanError::UnterminatedString { line, .. } => *line,
        }
    }

    /// The source range the error covers
    pub fn span(&self) -> SourceSpan {
        match self {
            ScanError::UnexpectedCharacter { span, .. } => *span,
            ScanError::UnterminatedString { span, .. } => *span,
        }
    }

    /// The bare message, without the line prefix
    pub fn message(&self) -> &'static str {
        match self {
            ScanError::UnexpectedCharacter { .. } => "Unexpected character",
            ScanError::UnterminatedString { .. } => "Unterminated string",
        }
    }
}

/// The main error type for Lox operations
#[derive(Error, Debug)]
pub enum LoxError {
    #[error("Usage: {0}")]
    Usage(String),

    #[error("{count} lexical error(s) in script")]
    Scan { count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoxError {
    /// Process exit status for this error, following sysexits.h
    pub fn exit_code(&self) -> u8 {
        match self {
            LoxError::Usage(_) => 64,
            LoxError::Scan { .. } => 65,
            LoxError::Io(_) => 74,
        }
    }
}

/// Result type alias for Lox operations
pub type LoxResult<T> = Result<T, LoxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_error_display() {
        let error = ScanError::UnexpectedCharacter {
            character: '@',
            line: 3,
            span: SourceSpan::new(7, 8),
        };
        assert_eq!(error.to_string(), "[line 3] Error: Unexpected character");
        assert_eq!(error.message(), "Unexpected character");
        assert_eq!(error.line(), 3);
        assert_eq!(Range::from(error.span()), 7..8);
    }

    #[test]
    fn test_unterminated_display() {
        let error = ScanError::UnterminatedString {
            line: 2,
            span: SourceSpan::new(0, 6),
        };
        assert_eq!(error.to_string(), "[line 2] Error: Unterminated string");
        assert_eq!(error.span().len(), 6);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(LoxError::Usage("lox [script]".into()).exit_code(), 64);
        assert_eq!(LoxError::Scan { count: 2 }.exit_code(), 65);
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(LoxError::from(io).exit_code(), 74);
    }

    #[test]
    fn test_span_conversions() {
        let span = SourceSpan::from(4..4);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }
}
