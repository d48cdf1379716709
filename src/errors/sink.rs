//! Receivers for scan errors
//!
//! The scanner only knows about [`ErrorSink`]; what happens to an error after
//! it is reported is up to the sink the caller hands in.

use std::io::{self, BufWriter, Write};

use super::ScanError;

/// An interface for an object that receives scan errors as they are found.
///
/// Errors arrive in source order. Reporting never interrupts scanning.
pub trait ErrorSink {
    fn report(&mut self, error: ScanError);
}

/// Collects every error so the caller can inspect them after the scan.
impl ErrorSink for Vec<ScanError> {
    fn report(&mut self, error: ScanError) {
        self.push(error);
    }
}

impl<S: ErrorSink + ?Sized> ErrorSink for &mut S {
    fn report(&mut self, error: ScanError) {
        (**self).report(error);
    }
}

/// Discards every error.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ErrorSink for NullSink {
    fn report(&mut self, _error: ScanError) {}
}

/// Writes one line per error to a stream.
pub struct StreamSink<W: Write> {
    stream: BufWriter<W>,
    had_error: bool,
}

impl<W: Write> StreamSink<W> {
    pub fn new(stream: W) -> Self {
        Self {
            stream: BufWriter::new(stream),
            had_error: false,
        }
    }

    /// Whether anything has been reported to this sink
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stream.flush()
    }

    /// Flush and hand back the underlying stream
    pub fn into_inner(self) -> io::Result<W> {
        self.stream.into_inner().map_err(|e| e.into_error())
    }
}

impl StreamSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> ErrorSink for StreamSink<W> {
    fn report(&mut self, error: ScanError) {
        self.had_error = true;
        // A sink cannot fail the scan; a broken stream just loses the line.
        let _ = writeln!(self.stream, "{}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SourceSpan;

    fn unexpected(line: usize) -> ScanError {
        ScanError::UnexpectedCharacter {
            character: '#',
            line,
            span: SourceSpan::new(0, 1),
        }
    }

    #[test]
    fn test_vec_collects_in_order() {
        let mut errors = Vec::new();
        errors.report(unexpected(1));
        errors.report(unexpected(4));
        assert_eq!(errors.iter().map(|e| e.line()).collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn test_stream_sink_writes_lines() {
        let mut sink = StreamSink::new(Vec::new());
        assert!(!sink.had_error());
        sink.report(unexpected(2));
        sink.report(ScanError::UnterminatedString {
            line: 5,
            span: SourceSpan::new(3, 9),
        });
        assert!(sink.had_error());

        let bytes = sink.into_inner().unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "[line 2] Error: Unexpected character\n[line 5] Error: Unterminated string\n"
        );
    }

    #[test]
    fn test_reborrowed_sink() {
        fn report_into<S: ErrorSink>(mut sink: S) {
            sink.report(unexpected(7));
        }

        let mut errors: Vec<ScanError> = Vec::new();
        report_into(&mut errors);
        report_into(&mut errors);
        assert_eq!(errors.len(), 2);

        report_into(NullSink);
    }
}
