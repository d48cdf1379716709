//! Pretty error reporting using ariadne
//!
//! Provides colorful, user-friendly error messages with source context.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use std::ops::Range;

use crate::errors::ScanError;

fn label_message(error: &ScanError) -> String {
    match error {
        ScanError::UnexpectedCharacter { character, .. } => {
            format!("'{}' does not start any token", character.escape_debug())
        }
        ScanError::UnterminatedString { .. } => "string is never closed".to_string(),
    }
}

fn build_report<'a>(
    filename: &'a str,
    error: &ScanError,
    color: bool,
) -> Report<'a, (&'a str, Range<usize>)> {
    let span: Range<usize> = error.span().into();

    let mut report = Report::build(ReportKind::Error, (filename, span.clone()))
        .with_config(Config::default().with_color(color))
        .with_message(format!("{} (line {})", error.message(), error.line()))
        .with_label(
            Label::new((filename, span))
                .with_message(label_message(error))
                .with_color(Color::Red),
        );

    if matches!(error, ScanError::UnterminatedString { .. }) {
        report = report.with_help("add a closing '\"'");
    }

    report.finish()
}

/// Print an error with source context
pub fn print_error(source: &str, filename: &str, error: &ScanError) {
    let report = build_report(filename, error, true);
    if report
        .eprint((filename, Source::from(source)))
        .is_err()
    {
        eprintln!("{}", error);
    }
}

/// Print multiple errors
pub fn print_errors(source: &str, filename: &str, errors: &[ScanError]) {
    for error in errors {
        print_error(source, filename, error);
    }
}

/// Format an error as a string without colors (for testing)
pub fn format_error(source: &str, filename: &str, error: &ScanError) -> String {
    let mut output = Vec::new();
    let written = build_report(filename, error, false)
        .write((filename, Source::from(source)), &mut output);

    match written {
        Ok(()) => String::from_utf8_lossy(&output).into_owned(),
        Err(_) => error.to_string(),
    }
}
