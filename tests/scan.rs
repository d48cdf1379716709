use std::path::PathBuf;

use lox::errors::{NullSink, format_error};
use lox::{Literal, ScanError, Scanner, TokenKind};

fn fixture(name: &str) -> String {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures", name]
        .iter()
        .collect();
    std::fs::read_to_string(&path).unwrap()
}

#[test]
fn test_operators_fixture_matches_printed_tokens() {
    let source = fixture("operators.lox");
    let (tokens, errors) = lox::scan(&source);
    assert!(errors.is_empty());

    let printed: String = tokens.iter().map(|t| format!("{}\n", t)).collect();
    assert_eq!(printed, fixture("operators.tokens"));

    let eof = tokens.last().unwrap();
    assert_eq!(eof.line, 4);
}

#[test]
fn test_strings_fixture() {
    let source = fixture("strings.lox");
    let (tokens, errors) = lox::scan(&source);

    let strings: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::String)
        .map(|t| (t.literal.clone(), t.line))
        .collect();
    assert_eq!(
        strings,
        vec![
            (Some(Literal::String("first".to_string())), 1),
            (Some(Literal::String("multi\nline".to_string())), 1),
        ]
    );

    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], ScanError::UnterminatedString { line: 4, .. }));
    assert_eq!(tokens.last().map(|t| (t.kind, t.line)), Some((TokenKind::Eof, 4)));

    let report = format_error(&source, "strings.lox", &errors[0]);
    assert!(report.contains("Unterminated string"));
}

#[test]
fn test_null_sink_scans_everything() {
    let source = "@ ( # ) \"never closed";
    let tokens = Scanner::new(source).scan_tokens(NullSink);
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::LeftParen, TokenKind::RightParen, TokenKind::Eof]
    );
}

#[test]
fn test_sink_handed_back_from_iterator() {
    let mut tokens = Scanner::new("~ ;").tokens(Vec::<ScanError>::new());
    let kinds: Vec<_> = tokens.by_ref().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Semicolon, TokenKind::Eof]);

    let errors = tokens.into_sink();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "[line 1] Error: Unexpected character");
}
