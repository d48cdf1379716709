//! Lexer module for Lox
//!
//! Hand-written scanner that tokenizes Lox source code into a stream of tokens.

mod scanner;
mod token;

pub use scanner::{Scanner, Tokens};
pub use token::{Literal, Token, TokenKind};

use crate::errors::ScanError;

/// Scan a whole source text, collecting every lexical error
///
/// The token list always ends with a single end-of-file token, even when
/// errors were reported.
pub fn scan(source: &str) -> (Vec<Token>, Vec<ScanError>) {
    let mut errors = Vec::new();
    let tokens = Scanner::new(source).scan_tokens(&mut errors);
    (tokens, errors)
}
