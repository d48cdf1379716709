//! Lox - lexical analysis for the Lox scripting language
//!
//! This crate turns Lox source text into a sequence of typed tokens, reporting
//! lexical errors through a pluggable sink instead of stopping at the first one.

pub mod errors;
pub mod lexer;

// Re-export commonly used types
pub use errors::{ErrorSink, LoxError, LoxResult, ScanError, SourceSpan};
pub use lexer::{Literal, Scanner, Token, TokenKind, scan};
