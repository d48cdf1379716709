//! Token definitions for Lox
//!
//! Defines all token types produced by the scanner.

use crate::errors::SourceSpan;
use std::fmt;

/// A token produced by the scanner
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The exact source text of the token (empty for end of file)
    pub lexeme: String,
    /// Decoded value, only for kinds that carry one
    pub literal: Option<Literal>,
    /// 1-based line of the token's first character
    pub line: usize,
    /// Source location of this token
    pub span: SourceSpan,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        line: usize,
        span: SourceSpan,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
            span,
        }
    }

    /// The end-of-input token, with an empty span at `offset`
    pub fn eof(line: usize, offset: usize) -> Self {
        Self::new(
            TokenKind::Eof,
            "",
            None,
            line,
            SourceSpan::new(offset, offset),
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{} {} null", self.kind, self.lexeme),
        }
    }
}

/// The decoded value carried by a literal token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Contents of a string literal, without the quotes
    String(String),
}

impl Literal {
    pub fn as_str(&self) -> &str {
        match self {
            Literal::String(s) => s,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "{}", s),
        }
    }
}

/// The kind of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Punctuation - single character
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `*`
    Star,
    /// `/`
    Slash,

    // Operators - one or two characters
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,

    // Literals
    /// String literal
    String,

    // Special
    /// End of file
    Eof,
}

impl TokenKind {
    /// Check if this is an EOF token
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }

    /// Check if tokens of this kind carry a literal value
    pub fn has_literal(&self) -> bool {
        matches!(self, TokenKind::String)
    }

    /// The upper-case name used when printing tokens
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::String => "STRING",
            TokenKind::Eof => "EOF",
        }
    }

    /// Get a human-readable description of this token kind
    pub fn description(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::LeftBrace => "'{'",
            TokenKind::RightBrace => "'}'",
            TokenKind::Comma => "','",
            TokenKind::Dot => "'.'",
            TokenKind::Minus => "'-'",
            TokenKind::Plus => "'+'",
            TokenKind::Semicolon => "';'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Bang => "'!'",
            TokenKind::BangEqual => "'!='",
            TokenKind::Equal => "'='",
            TokenKind::EqualEqual => "'=='",
            TokenKind::Less => "'<'",
            TokenKind::LessEqual => "'<='",
            TokenKind::Greater => "'>'",
            TokenKind::GreaterEqual => "'>='",
            TokenKind::String => "string literal",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        let paren = Token::new(TokenKind::LeftParen, "(", None, 1, SourceSpan::new(0, 1));
        assert_eq!(paren.to_string(), "LEFT_PAREN ( null");

        let string = Token::new(
            TokenKind::String,
            "\"hi\"",
            Some(Literal::String("hi".to_string())),
            1,
            SourceSpan::new(0, 4),
        );
        assert_eq!(string.to_string(), "STRING \"hi\" hi");

        assert_eq!(Token::eof(3, 10).to_string(), "EOF  null");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::BangEqual.name(), "BANG_EQUAL");
        assert_eq!(TokenKind::GreaterEqual.to_string(), "GREATER_EQUAL");
        assert_eq!(TokenKind::Eof.description(), "end of file");
        assert!(TokenKind::String.has_literal());
        assert!(!TokenKind::Plus.has_literal());
    }

    #[test]
    fn test_eof_token() {
        let eof = Token::eof(2, 7);
        assert!(eof.kind.is_eof());
        assert!(eof.lexeme.is_empty());
        assert!(eof.literal.is_none());
        assert!(eof.span.is_empty());
        assert_eq!(eof.span.start, 7);
    }
}
