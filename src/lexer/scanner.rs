//! Hand-written scanner for Lox
//!
//! Converts source code into a stream of tokens in a single left-to-right
//! pass with one character of lookahead.

use std::iter::FusedIterator;

use super::token::{Literal, Token, TokenKind};
use crate::errors::{ErrorSink, ScanError, SourceSpan};

/// The scanner for Lox source code
///
/// A scanner walks one source text exactly once. Offsets are byte offsets that
/// always sit on `char` boundaries.
pub struct Scanner<'src> {
    /// The source code being scanned
    source: &'src str,
    /// Start position of the current lexeme
    start: usize,
    /// Current byte position in the source
    current: usize,
    /// Current line, counting newlines consumed so far
    line: usize,
    /// Line on which the current lexeme started
    start_line: usize,
}

impl<'src> Scanner<'src> {
    /// Create a new scanner for the given source code
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
        }
    }

    /// Peek at the current character without consuming it
    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    /// Advance to the next character and return it
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    /// Check if we've reached the end of the source
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Get the current span (from start to current position)
    fn current_span(&self) -> SourceSpan {
        SourceSpan::new(self.start, self.current)
    }

    /// Get the current lexeme (text from start to current position)
    fn current_lexeme(&self) -> &'src str {
        &self.source[self.start..self.current]
    }

    /// Create a token for the current lexeme
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            self.current_lexeme(),
            None,
            self.start_line,
            self.current_span(),
        )
    }

    fn make_literal_token(&self, kind: TokenKind, literal: Literal) -> Token {
        Token::new(
            kind,
            self.current_lexeme(),
            Some(literal),
            self.start_line,
            self.current_span(),
        )
    }

    /// Consume the character if it matches the expected one
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Pick the two-character kind if the next character is `=`
    fn with_equal(&mut self, long: TokenKind, short: TokenKind) -> Token {
        if self.match_char('=') {
            self.make_token(long)
        } else {
            self.make_token(short)
        }
    }

    /// Scan a string literal; the opening quote is already consumed
    fn scan_string(&mut self, sink: &mut impl ErrorSink) -> Option<Token> {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            sink.report(ScanError::UnterminatedString {
                line: self.line,
                span: self.current_span(),
            });
            return None;
        }

        // Closing quote
        self.advance();

        let value = &self.source[self.start + 1..self.current - 1];
        Some(self.make_literal_token(TokenKind::String, Literal::String(value.to_string())))
    }

    /// Scan a single lexeme starting at `self.start`
    ///
    /// Returns `None` for lexemes that produce no token: whitespace, newlines,
    /// comments, and anything reported as an error.
    fn scan_token(&mut self, sink: &mut impl ErrorSink) -> Option<Token> {
        let c = self.advance()?;

        match c {
            '(' => Some(self.make_token(TokenKind::LeftParen)),
            ')' => Some(self.make_token(TokenKind::RightParen)),
            '{' => Some(self.make_token(TokenKind::LeftBrace)),
            '}' => Some(self.make_token(TokenKind::RightBrace)),
            ',' => Some(self.make_token(TokenKind::Comma)),
            '.' => Some(self.make_token(TokenKind::Dot)),
            '-' => Some(self.make_token(TokenKind::Minus)),
            '+' => Some(self.make_token(TokenKind::Plus)),
            ';' => Some(self.make_token(TokenKind::Semicolon)),
            '*' => Some(self.make_token(TokenKind::Star)),

            '!' => Some(self.with_equal(TokenKind::BangEqual, TokenKind::Bang)),
            '=' => Some(self.with_equal(TokenKind::EqualEqual, TokenKind::Equal)),
            '<' => Some(self.with_equal(TokenKind::LessEqual, TokenKind::Less)),
            '>' => Some(self.with_equal(TokenKind::GreaterEqual, TokenKind::Greater)),

            '/' => {
                if self.match_char('/') {
                    // Line comment, runs up to the newline
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                    None
                } else {
                    Some(self.make_token(TokenKind::Slash))
                }
            }

            '"' => self.scan_string(sink),

            ' ' | '\r' | '\t' => None,
            '\n' => {
                self.line += 1;
                None
            }

            _ => {
                sink.report(ScanError::UnexpectedCharacter {
                    character: c,
                    line: self.line,
                    span: self.current_span(),
                });
                None
            }
        }
    }

    /// Scan the next token, skipping lexemes that produce none
    ///
    /// Once the input is exhausted this returns an end-of-file token.
    pub fn next_token(&mut self, sink: &mut impl ErrorSink) -> Token {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            if let Some(token) = self.scan_token(sink) {
                return token;
            }
        }

        Token::eof(self.line, self.source.len())
    }

    /// Iterate over the tokens, ending with exactly one end-of-file token
    pub fn tokens<S: ErrorSink>(self, sink: S) -> Tokens<'src, S> {
        Tokens {
            scanner: self,
            sink,
            done: false,
        }
    }

    /// Collect all tokens into a vector
    pub fn scan_tokens<S: ErrorSink>(self, sink: S) -> Vec<Token> {
        self.tokens(sink).collect()
    }
}

/// Iterator over the tokens of one source text
///
/// Yields the end-of-file token last, then stops.
pub struct Tokens<'src, S> {
    scanner: Scanner<'src>,
    sink: S,
    done: bool,
}

impl<'src, S> Tokens<'src, S> {
    /// Hand back the sink once scanning is finished
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<'src, S: ErrorSink> Iterator for Tokens<'src, S> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let token = self.scanner.next_token(&mut self.sink);
        self.done = token.kind.is_eof();
        Some(token)
    }
}

impl<'src, S: ErrorSink> FusedIterator for Tokens<'src, S> {}
