//! Token definitions for MineLang
//!
//! Defines all token kinds produced by the lexer.

use crate::errors::{Location, SourceSpan};
use std::fmt;

/// The kind of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    String,
    Newline,
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Dot,
    Operator,
}

impl TokenKind {
    /// Map a single punctuation character to its token kind
    pub fn from_symbol(c: char) -> Option<TokenKind> {
        match c {
            '{' => Some(TokenKind::LBrace),
            '}' => Some(TokenKind::RBrace),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            '[' => Some(TokenKind::LBracket),
            ']' => Some(TokenKind::RBracket),
            ';' => Some(TokenKind::Semicolon),
            ',' => Some(TokenKind::Comma),
            '.' => Some(TokenKind::Dot),
            ':' | '+' | '-' | '*' | '/' | '%' | '<' | '>' | '=' | '!' | '&' | '|' | '^' | '~' => {
                Some(TokenKind::Operator)
            }
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Newline => "newline",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Semicolon => "';'",
            TokenKind::Comma => "','",
            TokenKind::Dot => "'.'",
            TokenKind::Operator => "operator",
        };
        write!(f, "{}", s)
    }
}

/// Operators lexed as a single two-character token
pub const TWO_CHAR_OPERATORS: &[&str] = &[
    "==", "!=", ">=", "<=", "//", "**", "<<", ">>", "+=", "-=", "*=", "/=", "%=",
];

/// A token produced by the lexer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact lexeme text; keywords are mapped later by the translator
    pub value: String,
    /// 1-based line
    pub line: usize,
    /// 1-based column, counted in characters
    pub column: usize,
    pub span: SourceSpan,
    /// Whitespace or a comment separated this token from the previous one
    pub spaced: bool,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
            column,
            span: SourceSpan::default(),
            spaced: false,
        }
    }

    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = span;
        self
    }

    pub fn with_spaced(mut self, spaced: bool) -> Self {
        self.spaced = spaced;
        self
    }

    pub fn location(&self) -> Location {
        Location::new(self.line, self.column, self.span)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Newline => write!(f, "newline at {}:{}", self.line, self.column),
            _ => write!(f, "{} '{}' at {}:{}", self.kind, self.value, self.line, self.column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbol() {
        assert_eq!(TokenKind::from_symbol('{'), Some(TokenKind::LBrace));
        assert_eq!(TokenKind::from_symbol(';'), Some(TokenKind::Semicolon));
        assert_eq!(TokenKind::from_symbol(':'), Some(TokenKind::Operator));
        assert_eq!(TokenKind::from_symbol('$'), None);
    }

    #[test]
    fn test_display() {
        let tok = Token::new(TokenKind::Identifier, "soma", 2, 5);
        assert_eq!(tok.to_string(), "identifier 'soma' at 2:5");
        assert_eq!(Token::new(TokenKind::Newline, "\n", 1, 9).to_string(), "newline at 1:9");
    }
}
