//! Hand-written lexer/scanner for MineLang
//!
//! Converts source code into a stream of tokens in a single left-to-right
//! pass with one character of lookahead.

use super::token::{Token, TokenKind, TWO_CHAR_OPERATORS};
use crate::errors::{Location, MineError, MineResult, SourceSpan};
use crate::keywords::{is_all_upper, KeywordTable};

/// The lexer/scanner for MineLang source code
pub struct Lexer<'src> {
    /// The source code being lexed
    source: &'src str,
    /// Keywords used to validate upper-case identifiers
    keywords: KeywordTable,
    /// Current byte position in the source
    pos: usize,
    /// Start position of the current token
    start: usize,
    line: usize,
    column: usize,
    start_line: usize,
    start_column: usize,
    /// Trivia was skipped since the last token
    spaced: bool,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer using the standard keyword table
    pub fn new(source: &'src str) -> Self {
        Self::with_keywords(source, KeywordTable::standard())
    }

    /// Create a new lexer validating against the given keyword table
    pub fn with_keywords(source: &'src str, keywords: KeywordTable) -> Self {
        Self {
            source,
            keywords,
            pos: 0,
            start: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
            spaced: false,
        }
    }

    /// Peek at the current character without consuming it
    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Peek at the next character (one ahead of current)
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advance to the next character and return it
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn mark_start(&mut self) {
        self.start = self.pos;
        self.start_line = self.line;
        self.start_column = self.column;
    }

    /// Location of the current token's first character
    fn start_location(&self) -> Location {
        Location::new(
            self.start_line,
            self.start_column,
            SourceSpan::new(self.start, self.pos),
        )
    }

    fn current_lexeme(&self) -> &'src str {
        &self.source[self.start..self.pos]
    }

    fn make_token(&mut self, kind: TokenKind) -> Token {
        let token = Token::new(kind, self.current_lexeme(), self.start_line, self.start_column)
            .with_span(SourceSpan::new(self.start, self.pos))
            .with_spaced(self.spaced);
        self.spaced = false;
        token
    }

    /// Skip whitespace and comments, but not newlines
    fn skip_trivia(&mut self) -> MineResult<()> {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\r') => {
                    self.advance();
                }
                Some('#') => {
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                }
                Some('/') if self.peek_next() == Some('*') => self.skip_block_comment()?,
                _ => break,
            }
            self.spaced = true;
        }
        Ok(())
    }

    fn skip_block_comment(&mut self) -> MineResult<()> {
        self.mark_start();
        self.advance(); // consume '/'
        self.advance(); // consume '*'
        loop {
            match self.peek() {
                None => {
                    let location = Location::new(
                        self.start_line,
                        self.start_column,
                        SourceSpan::new(self.start, self.start + 2),
                    );
                    return Err(MineError::lexical(
                        format!("unterminated block comment starting at {}", location),
                        location,
                    ));
                }
                Some('*') if self.peek_next() == Some('/') => {
                    self.advance();
                    self.advance();
                    return Ok(());
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    /// Scan a string literal; escapes are kept verbatim
    fn scan_string(&mut self) -> MineResult<Token> {
        loop {
            match self.advance() {
                Some('"') => return Ok(self.make_token(TokenKind::String)),
                Some('\\') => {
                    if self.advance().is_none() {
                        break;
                    }
                }
                Some(_) => {}
                None => break,
            }
        }

        let location = Location::new(
            self.start_line,
            self.start_column,
            SourceSpan::new(self.start, self.start + 1),
        );
        Err(MineError::lexical(
            format!("unterminated string starting at {}", location),
            location,
        ))
    }

    /// Scan an identifier, rejecting unknown upper-case pseudo-keywords
    fn scan_identifier(&mut self) -> MineResult<Token> {
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }

        let text = self.current_lexeme();
        if is_all_upper(text) && !self.keywords.contains(text) {
            return Err(MineError::lexical(
                format!(
                    "unknown MineLang keyword '{}'; check that the command is spelled correctly",
                    text
                ),
                self.start_location(),
            ));
        }

        Ok(self.make_token(TokenKind::Identifier))
    }

    /// Scan an integer or a number with a single decimal point
    fn scan_number(&mut self) -> Token {
        let mut is_float = false;
        while let Some(c) = self.peek() {
            if c == '.' && !is_float {
                is_float = true;
            } else if !c.is_ascii_digit() {
                break;
            }
            self.advance();
        }
        self.make_token(TokenKind::Number)
    }

    /// Scan the next token, or `None` at end of input
    pub fn next_token(&mut self) -> MineResult<Option<Token>> {
        self.skip_trivia()?;
        self.mark_start();

        let Some(c) = self.advance() else {
            return Ok(None);
        };

        if c == '\n' {
            return Ok(Some(self.make_token(TokenKind::Newline)));
        }

        if c == '"' {
            return self.scan_string().map(Some);
        }

        if c.is_alphabetic() || c == '_' {
            return self.scan_identifier().map(Some);
        }

        if c.is_ascii_digit() {
            return Ok(Some(self.scan_number()));
        }

        // Maximal munch: two-character operators first
        if let Some(next) = self.peek() {
            let mut pair = String::with_capacity(2);
            pair.push(c);
            pair.push(next);
            if TWO_CHAR_OPERATORS.contains(&pair.as_str()) {
                self.advance();
                return Ok(Some(self.make_token(TokenKind::Operator)));
            }
        }

        match TokenKind::from_symbol(c) {
            Some(kind) => Ok(Some(self.make_token(kind))),
            None => Err(MineError::lexical(
                format!("invalid character '{}'", c),
                self.start_location(),
            )),
        }
    }

    /// Collect all tokens, terminated by a synthetic newline
    pub fn tokenize(mut self) -> MineResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }

        debug_assert!(self.is_at_end());
        let end = Token::new(TokenKind::Newline, "\n", self.line, self.column)
            .with_span(SourceSpan::new(self.pos, self.pos));
        tokens.push(end);

        tracing::debug!("Scanned {} tokens", tokens.len());
        Ok(tokens)
    }
}
