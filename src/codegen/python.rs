//! Python translator
//!
//! Rewrites the MineLang token stream into Python: keywords are substituted,
//! `{`/`}` blocks become `:` plus indentation, and everything else is passed
//! through verbatim with whitespace normalized.

use super::emitter::Emitter;
use super::CodeGenerator;
use crate::errors::{Location, MineError, MineResult};
use crate::keywords::{KeywordTable, Role};
use crate::lexer::{Token, TokenKind};

/// Where the translator stands with respect to block structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    Normal,
    /// A header keyword was emitted; its `{` gets a trailing `:`
    AwaitingBlockOpen { header: Location },
    /// The previous token was `}`; an else-like keyword opens a new header
    JustClosedBlock,
}

impl BlockState {
    /// State after a token that neither opens nor closes a header
    fn after_plain_token(self) -> Self {
        match self {
            BlockState::JustClosedBlock => BlockState::Normal,
            other => other,
        }
    }
}

/// Python translator
pub struct PythonTranslator {
    keywords: KeywordTable,
    /// Spaces per indentation level
    indent_width: usize,
}

impl PythonTranslator {
    pub fn new() -> Self {
        Self {
            keywords: KeywordTable::standard(),
            indent_width: 4,
        }
    }

    /// Substitute keywords from the given table
    pub fn with_keywords(mut self, keywords: KeywordTable) -> Self {
        self.keywords = keywords;
        self
    }

    /// Set the number of spaces per indentation level
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Translate a token stream into Python source
    pub fn translate(&self, tokens: &[Token]) -> MineResult<String> {
        let mut pass = Pass {
            keywords: self.keywords,
            out: Emitter::new(self.indent_width),
            state: BlockState::Normal,
        };

        for token in tokens {
            pass.token(token)?;
        }

        let end = tokens
            .last()
            .map(Token::location)
            .unwrap_or_else(|| Location::new(1, 1, Default::default()));
        pass.finish(end)
    }
}

impl Default for PythonTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for PythonTranslator {
    fn generate(&mut self, tokens: &[Token]) -> MineResult<String> {
        self.translate(tokens)
    }

    fn file_extension(&self) -> &'static str {
        "py"
    }

    fn language_name(&self) -> &'static str {
        "Python"
    }
}

/// State of a single translation run
struct Pass {
    keywords: KeywordTable,
    out: Emitter,
    state: BlockState,
}

impl Pass {
    fn token(&mut self, token: &Token) -> MineResult<()> {
        match token.kind {
            // A header keeps collecting its condition until the `{` shows up
            TokenKind::Newline if matches!(self.state, BlockState::AwaitingBlockOpen { .. }) => {
                self.out.write(" ");
            }
            TokenKind::Newline | TokenKind::Semicolon => {
                self.out.newline();
                self.state = self.state.after_plain_token();
            }
            TokenKind::LBrace => self.open_block(),
            TokenKind::RBrace => self.close_block(token)?,
            TokenKind::Identifier => self.identifier(token),
            TokenKind::String
            | TokenKind::Number
            | TokenKind::Operator
            | TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::LBracket
            | TokenKind::RBracket
            | TokenKind::Comma
            | TokenKind::Dot => {
                self.write_token(token, &token.value);
                self.state = self.state.after_plain_token();
            }
        }
        Ok(())
    }

    /// Write text for a token, keeping a single space where the source had one
    fn write_token(&mut self, token: &Token, text: &str) {
        if token.spaced {
            self.out.write(" ");
        }
        self.out.write(text);
    }

    fn open_block(&mut self) {
        if let BlockState::AwaitingBlockOpen { .. } = self.state {
            self.out.attach(":");
        }
        self.out.newline();
        self.out.indent();
        self.state = BlockState::Normal;
        tracing::trace!("Opened block, depth {}", self.out.depth());
    }

    fn close_block(&mut self, token: &Token) -> MineResult<()> {
        if let BlockState::AwaitingBlockOpen { header } = self.state {
            return Err(MineError::translation(
                format!("header keyword at {} is closed by '}}' before its block was opened", header),
                token.location(),
            ));
        }

        let depth = self.out.dedent().ok_or_else(|| {
            MineError::translation(
                "attention, operator! block closed with '}' but never opened",
                token.location(),
            )
        })?;
        self.state = BlockState::JustClosedBlock;
        tracing::trace!("Closed block, depth {}", depth);
        Ok(())
    }

    fn identifier(&mut self, token: &Token) {
        let Some(keyword) = self.keywords.lookup(&token.value) else {
            self.write_token(token, &token.value);
            self.state = self.state.after_plain_token();
            return;
        };

        self.write_token(token, keyword.target);
        if keyword.needs_space() {
            self.out.write(" ");
        }

        self.state = match (keyword.role, self.state) {
            (Role::Header, _) | (Role::Continuation, BlockState::JustClosedBlock) => {
                BlockState::AwaitingBlockOpen {
                    header: token.location(),
                }
            }
            (Role::Continuation | Role::Spaced | Role::Plain, state) => state.after_plain_token(),
        };
    }

    fn finish(self, end: Location) -> MineResult<String> {
        if self.out.depth() != 0 {
            return Err(MineError::translation(
                format!(
                    "attention, operator! {} block(s) left open: missing '}}'",
                    self.out.depth()
                ),
                end,
            ));
        }

        if let BlockState::AwaitingBlockOpen { header } = self.state {
            return Err(MineError::translation(
                "header keyword is never followed by '{'",
                header,
            ));
        }

        let output = self.out.finish();
        tracing::debug!("Translated into {} lines", output.lines().count());
        Ok(output)
    }
}
