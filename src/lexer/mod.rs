//! Lexer module for MineLang
//!
//! Hand-written lexer that tokenizes MineLang source code into a stream of tokens.

mod scanner;
mod token;

pub use scanner::Lexer;
pub use token::{Token, TokenKind, TWO_CHAR_OPERATORS};

use crate::errors::MineResult;

/// Tokenize source text with the standard keyword table
pub fn tokenize(source: &str) -> MineResult<Vec<Token>> {
    Lexer::new(source).tokenize()
}
