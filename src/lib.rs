//! MineLang - keyword-substituted, brace-delimited language to Python translator
//!
//! This crate provides the lexer and translator for MineLang, which rewrites
//! upper-case Portuguese keywords into Python and converts `{`/`}` blocks into
//! colon-and-indentation block structure.

pub mod errors;
pub mod keywords;
pub mod lexer;
pub mod codegen;

// Re-export commonly used types
pub use errors::{Location, MineError, MineResult, SourceSpan};
pub use keywords::{Keyword, KeywordTable, Role};
pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use codegen::{CodeGenerator, Emitter, PythonTranslator, translate};

/// Tokenize and translate MineLang source into Python
pub fn transpile(source: &str) -> MineResult<String> {
    let tokens = tokenize(source)?;
    translate(&tokens)
}
