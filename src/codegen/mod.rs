//! Code generation for MineLang
//!
//! Translates the token stream into the target language.

mod emitter;
mod python;

pub use emitter::Emitter;
pub use python::PythonTranslator;

use crate::errors::MineResult;
use crate::lexer::Token;

/// Trait for code generators
pub trait CodeGenerator {
    /// Generate code from the token stream
    fn generate(&mut self, tokens: &[Token]) -> MineResult<String>;

    /// Get the file extension for the target language
    fn file_extension(&self) -> &'static str;

    /// Get the name of the target language
    fn language_name(&self) -> &'static str;
}

/// Translate tokens to Python with the default settings
pub fn translate(tokens: &[Token]) -> MineResult<String> {
    PythonTranslator::new().translate(tokens)
}
