//! Path data (`d` attribute) normalization.
//!
//! The device chokes on line commands carrying several coordinate pairs and
//! on free-form separators, so path data is lexed into [`Token`]s, lineto
//! runs are split into single-pair commands, and the result is written back
//! with one canonical separator style.

mod normalizer;
mod tokenizer;

pub use normalizer::{normalize_path, serialize, split_lineto};
pub use tokenizer::{PathDataParser, Rule, tokenize};

/// A lexical unit of path data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A command letter such as `M`, `l` or `z`
    Command(char),
    /// A numeric literal, exactly as written in the source
    Number(&'a str),
}

impl Token<'_> {
    pub fn is_command(&self) -> bool {
        matches!(self, Token::Command(_))
    }
}
