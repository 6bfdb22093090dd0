//! Error types with rich diagnostics using miette
//!
//! Fatal conditions carry the offending source text so the binary can point
//! at the exact character that stopped the run.

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Top-level Errors
// ============================================================================

/// Everything that can abort a normalization run
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    #[diagnostic(code(op1svg::io::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    #[diagnostic(code(op1svg::io::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input is not well-formed XML: {message}")]
    #[diagnostic(code(op1svg::parse::xml))]
    Xml {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("root element <{tag}> is not <svg>")]
    #[diagnostic(
        code(op1svg::parse::root),
        help("the device only reads documents whose root element is <svg>")
    )]
    UnsupportedRoot { tag: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Path(#[from] PathError),
}

impl Error {
    /// Wrap a roxmltree error, pointing at the position it reports.
    pub(crate) fn xml(name: &str, source: &str, err: roxmltree::Error) -> Self {
        let pos = err.pos();
        let offset = text_offset(source, pos.row, pos.col);
        Error::Xml {
            message: err.to_string(),
            src: NamedSource::new(name, source.to_string()),
            span: SourceSpan::from((offset, 0)),
        }
    }
}

/// Byte offset of a 1-based row/column (columns count chars).
fn text_offset(text: &str, row: u32, col: u32) -> usize {
    let mut offset = 0;
    for (idx, line) in text.split_inclusive('\n').enumerate() {
        if idx + 1 == row as usize {
            let col_bytes: usize = line
                .chars()
                .take(col.saturating_sub(1) as usize)
                .map(char::len_utf8)
                .sum();
            return offset + col_bytes;
        }
        offset += line.len();
    }
    text.len()
}

// ============================================================================
// Path Errors
// ============================================================================

/// Errors raised while tokenizing path data
#[derive(Error, Diagnostic, Debug)]
pub enum PathError {
    #[error("invalid path data in {element}")]
    #[diagnostic(
        code(op1svg::path::syntax),
        help("path data may only contain command letters, numbers, whitespace and commas")
    )]
    Syntax {
        element: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("unexpected character")]
        span: SourceSpan,
    },
}

impl PathError {
    /// Name the element whose `d` attribute failed, e.g. `<path id="wave">`.
    pub fn with_element(self, element: impl Into<String>) -> Self {
        match self {
            PathError::Syntax { src, span, .. } => PathError::Syntax {
                element: element.into(),
                src,
                span,
            },
        }
    }
}

// ============================================================================
// Style Errors
// ============================================================================

/// A style property that cannot be turned into an attribute.
///
/// Never fatal: the flattener logs it and skips the property.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("style property `{0}` has no `:` separator")]
    MissingSeparator(String),

    #[error("style property `{0}` has an empty name")]
    EmptyName(String),
}
