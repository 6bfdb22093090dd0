//! Normalize SVG files so that the OP-1 understands them.
//!
//! The OP-1 renders only a small slice of SVG. This crate rewrites documents
//! produced by general-purpose editors into that slice:
//!
//! - unsupported elements (with their subtrees) and attributes are dropped,
//!   and comments vanish
//! - inline `style` properties become real attributes
//! - numeric values are clamped to four decimals
//! - path data is rewritten with one coordinate pair per lineto command and
//!   canonical separators
//!
//! ```rust
//! let svg = op1svg::normalize_with(
//!     r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0,0 L10,10 20,20"/></svg>"#,
//!     &op1svg::EmitOptions::compact(),
//! )
//! .unwrap();
//! assert!(svg.contains(r#"<path d="M0,0L10,10L20,20"/>"#));
//! ```

use std::fs;
use std::path::Path;

pub mod emit;
pub mod errors;
pub mod log;
pub mod number;
pub mod path;
pub mod style;
pub mod tree;
pub mod whitelist;

pub use emit::EmitOptions;
pub use errors::{Error, PathError, StyleError};

/// Normalize an SVG document with the default (indented) layout.
pub fn normalize(source: &str) -> Result<String, Error> {
    normalize_with(source, &EmitOptions::default())
}

/// Normalize an SVG document.
///
/// The whole output is built in memory; any error means no output at all.
pub fn normalize_with(source: &str, options: &EmitOptions) -> Result<String, Error> {
    normalize_named("<input>", source, options)
}

/// A step of [`normalize_file_with`], reported before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Parsing,
    Optimizing,
    Saving,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Stage::Parsing => "Parsing file...",
            Stage::Optimizing => "Optimizing SVG...",
            Stage::Saving => "Saving...",
        })
    }
}

/// Read `input`, normalize it and write the result to `output`.
///
/// `output` is only touched once the document has been fully normalized.
pub fn normalize_file(input: &Path, output: &Path, options: &EmitOptions) -> Result<(), Error> {
    normalize_file_with(input, output, options, |_| {})
}

/// Like [`normalize_file`], calling `on_stage` as each step begins.
pub fn normalize_file_with(
    input: &Path,
    output: &Path,
    options: &EmitOptions,
    mut on_stage: impl FnMut(Stage),
) -> Result<(), Error> {
    on_stage(Stage::Parsing);
    let source = read_source(input)?;
    let root = tree::parse_document(&input.display().to_string(), &source)?;

    on_stage(Stage::Optimizing);
    let svg = emit::assemble(&root, options)?;

    on_stage(Stage::Saving);
    write_output(output, &svg)
}

fn normalize_named(name: &str, source: &str, options: &EmitOptions) -> Result<String, Error> {
    let root = tree::parse_document(name, source)?;
    emit::assemble(&root, options)
}

/// Read an input document as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a finished document in one go.
pub fn write_output(path: &Path, contents: &str) -> Result<(), Error> {
    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
