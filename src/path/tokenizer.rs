//! Lexing path data into commands and numbers

use miette::{NamedSource, SourceSpan};
use pest::Parser;
use pest::error::InputLocation;
use pest_derive::Parser;

use super::Token;
use crate::errors::PathError;

#[derive(Parser)]
#[grammar = "path.pest"]
pub struct PathDataParser;

/// Split path data into command and number tokens.
///
/// Whitespace and commas only separate tokens and are not kept. Anything
/// that is neither a command letter nor a number is a syntax error.
pub fn tokenize(data: &str) -> Result<Vec<Token<'_>>, PathError> {
    let pairs =
        PathDataParser::parse(Rule::path_data, data).map_err(|e| syntax_error(data, &e))?;

    let mut tokens = Vec::new();
    for pair in pairs {
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::command => {
                    if let Some(letter) = inner.as_str().chars().next() {
                        tokens.push(Token::Command(letter));
                    }
                }
                Rule::number => tokens.push(Token::Number(inner.as_str())),
                _ => {}
            }
        }
    }

    Ok(tokens)
}

fn syntax_error(data: &str, err: &pest::error::Error<Rule>) -> PathError {
    let span = match err.location {
        InputLocation::Pos(pos) => {
            let len = data[pos..].chars().next().map_or(0, char::len_utf8);
            SourceSpan::from((pos, len))
        }
        InputLocation::Span((start, end)) => SourceSpan::from((start, end - start)),
    };
    PathError::Syntax {
        element: "<path>".to_string(),
        src: NamedSource::new("d", data.to_string()),
        span,
    }
}
