//! Lineto splitting and canonical serialization

use super::{Token, tokenize};
use crate::errors::PathError;
use crate::log::debug;
use crate::number::limit_decimals;

/// Numbers consumed by one lineto segment.
const LINETO_ARGS: usize = 2;

/// Tokenize, split lineto runs and re-serialize path data.
pub fn normalize_path(data: &str) -> Result<String, PathError> {
    let tokens = split_lineto(tokenize(data)?);
    let normalized = serialize(&tokens);
    debug!(before = data, after = %normalized, "normalized path data");
    Ok(normalized)
}

/// Give every lineto coordinate pair its own command letter.
///
/// `l 20 20 20 -20 10 10` becomes `l 20 20 l 20 -20 l 10 10`. Other
/// commands keep their argument grouping.
pub fn split_lineto(tokens: Vec<Token<'_>>) -> Vec<Token<'_>> {
    let mut result = Vec::with_capacity(tokens.len());
    let mut command = None;
    let mut args = 0;

    for token in tokens {
        match token {
            Token::Command(letter) => {
                command = Some(letter);
                args = 0;
            }
            Token::Number(_) => {
                if let Some(letter @ ('L' | 'l')) = command {
                    if args == LINETO_ARGS {
                        result.push(Token::Command(letter));
                        args = 0;
                    }
                    args += 1;
                }
            }
        }
        result.push(token);
    }

    result
}

/// Write tokens back with the separators the device expects.
///
/// Commands are glued to their neighbours, numbers are separated by commas,
/// and a leading minus sign stands in for the comma.
pub fn serialize(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    let mut previous_was_command = false;

    for token in tokens {
        match *token {
            Token::Command(letter) => {
                if out.ends_with(',') {
                    out.pop();
                }
                out.push(letter);
            }
            Token::Number(text) => {
                if text.starts_with('-') && !previous_was_command && out.ends_with(',') {
                    out.pop();
                }
                out.push_str(&limit_decimals(text));
                out.push(',');
            }
        }
        previous_was_command = token.is_command();
    }

    out.trim_matches([' ', ',']).to_string()
}
