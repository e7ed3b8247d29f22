#![allow(clippy::module_inception)]

use crate::lexer::{comments::strip_comments, lexer::tokenize, tokens::Tokens};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod report;
pub mod source;

extern crate regex;

/// Strips comments from `source` and tokenizes what is left.
///
/// Total over all inputs: the empty string yields no tokens and all-zero
/// counts, and unrecognised characters come back as `Unknown` tokens.
pub fn analyze(source: &str) -> Tokens {
    tokenize(&strip_comments(source))
}
