//! Lexical analysis module.
//!
//! This module turns C++-flavoured source text into classified tokens:
//!
//! - Comment stripping that keeps every newline
//! - Tokenization using an ordered table of anchored regex patterns
//! - Keyword, identifier, number, operator and punctuation recognition
//! - Line tracking and per-category counts

pub mod comments;
pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
