//! Error types for the I/O around the lexer.
//!
//! Tokenization itself never fails. These errors come from the collaborators:
//!
//! - Reading source from a file or stdin
//! - Writing the token report
//! - Human-readable names and suggestions for each failure

pub mod errors;
