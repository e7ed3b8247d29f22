//! Source provider: hands the lexer one complete string, read either from a
//! named file or typed interactively until EOF.

pub mod source;
