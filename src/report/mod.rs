//! Report sink: renders tokens as an aligned `Line | Token | Type` table with
//! a per-category summary, as JSON, or into a report file.

pub mod report;
