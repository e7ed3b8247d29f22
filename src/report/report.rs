use std::{fmt::Write as _, fs, path::Path};

use serde::Serialize;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{CategoryCounts, Token, TokenCategory, Tokens},
};

const RULE: &str = "========================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct Summary {
    #[serde(rename = "Total Tokens")]
    total: usize,
    #[serde(rename = "Keywords")]
    keywords: usize,
    #[serde(rename = "Identifiers")]
    identifiers: usize,
    #[serde(rename = "Numbers")]
    numbers: usize,
    #[serde(rename = "Operators")]
    operators: usize,
    #[serde(rename = "Punctuations")]
    punctuations: usize,
    #[serde(rename = "Unknowns")]
    unknowns: usize,
}

impl From<&CategoryCounts> for Summary {
    fn from(counts: &CategoryCounts) -> Self {
        Summary {
            total: counts.total(),
            keywords: counts.get(TokenCategory::Keyword),
            identifiers: counts.get(TokenCategory::Identifier),
            numbers: counts.get(TokenCategory::Number),
            operators: counts.get(TokenCategory::Operator),
            punctuations: counts.get(TokenCategory::Punctuation),
            unknowns: counts.get(TokenCategory::Unknown),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    tokens: &'a [Token],
    summary: Summary,
}

pub fn render_table(tokens: &[Token]) -> String {
    let mut table = String::from("Line | Token               | Type\n");
    table.push_str("-----|---------------------|------------\n");

    for token in tokens {
        // Writing into a String cannot fail.
        let _ = writeln!(table, "{:4} | {:<19} | {}", token.line(), token.text(), token.category());
    }

    table
}

pub fn render_summary(counts: &CategoryCounts) -> String {
    let mut summary = format!("Total Tokens: {}\n", counts.total());

    for (category, count) in counts.iter() {
        let _ = writeln!(summary, "{}: {}", category.plural(), count);
    }

    summary
}

pub fn render_report(tokens: &Tokens) -> String {
    format!(
        "Tokens:\n{RULE}\n{}\nSummary:\n{RULE}\n{}",
        render_table(tokens.tokens()),
        render_summary(tokens.counts())
    )
}

pub fn render_json(tokens: &Tokens) -> Result<String, Error> {
    let report = JsonReport {
        tokens: tokens.tokens(),
        summary: Summary::from(tokens.counts()),
    };

    let json = serde_json::to_string_pretty(&report).map_err(|source| ErrorImpl::Serialize { source })?;
    Ok(json)
}

pub fn render(tokens: &Tokens, format: ReportFormat) -> Result<String, Error> {
    match format {
        ReportFormat::Text => Ok(render_report(tokens)),
        ReportFormat::Json => render_json(tokens),
    }
}

/// Writes the report for `tokens` to `path`.
///
/// A failure leaves `tokens` untouched, so callers can still display them.
pub fn save_report(path: &Path, tokens: &Tokens, format: ReportFormat) -> Result<(), Error> {
    let contents = render(tokens, format)?;

    fs::write(path, contents).map_err(|source| ErrorImpl::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), tokens = tokens.len(), "saved token report");
    Ok(())
}
