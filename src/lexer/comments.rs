use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A block comment with no closing `*/` runs to the end of input.
    static ref COMMENT_REGEX: Regex = Regex::new(r"//[^\n]*|/\*(?s:.*?)(?:\*/|\z)").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrippedSource {
    pub text: String,
    /// Line on which an unterminated block comment was opened, if any.
    pub unterminated_block: Option<usize>,
}

/// Removes `//` and `/* */` comments from `source`.
///
/// Every newline is kept, including the ones inside block comments, so line
/// numbers computed on the result still refer to the raw source.
pub fn strip_comments(source: &str) -> String {
    strip_comments_with_report(source).text
}

pub fn strip_comments_with_report(source: &str) -> StrippedSource {
    let mut text = String::with_capacity(source.len());
    let mut unterminated_block = None;
    let mut last = 0;

    for comment in COMMENT_REGEX.find_iter(source) {
        text.push_str(&source[last..comment.start()]);

        let body = comment.as_str();
        text.extend(body.matches('\n'));

        if body.starts_with("/*") && !(body.len() >= 4 && body.ends_with("*/")) {
            let line = source[..comment.start()].matches('\n').count() + 1;
            tracing::warn!(line, "unterminated block comment runs to end of input");
            unterminated_block = Some(line);
        }

        last = comment.end();
    }

    text.push_str(&source[last..]);

    StrippedSource {
        text,
        unterminated_block,
    }
}
