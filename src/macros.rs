//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_CATEGORY_HANDLER!` - Creates a lexer handler that emits the matched
//!   text under a fixed category
//!
//! These macros reduce boilerplate in the pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$category` - The TokenCategory
/// * `$text` - The token's source text
/// * `$line` - The 1-based line the token starts on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenCategory::Number, "42".to_string(), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($category:expr, $text:expr, $line:expr) => {
        Token {
            line: $line,
            text: $text,
            category: $category,
        }
    };
}

/// Creates a handler that emits the whole match as one token of `$category`.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^[0-9]+").unwrap(),
///     handler: MK_CATEGORY_HANDLER!(TokenCategory::Number),
/// }
/// ```
#[macro_export]
macro_rules! MK_CATEGORY_HANDLER {
    ($category:expr) => {{
        fn handler(lexer: &mut Lexer<'_>, len: usize) {
            lexer.emit($category, len);
        }
        handler
    }};
}
