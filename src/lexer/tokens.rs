use lazy_static::lazy_static;
use serde::Serialize;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = [
        "alignas", "alignof", "and", "and_eq", "asm", "atomic_cancel", "atomic_commit",
        "atomic_noexcept", "auto", "bitand", "bitor", "bool", "break", "case", "catch", "char",
        "char8_t", "char16_t", "char32_t", "class", "compl", "concept", "const", "consteval",
        "constexpr", "constinit", "const_cast", "continue", "co_await", "co_return", "co_yield",
        "decltype", "default", "delete", "do", "double", "dynamic_cast", "else", "enum",
        "explicit", "export", "extern", "false", "float", "for", "friend", "goto", "if",
        "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
        "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "reflexpr",
        "register", "reinterpret_cast", "requires", "return", "short", "signed", "sizeof",
        "static", "static_assert", "static_cast", "struct", "switch", "synchronized",
        "template", "this", "thread_local", "throw", "true", "try", "typedef", "typeid",
        "typename", "union", "unsigned", "using", "virtual", "void", "volatile", "wchar_t",
        "while", "xor", "xor_eq",
    ]
    .into_iter()
    .collect();

    pub static ref OPERATORS: HashSet<&'static str> = [
        "+", "-", "*", "/", "%", "=", "==", "!=", "<", ">", "<=", ">=", "++", "--", "&&", "||",
        "!", "&", "|", "^", "~", "<<", ">>", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=",
        "<<=", ">>=", "->", ".", "::",
    ]
    .into_iter()
    .collect();

    pub static ref PUNCTUATIONS: HashSet<&'static str> = [
        "(", ")", "{", "}", "[", "]", ";", ":", ",", ".", "?", "#",
    ]
    .into_iter()
    .collect();
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenCategory {
    Keyword,
    Identifier,
    Number,
    Operator,
    Punctuation,
    Unknown,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 6] = [
        TokenCategory::Keyword,
        TokenCategory::Identifier,
        TokenCategory::Number,
        TokenCategory::Operator,
        TokenCategory::Punctuation,
        TokenCategory::Unknown,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TokenCategory::Keyword => "KEYWORD",
            TokenCategory::Identifier => "IDENTIFIER",
            TokenCategory::Number => "NUMBER",
            TokenCategory::Operator => "OPERATOR",
            TokenCategory::Punctuation => "PUNCTUATION",
            TokenCategory::Unknown => "UNKNOWN",
        }
    }

    /// Plural heading used in report summaries, e.g. `Keywords`.
    pub fn plural(&self) -> &'static str {
        match self {
            TokenCategory::Keyword => "Keywords",
            TokenCategory::Identifier => "Identifiers",
            TokenCategory::Number => "Numbers",
            TokenCategory::Operator => "Operators",
            TokenCategory::Punctuation => "Punctuations",
            TokenCategory::Unknown => "Unknowns",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub(crate) line: usize,
    #[serde(rename = "value")]
    pub(crate) text: String,
    #[serde(rename = "type")]
    pub(crate) category: TokenCategory,
}

impl Token {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> TokenCategory {
        self.category
    }

    /// 1-based line on which the token starts.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) @ line {}", self.category, self.text, self.line)
    }
}

/// Per-category token tally for a single tokenization run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: [usize; 6],
}

impl CategoryCounts {
    pub(crate) fn increment(&mut self, category: TokenCategory) {
        self.counts[category.index()] += 1;
    }

    pub fn get(&self, category: TokenCategory) -> usize {
        self.counts[category.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenCategory, usize)> + '_ {
        TokenCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

/// Output of one tokenization run: the ordered tokens and their counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    pub(crate) tokens: Vec<Token>,
    pub(crate) counts: CategoryCounts,
}

impl Tokens {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn counts(&self) -> &CategoryCounts {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
