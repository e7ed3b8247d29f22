use lazy_static::lazy_static;
use regex::Regex;

use crate::{MK_CATEGORY_HANDLER, MK_TOKEN};

use super::tokens::{CategoryCounts, Token, TokenCategory, Tokens, KEYWORDS, OPERATORS, PUNCTUATIONS};

pub type RegexHandler = fn(&mut Lexer<'_>, usize);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Order is significant: the first pattern matching at the scan position wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[ \t\r\n\x0C\x0B]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+(\.[0-9]+)?").unwrap(), handler: MK_CATEGORY_HANDLER!(TokenCategory::Number) },
        RegexPattern { regex: Regex::new(&alternation(OPERATORS.iter().copied())).unwrap(), handler: MK_CATEGORY_HANDLER!(TokenCategory::Operator) },
        RegexPattern { regex: Regex::new(&alternation(PUNCTUATIONS.iter().copied())).unwrap(), handler: MK_CATEGORY_HANDLER!(TokenCategory::Punctuation) },
    ];
}

/// Builds an anchored alternation over `words`, longest spelling first.
///
/// The regex crate honours alternation order (leftmost-first), so listing
/// `<<=` before `<<` before `<` is what makes the operator match maximal.
fn alternation<'a>(words: impl Iterator<Item = &'a str>) -> String {
    let mut words = words.collect::<Vec<&str>>();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let escaped = words.into_iter().map(regex::escape).collect::<Vec<String>>();
    format!("^(?:{})", escaped.join("|"))
}

pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    tokens: Vec<Token>,
    counts: CategoryCounts,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            pos: 0,
            line: 1,
            tokens: vec![],
            counts: CategoryCounts::default(),
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.counts.increment(token.category);
        self.tokens.push(token);
    }

    /// Emits the next `len` bytes as a single token and moves past them.
    pub fn emit(&mut self, category: TokenCategory, len: usize) {
        let text = String::from(&self.remainder()[..len]);
        self.push(MK_TOKEN!(category, text, self.line));
        self.advance_n(len);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    fn finish(self) -> Tokens {
        Tokens {
            tokens: self.tokens,
            counts: self.counts,
        }
    }
}

fn skip_handler(lexer: &mut Lexer<'_>, len: usize) {
    let newlines = lexer.remainder()[..len].matches('\n').count();
    lexer.line += newlines;
    lexer.advance_n(len);
}

fn symbol_handler(lexer: &mut Lexer<'_>, len: usize) {
    let value = &lexer.remainder()[..len];

    if KEYWORDS.contains(value) {
        lexer.emit(TokenCategory::Keyword, len);
    } else {
        lexer.emit(TokenCategory::Identifier, len);
    }
}

/// Splits cleaned source text into classified, line-tagged tokens.
///
/// Never fails: a character no pattern accepts becomes a one-character
/// `Unknown` token and scanning resumes after it.
pub fn tokenize(source: &str) -> Tokens {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let remaining = lex.remainder();
        let mut matched = false;

        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(remaining) {
                (pattern.handler)(&mut lex, found.end());
                matched = true;
                break;
            }
        }

        if !matched {
            if let Some(ch) = lex.at() {
                tracing::trace!(line = lex.line(), character = ?ch, "unknown character");
                lex.emit(TokenCategory::Unknown, ch.len_utf8());
            }
        }
    }

    let tokens = lex.finish();
    tracing::debug!(
        total = tokens.counts().total(),
        unknown = tokens.counts().get(TokenCategory::Unknown),
        "tokenized source"
    );
    tokens
}
