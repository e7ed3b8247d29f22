//! Unit tests for the lexer module.
//!
//! Covers classification of every category, longest-match and precedence
//! rules, line tracking, and comment stripping.

use pretty_assertions::assert_eq;

use super::{
    comments::{strip_comments, strip_comments_with_report},
    lexer::tokenize,
    tokens::{TokenCategory, Tokens},
};

fn kinds(tokens: &Tokens) -> Vec<(&str, TokenCategory)> {
    tokens
        .iter()
        .map(|token| (token.text(), token.category()))
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("int class return if while nullptr co_await xor_eq");

    assert_eq!(tokens.len(), 8);
    assert!(tokens.iter().all(|token| token.category() == TokenCategory::Keyword));
    assert_eq!(tokens.counts().get(TokenCategory::Keyword), 8);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase");

    assert_eq!(
        kinds(&tokens),
        vec![
            ("foo", TokenCategory::Identifier),
            ("bar", TokenCategory::Identifier),
            ("baz_123", TokenCategory::Identifier),
            ("_underscore", TokenCategory::Identifier),
            ("CamelCase", TokenCategory::Identifier),
        ]
    );
}

#[test]
fn test_keyword_must_match_whole_token() {
    let tokens = tokenize("iffy = 1;");

    assert_eq!(
        kinds(&tokens),
        vec![
            ("iffy", TokenCategory::Identifier),
            ("=", TokenCategory::Operator),
            ("1", TokenCategory::Number),
            (";", TokenCategory::Punctuation),
        ]
    );

    let tokens = tokenize("integer int_ returns Int");
    assert!(tokens.iter().all(|token| token.category() == TokenCategory::Identifier));
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5");

    assert_eq!(
        kinds(&tokens),
        vec![
            ("42", TokenCategory::Number),
            ("3.14", TokenCategory::Number),
            ("0", TokenCategory::Number),
            ("100.5", TokenCategory::Number),
        ]
    );
}

#[test]
fn test_number_edges() {
    assert_eq!(
        kinds(&tokenize("1.")),
        vec![("1", TokenCategory::Number), (".", TokenCategory::Operator)]
    );
    assert_eq!(
        kinds(&tokenize("123abc")),
        vec![("123", TokenCategory::Number), ("abc", TokenCategory::Identifier)]
    );
    assert_eq!(
        kinds(&tokenize("1.2.3")),
        vec![
            ("1.2", TokenCategory::Number),
            (".", TokenCategory::Operator),
            ("3", TokenCategory::Number),
        ]
    );
    assert_eq!(
        kinds(&tokenize("0x1F")),
        vec![("0", TokenCategory::Number), ("x1F", TokenCategory::Identifier)]
    );
}

#[test]
fn test_longest_operator_match() {
    let tokens = tokenize("a <<= b;");

    assert_eq!(
        kinds(&tokens),
        vec![
            ("a", TokenCategory::Identifier),
            ("<<=", TokenCategory::Operator),
            ("b", TokenCategory::Identifier),
            (";", TokenCategory::Punctuation),
        ]
    );
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / % = == != < > <= >= ++ -- && || ! & | ^ ~ << >> += -= *= /= %= &= |= ^= <<= >>= -> . ::";
    let tokens = tokenize(source);

    let expected = source.split(' ').collect::<Vec<&str>>();
    let texts = tokens.iter().map(|token| token.text()).collect::<Vec<&str>>();
    assert_eq!(texts, expected);
    assert!(tokens.iter().all(|token| token.category() == TokenCategory::Operator));
}

#[test]
fn test_adjacent_operators_split_greedily() {
    let texts = tokenize("a+++b")
        .iter()
        .map(|token| token.text().to_string())
        .collect::<Vec<String>>();
    assert_eq!(texts, vec!["a", "++", "+", "b"]);

    let texts = tokenize("x>>=1")
        .iter()
        .map(|token| token.text().to_string())
        .collect::<Vec<String>>();
    assert_eq!(texts, vec!["x", ">>=", "1"]);
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("( ) { } [ ] ; : , ? #");

    assert_eq!(tokens.len(), 11);
    assert!(tokens.iter().all(|token| token.category() == TokenCategory::Punctuation));
}

#[test]
fn test_dot_is_an_operator() {
    let tokens = tokenize("a.b");

    assert_eq!(
        kinds(&tokens),
        vec![
            ("a", TokenCategory::Identifier),
            (".", TokenCategory::Operator),
            ("b", TokenCategory::Identifier),
        ]
    );
    assert_eq!(tokens.counts().get(TokenCategory::Punctuation), 0);
}

#[test]
fn test_scope_and_ternary() {
    assert_eq!(
        kinds(&tokenize("std::cout")),
        vec![
            ("std", TokenCategory::Identifier),
            ("::", TokenCategory::Operator),
            ("cout", TokenCategory::Identifier),
        ]
    );
    assert_eq!(
        kinds(&tokenize("x ? y : z")),
        vec![
            ("x", TokenCategory::Identifier),
            ("?", TokenCategory::Punctuation),
            ("y", TokenCategory::Identifier),
            (":", TokenCategory::Punctuation),
            ("z", TokenCategory::Identifier),
        ]
    );
}

#[test]
fn test_tokenize_include_directive() {
    let tokens = tokenize("#include <iostream>");

    assert_eq!(
        kinds(&tokens),
        vec![
            ("#", TokenCategory::Punctuation),
            ("include", TokenCategory::Identifier),
            ("<", TokenCategory::Operator),
            ("iostream", TokenCategory::Identifier),
            (">", TokenCategory::Operator),
        ]
    );
}

#[test]
fn test_unknown_fallback() {
    let tokens = tokenize("@ $x `");

    assert_eq!(
        kinds(&tokens),
        vec![
            ("@", TokenCategory::Unknown),
            ("$", TokenCategory::Unknown),
            ("x", TokenCategory::Identifier),
            ("`", TokenCategory::Unknown),
        ]
    );
    assert_eq!(tokens.counts().get(TokenCategory::Unknown), 3);
    assert_eq!(tokens.counts().get(TokenCategory::Identifier), 1);
    assert_eq!(tokens.counts().total(), 4);
}

#[test]
fn test_unknown_non_ascii_character() {
    let tokens = tokenize("é = \"ok\";");

    assert_eq!(tokens.tokens()[0].text(), "é");
    assert_eq!(tokens.tokens()[0].category(), TokenCategory::Unknown);
    // The double quotes are not recognised either.
    assert_eq!(tokens.counts().get(TokenCategory::Unknown), 3);
}

#[test]
fn test_line_tracking() {
    let tokens = tokenize("int a;\n\nint b;\r\n  return\t0;");
    let lines = tokens.iter().map(|token| token.line()).collect::<Vec<usize>>();

    assert_eq!(lines, vec![1, 1, 1, 3, 3, 3, 4, 4, 4]);
}

#[test]
fn test_all_whitespace_is_skipped() {
    let tokens = tokenize(" \t\r\n\x0B\x0C x \x0C");

    assert_eq!(kinds(&tokens), vec![("x", TokenCategory::Identifier)]);
    assert_eq!(tokens.tokens()[0].line(), 2);
}

#[test]
fn test_tokenize_empty() {
    let tokens = tokenize("");

    assert!(tokens.is_empty());
    assert!(tokens.counts().iter().all(|(_, count)| count == 0));
}

#[test]
fn test_counts_match_token_count() {
    let tokens = tokenize("for (int i = 0; i < 10; ++i) { sum += i * 2.5; } @");

    assert_eq!(tokens.counts().total(), tokens.len());
    for category in TokenCategory::ALL {
        let counted = tokens.iter().filter(|token| token.category() == category).count();
        assert_eq!(tokens.counts().get(category), counted);
    }
}

#[test]
fn test_tokenize_is_deterministic() {
    let source = "class A { public: int x = 1.5; }; // done";

    assert_eq!(tokenize(source), tokenize(source));
}

#[test]
fn test_category_display() {
    assert_eq!(TokenCategory::Keyword.to_string(), "KEYWORD");
    assert_eq!(TokenCategory::Punctuation.to_string(), "PUNCTUATION");
    assert_eq!(TokenCategory::Unknown.plural(), "Unknowns");
}

#[test]
fn test_strip_line_comment_keeps_newline() {
    assert_eq!(
        strip_comments("int x; // set later\nx = 5;"),
        "int x; \nx = 5;"
    );
}

#[test]
fn test_strip_block_comment_keeps_newlines() {
    assert_eq!(
        strip_comments("int a;\n/* multi\nline */\nint b;"),
        "int a;\n\n\nint b;"
    );
}

#[test]
fn test_block_comment_is_not_nested() {
    assert_eq!(strip_comments("/* a /* b */ c */"), " c */");
}

#[test]
fn test_first_comment_opener_wins() {
    assert_eq!(strip_comments("/* // */x"), "x");
    assert_eq!(strip_comments("// /* \nx */"), "\nx */");
}

#[test]
fn test_strip_leaves_division_alone() {
    assert_eq!(strip_comments("a / b * c /= d"), "a / b * c /= d");
}

#[test]
fn test_unterminated_block_comment_runs_to_end() {
    let stripped = strip_comments_with_report("int a;\n/* open\nint b;");

    assert_eq!(stripped.text, "int a;\n\n");
    assert_eq!(stripped.unterminated_block, Some(2));

    let stripped = strip_comments_with_report("/*/ x");
    assert_eq!(stripped.text, "");
    assert_eq!(stripped.unterminated_block, Some(1));
}

#[test]
fn test_terminated_block_comment_reports_nothing() {
    let stripped = strip_comments_with_report("/**/x/***/");

    assert_eq!(stripped.text, "x");
    assert_eq!(stripped.unterminated_block, None);
}
