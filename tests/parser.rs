//! Parser structure and error tests.

use paws_rs::{Error, Expr, ParseErrorKind, Span, parse, parse_str};

fn parse_kind(input: &str) -> ParseErrorKind {
    match parse_str(input).expect_err("parse should fail") {
        Error::Parse(e) => e.kind,
        Error::Lex(e) => panic!("expected parse error, got lex error: {e}"),
    }
}

// -----------------------------------------------------------
// Structure.
// -----------------------------------------------------------

#[test]
fn single_bare_name_program() {
    let ast = parse_str("hello").expect("parse failed");
    assert_eq!(ast, Expr::scope([Expr::name("hello")]));
}

#[test]
fn three_adjacent_names_in_order() {
    let ast = parse_str("a b c").expect("parse failed");
    assert_eq!(
        ast,
        Expr::scope([Expr::juxtaposition([
            Expr::name("a"),
            Expr::name("b"),
            Expr::name("c"),
        ])])
    );
}

#[test]
fn braced_scope_items_in_source_order() {
    let ast = parse_str("{ a\nb }").expect("parse failed");
    assert_eq!(
        ast,
        Expr::scope([Expr::scope([Expr::name("a"), Expr::name("b")])])
    );
}

#[test]
fn parenthesized_juxtaposition_is_sole_item() {
    let ast = parse_str("(a b)").expect("parse failed");
    assert_eq!(
        ast,
        Expr::scope([Expr::juxtaposition([Expr::name("a"), Expr::name("b")])])
    );
}

#[test]
fn deep_brace_nesting() {
    let ast = parse_str("{{{a}}}").expect("parse failed");
    assert_eq!(
        ast,
        Expr::scope([Expr::scope([Expr::scope([Expr::scope([Expr::name(
            "a"
        )])])])])
    );
}

#[test]
fn mixed_term_kinds_in_one_juxtaposition() {
    let ast = parse_str("a {b} (c d) e").expect("parse failed");
    assert_eq!(
        ast,
        Expr::scope([Expr::juxtaposition([
            Expr::name("a"),
            Expr::scope([Expr::name("b")]),
            Expr::juxtaposition([Expr::name("c"), Expr::name("d")]),
            Expr::name("e"),
        ])])
    );
}

#[test]
fn multi_line_program() {
    let ast = parse_str("a b\nc\nd e f").expect("parse failed");
    assert_eq!(
        ast,
        Expr::scope([
            Expr::juxtaposition([Expr::name("a"), Expr::name("b")]),
            Expr::name("c"),
            Expr::juxtaposition([Expr::name("d"), Expr::name("e"), Expr::name("f")]),
        ])
    );
}

#[test]
fn blank_lines_between_expressions_are_separators() {
    let ast = parse_str("a\n\nb\n\n\nc").expect("parse failed");
    assert_eq!(
        ast,
        Expr::scope([Expr::name("a"), Expr::name("b"), Expr::name("c")])
    );
}

#[test]
fn quoted_and_bare_names_mix() {
    let ast = parse_str("say \"hello world\" twice").expect("parse failed");
    assert_eq!(
        ast,
        Expr::scope([Expr::juxtaposition([
            Expr::name("say"),
            Expr::name("hello world"),
            Expr::name("twice"),
        ])])
    );
}

// -----------------------------------------------------------
// Errors.
// -----------------------------------------------------------

#[test]
fn empty_braced_scope() {
    assert_eq!(parse_kind("{}"), ParseErrorKind::ExpectedExpression);
}

#[test]
fn empty_input() {
    assert_eq!(parse_kind(""), ParseErrorKind::ExpectedExpression);
}

#[test]
fn scope_of_blank_lines() {
    assert_eq!(parse_kind("{\n\n}"), ParseErrorKind::ExpectedExpression);
}

#[test]
fn unclosed_scope_reports_missing_terminator() {
    assert_eq!(
        parse_kind("{ a"),
        ParseErrorKind::ExpectedNewlineOrCloseBrace { found: None }
    );
}

#[test]
fn unclosed_group() {
    assert_eq!(
        parse_kind("(a"),
        ParseErrorKind::ExpectedCloseParen { found: None }
    );
}

#[test]
fn group_must_contain_an_expression() {
    assert_eq!(parse_kind("()"), ParseErrorKind::ExpectedExpression);
}

#[test]
fn stray_close_paren_after_top_level_expression() {
    assert_eq!(
        parse_kind("a )"),
        ParseErrorKind::ExpectedNewlineOrEnd {
            found: Some(")".to_string())
        }
    );
}

#[test]
fn unterminated_quote_is_a_lex_error() {
    match parse(b"\"abc").expect_err("parse should fail") {
        Error::Lex(e) => {
            assert_eq!(e.kind, paws_rs::LexErrorKind::UnterminatedString);
        }
        Error::Parse(e) => panic!("expected lex error, got parse error: {e}"),
    }
}

#[test]
fn no_partial_tree_on_failure() {
    // The first violation is terminal even with valid prefix lines.
    assert!(parse_str("a\nb\n{ c\nd").is_err());
}

#[test]
fn error_spans_point_at_the_offending_token() {
    match parse_str("aa {").expect_err("parse should fail") {
        // `{` opens a scope whose body hits end of input.
        Error::Parse(e) => {
            assert_eq!(e.kind, ParseErrorKind::ExpectedExpression);
            assert_eq!(e.span, Span { line: 1, column: 5 });
        }
        Error::Lex(e) => panic!("expected parse error, got lex error: {e}"),
    }
}

#[test]
fn error_messages_name_the_expected_construct() {
    let err = parse_str("{ a").expect_err("parse should fail");
    assert_eq!(err.to_string(), "expected newline or '}' at line 1, column 4");

    let err = parse_str("a }").expect_err("parse should fail");
    assert_eq!(
        err.to_string(),
        "expected newline or end of input, got '}' at line 1, column 3"
    );
}
