//! Tests for expression lexing
//!
//! Covers the token sequences produced for each selector form and the
//! syntax errors reported for malformed expressions.

use flowpath_engine::{
    ComparisonOp, Number, PathKey, QueryExpression, QueryPath, Scalar, Token, tokenize,
};

fn lex(expression: &str) -> Vec<Token> {
    tokenize(expression).expect("Failed to tokenize expression")
}

fn name(key: &str) -> PathKey {
    PathKey::Name(key.to_string())
}

#[test]
fn test_root_and_dot_keys() {
    assert_eq!(
        lex("$.store.books"),
        vec![
            Token::Root,
            Token::DotKey("store".to_string()),
            Token::DotKey("books".to_string()),
        ]
    );
}

#[test]
fn test_empty_and_bare_root() {
    assert!(lex("").is_empty());
    assert_eq!(lex("$"), vec![Token::Root]);
}

#[test]
fn test_bare_key_without_root() {
    assert_eq!(lex("title"), vec![Token::DotKey("title".to_string())]);
}

#[test]
fn test_quoted_bracket_keys() {
    assert_eq!(
        lex("$['store'][\"books\"]"),
        vec![
            Token::Root,
            Token::BracketKeys(vec![name("store")]),
            Token::BracketKeys(vec![name("books")]),
        ]
    );
}

#[test]
fn test_multiple_bracket_keys() {
    assert_eq!(
        lex("$['a', 'b']"),
        vec![Token::Root, Token::BracketKeys(vec![name("a"), name("b")])]
    );
}

#[test]
fn test_quoted_key_with_special_characters() {
    assert_eq!(
        lex("$['http://www.w3.org/2000/01/rdf-schema#label']"),
        vec![
            Token::Root,
            Token::BracketKeys(vec![name("http://www.w3.org/2000/01/rdf-schema#label")]),
        ]
    );
    assert_eq!(
        lex(r"$['it\'s']"),
        vec![Token::Root, Token::BracketKeys(vec![name("it's")])]
    );
}

#[test]
fn test_index_tokens() {
    assert_eq!(lex("$[0]"), vec![Token::Root, Token::Index(vec![0])]);
    assert_eq!(lex("$[-1]"), vec![Token::Root, Token::Index(vec![-1])]);
    assert_eq!(lex("$[0, 2]"), vec![Token::Root, Token::Index(vec![0, 2])]);
}

#[test]
fn test_slice_tokens() {
    assert_eq!(
        lex("$[:]"),
        vec![Token::Root, Token::Slice { start: None, end: None, step: None }]
    );
    assert_eq!(
        lex("$[1::2]"),
        vec![Token::Root, Token::Slice { start: Some(1), end: None, step: Some(2) }]
    );
    assert_eq!(
        lex("$[-1:]"),
        vec![Token::Root, Token::Slice { start: Some(-1), end: None, step: None }]
    );
    assert_eq!(
        lex("$[:-2]"),
        vec![Token::Root, Token::Slice { start: None, end: Some(-2), step: None }]
    );
}

#[test]
fn test_wildcard_forms() {
    assert_eq!(lex("$.*"), vec![Token::Root, Token::Wildcard]);
    assert_eq!(lex("$[*]"), vec![Token::Root, Token::Wildcard]);
}

#[test]
fn test_recursive_descent_forms() {
    assert_eq!(
        lex("$..author"),
        vec![Token::Root, Token::RecursiveDescent(Some("author".to_string()))]
    );
    assert_eq!(
        lex("$..*"),
        vec![Token::Root, Token::RecursiveDescent(None), Token::Wildcard]
    );
    assert_eq!(
        lex("$..[0]"),
        vec![Token::Root, Token::RecursiveDescent(None), Token::Index(vec![0])]
    );
    assert_eq!(lex("$.."), vec![Token::Root, Token::RecursiveDescent(None)]);
}

#[test]
fn test_query_match_comparison() {
    assert_eq!(
        lex("$.books[?(@.price < 10)]"),
        vec![
            Token::Root,
            Token::DotKey("books".to_string()),
            Token::QueryMatch(QueryExpression::Compare {
                path: QueryPath::new(vec![name("price")]),
                op: ComparisonOp::Less,
                literal: Scalar::Number(Number::Int(10)),
            }),
        ]
    );
}

#[test]
fn test_query_match_exists() {
    assert_eq!(
        lex("$[?(@.isbn)]"),
        vec![
            Token::Root,
            Token::QueryMatch(QueryExpression::Exists(QueryPath::new(vec![name("isbn")]))),
        ]
    );
}

#[test]
fn test_query_match_bracket_path_and_single_equals() {
    assert_eq!(
        lex("$[?(@['@language']='en')]"),
        vec![
            Token::Root,
            Token::QueryMatch(QueryExpression::Compare {
                path: QueryPath::new(vec![name("@language")]),
                op: ComparisonOp::Equal,
                literal: Scalar::String("en".to_string()),
            }),
        ]
    );
}

#[test]
fn test_query_literals() {
    let literal = |expression: &str| match lex(expression).pop() {
        Some(Token::QueryMatch(QueryExpression::Compare { literal, .. })) => literal,
        other => panic!("expected comparison token, got {other:?}"),
    };

    assert_eq!(literal("$[?(@.a == 'x')]"), Scalar::String("x".to_string()));
    assert_eq!(literal("$[?(@.a == \"x\")]"), Scalar::String("x".to_string()));
    assert_eq!(literal("$[?(@.a >= 2.5)]"), Scalar::Number(Number::Float(2.5)));
    assert_eq!(literal("$[?(@.a != -3)]"), Scalar::Number(Number::Int(-3)));
    assert_eq!(literal("$[?(@.a == true)]"), Scalar::Bool(true));
    assert_eq!(literal("$[?(@.a == null)]"), Scalar::Null);
}

#[test]
fn test_query_script() {
    assert_eq!(
        lex("$.books[(@.length-1)]"),
        vec![
            Token::Root,
            Token::DotKey("books".to_string()),
            Token::QueryScript("@.length-1".to_string()),
        ]
    );
}

#[test]
fn test_whitespace_is_ignored_around_segments() {
    assert_eq!(lex(" $ .a [ 0 ] "), lex("$.a[0]"));
}

#[test]
fn test_display_renders_bracket_form() {
    let rendered: Vec<String> = lex("$.a..b[1:3][?(@.c == 'd')]")
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(rendered, vec!["$", "['a']", "..['b']", "[1:3]", "[?(@['c'] == \"d\")]"]);
}

#[test]
fn test_unbalanced_brackets_are_errors() {
    for expression in ["$[0", "$.a]", "$[?(@.a == 1]", "$[(@.length-1]"] {
        let err = tokenize(expression).expect_err("Expected syntax error");
        assert!(err.is_syntax(), "{expression}: {err}");
        assert!(err.position.is_some(), "{expression}: missing position");
    }
}

#[test]
fn test_unterminated_quotes_are_errors() {
    for expression in ["$['abc]", "$[\"abc]", "$[?(@.a == 'x)]"] {
        let err = tokenize(expression).expect_err("Expected syntax error");
        assert!(err.is_syntax(), "{expression}: {err}");
    }
}

#[test]
fn test_malformed_expressions_are_errors() {
    for expression in [
        "$[]",
        "$[1:2:3:4]",
        "$[a:b]",
        "$[::0]",
        "$[::-1]",
        "$[()]",
        "$[?(price < 10)]",
        "$[?(@.price <> 10)]",
        "$[?(@.price < )]",
        "$...a",
        "$.",
        "$#",
        "$['a'b]",
        "$[?(@.a&&@.b)]",
        "$[?(@.a||@.b)]",
        "$[?(@.a && @.b)]",
        "$[?(@.a,@.b)]",
        "@.a",
        "@",
    ] {
        let err = tokenize(expression).expect_err("Expected syntax error");
        assert!(err.is_syntax(), "{expression}: {err}");
    }
}

#[test]
fn test_error_message_names_expression() {
    let err = tokenize("$[0").expect_err("Expected syntax error");
    assert!(err.to_string().contains("$[0"), "{err}");
}
