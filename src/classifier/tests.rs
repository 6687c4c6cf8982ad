use super::classifier::{classify, classify_token, Category, Row, NO_ATTRIBUTE, TABLE_ENTRY_ATTRIBUTE};
use crate::lexer::{lexer::tokenize, tokens::TokenKind};

fn row(lexeme: &str, component: &str, attribute: &str) -> Row {
    Row {
        lexeme: lexeme.to_string(),
        component: component.to_string(),
        attribute: attribute.to_string(),
    }
}

fn rows(source: &str) -> Vec<Row> {
    classify(&tokenize(source, None).unwrap())
}

#[test]
fn test_every_kind_has_a_category() {
    let keywords = TokenKind::ALL
        .iter()
        .filter(|kind| Category::of(**kind) == Category::Keyword)
        .count();
    let operators = TokenKind::ALL
        .iter()
        .filter(|kind| Category::of(**kind) == Category::Operator)
        .count();
    let delimiters = TokenKind::ALL
        .iter()
        .filter(|kind| Category::of(**kind) == Category::Delimiter)
        .count();

    assert_eq!(keywords, 10);
    assert_eq!(operators, 14);
    assert_eq!(delimiters, 6);
}

#[test]
fn test_keyword_rows() {
    assert_eq!(
        rows("#include <iostream> using int main"),
        vec![
            row("#include <iostream>", "include", "-"),
            row("using", "using", "-"),
            row("int", "int", "-"),
            row("main", "main", "-"),
        ]
    );
}

#[test]
fn test_literal_rows() {
    assert_eq!(
        rows(r#"x 42 3.14 "hi""#),
        vec![
            row("x", "id", TABLE_ENTRY_ATTRIBUTE),
            row("42", "num", TABLE_ENTRY_ATTRIBUTE),
            row("3.14", "float", TABLE_ENTRY_ATTRIBUTE),
            row(r#""hi""#, "string_literal", NO_ATTRIBUTE),
        ]
    );
}

#[test]
fn test_operator_rows_carry_kind_name() {
    assert_eq!(
        rows("<< >= % - /"),
        vec![
            row("<<", "oprel", "STREAM_OUT_OP"),
            row(">=", "oprel", "GREATEREQUAL"),
            row("%", "oprel", "MODULO"),
            row("-", "oprel", "MINUS"),
            row("/", "oprel", "DIVIDE"),
        ]
    );
}

#[test]
fn test_delimiter_rows_carry_kind_name() {
    assert_eq!(
        rows("( ) { } ; ,"),
        vec![
            row("(", "delimiter", "LPAREN"),
            row(")", "delimiter", "RPAREN"),
            row("{", "delimiter", "LBRACE"),
            row("}", "delimiter", "RBRACE"),
            row(";", "delimiter", "SEMICOLON"),
            row(",", "delimiter", "COMMA"),
        ]
    );
}

#[test]
fn test_rows_follow_token_order() {
    let tokens = tokenize("return x + 1;", None).unwrap();
    let classified = classify(&tokens);

    assert_eq!(classified.len(), tokens.len());
    for (token, row) in tokens.iter().zip(&classified) {
        assert_eq!(row, &classify_token(token));
        assert_eq!(row.lexeme, token.value);
    }
}

#[test]
fn test_classify_empty() {
    assert!(classify(&[]).is_empty());
}

#[test]
fn test_row_cells() {
    let entry = row("x", "id", TABLE_ENTRY_ATTRIBUTE);

    assert_eq!(entry.cells(), ["x", "id", "pointer to table entry"]);
}

#[test]
fn test_category_labels() {
    assert_eq!(Category::Operator.to_string(), "oprel");
    assert_eq!(Category::StringLiteral.label(), "string_literal");
    assert_eq!(Category::of(TokenKind::Include), Category::Keyword);
}

#[test]
fn test_keyword_rows_use_keyword_name() {
    let classified = rows("return");

    assert_eq!(classified[0].component, "return");
    assert_ne!(classified[0].component, Category::Keyword.label());
}
