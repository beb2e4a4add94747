//! Integration tests for the lexer using the sample feature files
//!
//! These tests pin down the token streams of the verified samples under `samples/`.

use gherkin_lexer::gherkin::formats::{format_tokens, TokenFormat};
use gherkin_lexer::gherkin::testing::factories::{mk_tokens, token_indents, token_types};
use gherkin_lexer::gherkin::testing::samples::Samples;
use gherkin_lexer::gherkin::token::TokenType::{self, *};

fn types_without_eof(types: Vec<TokenType>) -> Vec<TokenType> {
    types.into_iter().filter(|t| *t != Eof).collect()
}

#[test]
fn test_000_feature_header() {
    let tokens = Samples::feature_header().tokenize().unwrap();

    assert_eq!(
        tokens,
        mk_tokens(&[
            (Feature, "gherkin lexer", 0, 0),
            (Text, "in order to run features", 1, 2),
            (Text, "as gherkin lexer", 2, 2),
            (Text, "I need to be able to parse a feature", 3, 2),
            (Eof, "", 4, 0),
        ])
    );
}

#[test]
fn test_010_minimal_feature() {
    let tokens = Samples::minimal_feature().tokenize().unwrap();

    assert_eq!(
        types_without_eof(token_types(&tokens)),
        vec![
            Feature, Text, Text, Text, NewLine, Background, Given, NewLine, Comment, Scenario,
            Given, When, Then,
        ]
    );
    let comment = tokens.iter().find(|t| t.token_type == Comment).unwrap();
    assert_eq!(comment.value, "an important comment");
    assert_eq!(comment.indent, 2);
}

#[test]
fn test_020_step_table() {
    let tokens = Samples::step_table().tokenize().unwrap();

    assert_eq!(
        types_without_eof(token_types(&tokens)),
        vec![Background, Given, TableRow, TableRow, TableRow, Given]
    );
    assert_eq!(token_indents(&tokens)[..6], [2, 4, 6, 6, 6, 4]);
    assert_eq!(tokens[2].value, "name | lastname | num |");
    assert_eq!(tokens[3].value, "Jack | Sparrow  | 4   |");
}

#[test]
fn test_030_continuation_steps() {
    let tokens = Samples::continuation_steps().tokenize().unwrap();
    let output = format_tokens(&tokens, TokenFormat::TokenSimple).unwrap();

    insta::assert_snapshot!(output, @r###"
    0:0 COMMENT "language comments are plain comments here"
    1:0 FEATURE "continuation steps"
    2:2 TEXT "steps starting with And or But keep their own token type"
    3:0 NEW_LINE ""
    4:2 BACKGROUND ""
    5:4 GIVEN "a registered user"
    6:4 AND "the user is logged in"
    7:0 NEW_LINE ""
    8:2 SCENARIO "checkout"
    9:4 WHEN "the user adds an item:"
    10:6 TABLE_ROW "sku  | qty |"
    11:6 TABLE_ROW "A-01 | 2   |"
    12:4 THEN "the cart holds 2 items"
    13:4 BUT "the order is not placed"
    14:4 COMMENT ""
    15:4 AND "a receipt is not sent"
    16:0 EOF ""
    "###);
}

#[test]
fn test_040_malformed_lines_degrade_to_text() {
    let tokens = Samples::malformed_lines().tokenize().unwrap();

    assert_eq!(
        types_without_eof(token_types(&tokens)),
        vec![Text; 6]
    );
    assert_eq!(tokens[0].value, "Feature without a colon");
    assert_eq!(tokens[2].value, "| open row");
    assert_eq!(tokens[5].value, "|");
}

#[test]
fn test_every_sample_ends_with_one_eof() {
    for sample in Samples::all() {
        let tokens = sample.tokenize().unwrap();
        let eofs = tokens.iter().filter(|t| t.is_eof()).count();
        assert_eq!(eofs, 1, "{}", sample.file_name());
        assert!(tokens.last().unwrap().is_eof(), "{}", sample.file_name());
    }
}
