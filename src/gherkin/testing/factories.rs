//! Factories for expected tokens in tests

use crate::gherkin::token::{Token, TokenType};

pub fn mk_token(token_type: TokenType, value: &str, line: usize, indent: usize) -> Token {
    Token::new(token_type, value, line, indent)
}

/// Build tokens from `(type, value, line, indent)` tuples.
pub fn mk_tokens(specs: &[(TokenType, &str, usize, usize)]) -> Vec<Token> {
    specs
        .iter()
        .map(|(token_type, value, line, indent)| mk_token(*token_type, value, *line, *indent))
        .collect()
}

pub fn token_types(tokens: &[Token]) -> Vec<TokenType> {
    tokens.iter().map(|t| t.token_type).collect()
}

pub fn token_indents(tokens: &[Token]) -> Vec<usize> {
    tokens.iter().map(|t| t.indent).collect()
}
