//! Detokenizer for feature files
//!
//! Converts a token stream back into source text. Output is normalized rather than
//! byte-identical: indentation is written as spaces, keywords use their canonical spelling
//! with a single space before the value, and each token occupies its own line. Lexing the
//! output again yields the same tokens, which makes this handy for round-trip tests and for
//! printing token streams in a readable way.

use super::core::{Token, TokenType};
use super::keywords::keyword_for;

/// Trait for converting a token to the source line it stands for
pub trait ToGherkinString {
    fn to_gherkin_string(&self) -> String;
}

impl ToGherkinString for Token {
    fn to_gherkin_string(&self) -> String {
        let body = match self.token_type {
            TokenType::Eof => return String::new(),
            TokenType::NewLine => String::new(),
            TokenType::Text => self.value.clone(),
            TokenType::Comment => join_marker("#", &self.value),
            TokenType::TableRow => format!("| {}", self.value),
            keyword => join_marker(keyword_for(keyword).unwrap_or_default(), &self.value),
        };
        format!("{}{}", " ".repeat(self.indent), body)
    }
}

fn join_marker(marker: &str, value: &str) -> String {
    if value.is_empty() {
        marker.to_string()
    } else {
        format!("{} {}", marker, value)
    }
}

/// Rebuild source text from a token stream, one line per non-EOF token.
pub fn detokenize(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens.iter().filter(|t| !t.is_eof()) {
        out.push_str(&token.to_gherkin_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lines() {
        let feature = Token::new(TokenType::Feature, "gherkin lexer", 0, 0);
        assert_eq!(feature.to_gherkin_string(), "Feature: gherkin lexer");

        let background = Token::new(TokenType::Background, "", 1, 2);
        assert_eq!(background.to_gherkin_string(), "  Background:");

        let step = Token::new(TokenType::And, "another step", 2, 4);
        assert_eq!(step.to_gherkin_string(), "    And another step");
    }

    #[test]
    fn test_markers() {
        let comment = Token::new(TokenType::Comment, "an important comment", 0, 2);
        assert_eq!(comment.to_gherkin_string(), "  # an important comment");

        let empty_comment = Token::new(TokenType::Comment, "", 0, 0);
        assert_eq!(empty_comment.to_gherkin_string(), "#");

        let row = Token::new(TokenType::TableRow, "name | lastname | num |", 0, 6);
        assert_eq!(row.to_gherkin_string(), "      | name | lastname | num |");
    }

    #[test]
    fn test_detokenize_skips_eof() {
        let tokens = vec![
            Token::new(TokenType::Scenario, "tokenize", 0, 0),
            Token::new(TokenType::NewLine, "", 1, 0),
            Token::new(TokenType::Text, "free text", 2, 2),
            Token::eof(3),
        ];
        assert_eq!(detokenize(&tokens), "Scenario: tokenize\n\n  free text\n");
    }
}
