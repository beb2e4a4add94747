//! Keyword table and line-head recognizer
//!
//! [KEYWORDS] is the single source of truth for keyword spelling. [LineHead] is the logos
//! recognizer run on the start of a trimmed line; its token attributes spell the same
//! prefixes, and the tests below keep the two in step.
use logos::Logos;

use super::core::TokenType;

/// Literal keyword prefixes and the token type each one introduces.
///
/// Header keywords carry their colon. Step keywords are bare and must be followed by a
/// separator, which the classifier checks.
pub const KEYWORDS: &[(&str, TokenType)] = &[
    ("Feature:", TokenType::Feature),
    ("Background:", TokenType::Background),
    ("Scenario:", TokenType::Scenario),
    ("Given", TokenType::Given),
    ("When", TokenType::When),
    ("Then", TokenType::Then),
    ("And", TokenType::And),
    ("But", TokenType::But),
];

/// The marker or keyword a trimmed line starts with.
///
/// Logos always takes the longest match, so `Background:` can never be cut short by a
/// shorter prefix.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineHead {
    #[token("#")]
    Hash,

    #[token("|")]
    Pipe,

    #[token("Feature:")]
    Feature,
    #[token("Background:")]
    Background,
    #[token("Scenario:")]
    Scenario,

    #[token("Given")]
    Given,
    #[token("When")]
    When,
    #[token("Then")]
    Then,
    #[token("And")]
    And,
    #[token("But")]
    But,
}

impl LineHead {
    /// Recognize the head of `content`, returning it with the text that follows it.
    ///
    /// Returns `None` when the line starts with anything else.
    pub fn scan(content: &str) -> Option<(LineHead, &str)> {
        let mut lexer = LineHead::lexer(content);
        match lexer.next() {
            Some(Ok(head)) => Some((head, lexer.remainder())),
            _ => None,
        }
    }

    /// Token type for keyword heads; markers have none.
    pub fn keyword_type(&self) -> Option<TokenType> {
        match self {
            LineHead::Hash | LineHead::Pipe => None,
            LineHead::Feature => Some(TokenType::Feature),
            LineHead::Background => Some(TokenType::Background),
            LineHead::Scenario => Some(TokenType::Scenario),
            LineHead::Given => Some(TokenType::Given),
            LineHead::When => Some(TokenType::When),
            LineHead::Then => Some(TokenType::Then),
            LineHead::And => Some(TokenType::And),
            LineHead::But => Some(TokenType::But),
        }
    }
}

/// Canonical spelling of the keyword that introduces `token_type`, if any.
pub fn keyword_for(token_type: TokenType) -> Option<&'static str> {
    KEYWORDS
        .iter()
        .find(|(_, ty)| *ty == token_type)
        .map(|(literal, _)| *literal)
}
