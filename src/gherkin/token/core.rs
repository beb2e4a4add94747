//! Core token definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of token types a feature file lexes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    /// `Feature:` header line
    Feature,
    /// `Background:` header line
    Background,
    /// `Scenario:` header line
    Scenario,
    /// `Given` step
    Given,
    /// `When` step
    When,
    /// `Then` step
    Then,
    /// `And` continuation step
    And,
    /// `But` continuation step
    But,
    /// Free text (narrative lines, or anything unrecognized)
    Text,
    /// `#` comment line
    Comment,
    /// `| ... |` table row
    TableRow,
    /// Blank line (empty or whitespace only)
    NewLine,
    /// End of input
    Eof,
}

impl TokenType {
    /// All token types, in declaration order.
    pub const ALL: [TokenType; 13] = [
        TokenType::Feature,
        TokenType::Background,
        TokenType::Scenario,
        TokenType::Given,
        TokenType::When,
        TokenType::Then,
        TokenType::And,
        TokenType::But,
        TokenType::Text,
        TokenType::Comment,
        TokenType::TableRow,
        TokenType::NewLine,
        TokenType::Eof,
    ];

    /// Upper-case name used in token dumps, e.g. `TABLE_ROW`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Feature => "FEATURE",
            TokenType::Background => "BACKGROUND",
            TokenType::Scenario => "SCENARIO",
            TokenType::Given => "GIVEN",
            TokenType::When => "WHEN",
            TokenType::Then => "THEN",
            TokenType::And => "AND",
            TokenType::But => "BUT",
            TokenType::Text => "TEXT",
            TokenType::Comment => "COMMENT",
            TokenType::TableRow => "TABLE_ROW",
            TokenType::NewLine => "NEW_LINE",
            TokenType::Eof => "EOF",
        }
    }

    /// Whether this is one of the header keywords (`Feature:`, `Background:`, `Scenario:`).
    pub fn is_header(&self) -> bool {
        matches!(
            self,
            TokenType::Feature | TokenType::Background | TokenType::Scenario
        )
    }

    /// Whether this is a step keyword, continuations included.
    pub fn is_step(&self) -> bool {
        matches!(
            self,
            TokenType::Given | TokenType::When | TokenType::Then | TokenType::And | TokenType::But
        )
    }

    /// Whether the line was introduced by a keyword from the keyword table.
    pub fn is_keyword(&self) -> bool {
        self.is_header() || self.is_step()
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One classified physical line.
///
/// Tokens are built by the lexer and never modified afterwards. `line` is the zero-based
/// physical line the token came from and `indent` the count of leading whitespace on it,
/// which the parser uses to infer nesting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub value: String,
    pub line: usize,
    pub indent: usize,
}

impl Token {
    pub fn new(token_type: TokenType, value: impl Into<String>, line: usize, indent: usize) -> Self {
        Self {
            token_type,
            value: value.into(),
            line,
            indent,
        }
    }

    /// The terminal token, placed after the last physical line.
    pub fn eof(line: usize) -> Self {
        Self::new(TokenType::Eof, String::new(), line, 0)
    }

    pub fn is_eof(&self) -> bool {
        self.token_type == TokenType::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} {:?}",
            self.line, self.indent, self.token_type, self.value
        )
    }
}
