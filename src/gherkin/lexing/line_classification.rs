//! Line Classification
//!
//! Core classification logic for determining the token type of a single physical line.
//! Classification is a pure function of the line text and the lexer configuration, so it
//! can be tested without any I/O.

use crate::gherkin::config::LexerConfig;
use crate::gherkin::token::{LineHead, TokenType};

/// The result of classifying one line, before it is stamped with a line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub token_type: TokenType,
    pub value: String,
    pub indent: usize,
}

impl Classification {
    fn new(token_type: TokenType, value: &str, indent: usize) -> Self {
        Self {
            token_type,
            value: value.to_string(),
            indent,
        }
    }
}

/// Determine the token type of a line.
///
/// Classification follows this specific order (first match wins):
/// 1. Blank lines
/// 2. Comments (`#`)
/// 3. Table rows (`|` on both ends)
/// 4. Keyword lines, header keywords with their colon and step keywords followed by a
///    separator
/// 5. Default to text
pub fn classify_line(raw: &str, config: &LexerConfig) -> Classification {
    let indent = measure_indent(raw, config.tab_width);
    let content = raw.trim();

    if content.is_empty() {
        return Classification::new(TokenType::NewLine, "", indent);
    }

    match LineHead::scan(content) {
        Some((LineHead::Hash, rest)) => Classification::new(TokenType::Comment, rest.trim(), indent),
        Some((LineHead::Pipe, rest)) if is_table_row(content) => {
            Classification::new(TokenType::TableRow, rest.trim(), indent)
        }
        Some((head, rest)) => match head.keyword_type() {
            Some(token_type) if token_type.is_header() => {
                Classification::new(token_type, rest.trim(), indent)
            }
            Some(token_type) if is_step_separator(rest) => {
                let rest = rest.strip_prefix(':').unwrap_or(rest);
                Classification::new(token_type, rest.trim(), indent)
            }
            _ => Classification::new(TokenType::Text, content, indent),
        },
        None => Classification::new(TokenType::Text, content, indent),
    }
}

/// Count leading indentation: one per space, `tab_width` per tab.
pub fn measure_indent(raw: &str, tab_width: usize) -> usize {
    raw.chars()
        .map_while(|c| match c {
            ' ' => Some(1),
            '\t' => Some(tab_width),
            _ => None,
        })
        .sum()
}

/// Strict delimiters: the row must open and close with its own bar.
fn is_table_row(content: &str) -> bool {
    content.len() >= 2 && content.starts_with('|') && content.ends_with('|')
}

/// Step keywords must be followed by whitespace, a colon, or nothing at all.
fn is_step_separator(rest: &str) -> bool {
    match rest.chars().next() {
        None => true,
        Some(c) => c == ':' || c.is_whitespace(),
    }
}
