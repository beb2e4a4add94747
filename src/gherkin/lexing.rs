//! Lexer
//!
//!     This module turns feature-file text into a flat stream of line tokens.
//!
//! The Lexing Pipeline
//!
//!     Every physical line goes through the same three steps:
//!         1. Line reading. See [line_reader](line_reader). Lines are numbered from zero and
//!            their terminators removed.
//!         2. Line classification. See [line_classification](line_classification). The
//!            indent is measured, the content trimmed and the token type picked from the
//!            line's leading marker or keyword.
//!         3. Token emission. See [lexer](lexer). The classification is stamped with its line
//!            number and handed to the caller, or EOF is produced once input runs out.
//!
//!     Nothing is merged: a narrative block of three lines is three TEXT tokens and a table
//!     of three rows is three TABLE_ROW tokens. Grouping them is up to the parser, which can
//!     use the indent of each token to work out nesting.
//!
//! Lexical Fallback
//!
//!     The lexer does not fail on malformed content. A line that looks almost like a keyword
//!     or a table row but isn't one (`Feature` without colon, `| open row`) is TEXT. The only
//!     errors come from reading the input.

pub mod common;
pub mod lexer;
pub mod line_classification;
pub mod line_reader;

pub use common::LexError;
pub use lexer::Lexer;
pub use line_classification::{classify_line, measure_indent, Classification};
pub use line_reader::{LineReader, SourceLine};

use crate::gherkin::config::LexerConfig;
use crate::gherkin::token::Token;

/// Lex a whole source string with the default configuration.
///
/// The returned vector always ends with exactly one EOF token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with_config(source, LexerConfig::default())
}

pub fn tokenize_with_config(source: &str, config: LexerConfig) -> Result<Vec<Token>, LexError> {
    Lexer::with_config(source.as_bytes(), config).collect()
}
