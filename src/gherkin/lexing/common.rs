//! Common lexer module
//!
//! Errors shared by the line reader and the lexer.

use thiserror::Error;

/// Errors that can occur while lexing.
///
/// Only the input layer can fail. Malformed feature-file content never produces an error;
/// it lexes as TEXT.
#[derive(Debug, Error)]
pub enum LexError {
    /// The underlying reader failed
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// A physical line is not valid UTF-8
    #[error("line {line} is not valid UTF-8")]
    InvalidUtf8 { line: usize },
}
