//! Lexer state machine
//!
//!     The lexer pulls one physical line per call from its [LineReader], classifies it and
//!     emits a token. It has two states:
//!
//!         Reading      normal operation
//!         EofReached   terminal and sticky; every further call returns the same EOF token
//!                      without touching the reader again
//!
//!     An I/O failure is returned as an error and leaves the lexer in `Reading`, so it is
//!     never confused with the end of input.

use std::io::{BufRead, BufReader, Read};

use tracing::{debug, trace};

use super::common::LexError;
use super::line_classification::classify_line;
use super::line_reader::LineReader;
use crate::gherkin::config::LexerConfig;
use crate::gherkin::token::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Reading,
    EofReached(Token),
}

/// Pull-based lexer over a buffered reader.
#[derive(Debug)]
pub struct Lexer<R> {
    lines: LineReader<R>,
    config: LexerConfig,
    state: State,
    // Set once the iterator has yielded EOF or an error.
    exhausted: bool,
}

impl<'a> Lexer<&'a [u8]> {
    /// Lex an in-memory string.
    pub fn from_source(source: &'a str) -> Self {
        Lexer::new(source.as_bytes())
    }
}

impl<R: Read> Lexer<BufReader<R>> {
    /// Lex any unbuffered reader, such as a file or stdin.
    pub fn from_reader(reader: R) -> Self {
        Lexer::new(BufReader::new(reader))
    }
}

impl<R: BufRead> Lexer<R> {
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, LexerConfig::default())
    }

    pub fn with_config(reader: R, config: LexerConfig) -> Self {
        Self {
            lines: LineReader::new(reader).strip_bom(config.strip_bom),
            config,
            state: State::Reading,
            exhausted: false,
        }
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Whether the EOF token has been produced.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::EofReached(_))
    }

    /// Produce the next token.
    ///
    /// After the input is exhausted this returns the EOF token, on this call and on every
    /// call after it.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if let State::EofReached(eof) = &self.state {
            return Ok(eof.clone());
        }

        match self.lines.read_line()? {
            Some(line) => {
                let classified = classify_line(&line.text, &self.config);
                let token = Token::new(
                    classified.token_type,
                    classified.value,
                    line.number,
                    classified.indent,
                );
                trace!(%token, "emit");
                Ok(token)
            }
            None => {
                let eof = Token::eof(self.lines.lines_read());
                debug!(lines = eof.line, "end of input");
                self.state = State::EofReached(eof.clone());
                Ok(eof)
            }
        }
    }

    /// Hand back the underlying reader.
    pub fn into_inner(self) -> R {
        self.lines.into_inner()
    }
}

/// Yields every token including the final EOF, then stops. After an error nothing more is
/// yielded.
impl<R: BufRead> Iterator for Lexer<R> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.next_token();
        match &result {
            Ok(token) if token.is_eof() => self.exhausted = true,
            Err(_) => self.exhausted = true,
            Ok(_) => {}
        }
        Some(result)
    }
}

impl<R: BufRead> std::iter::FusedIterator for Lexer<R> {}
