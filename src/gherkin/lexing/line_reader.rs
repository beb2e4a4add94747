//! Line Reader
//!
//! Pulls physical lines out of a buffered reader, numbering them from zero and stripping
//! the line terminator (`\n` or `\r\n`).

use std::io::BufRead;

use tracing::{debug, warn};

use super::common::LexError;

const BOM: char = '\u{feff}';

/// One physical line of input, terminator removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

/// Reads physical lines from `R`, one per call.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    next_line: usize,
    strip_bom: bool,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            next_line: 0,
            strip_bom: true,
            buf: Vec::new(),
        }
    }

    /// Whether a byte-order mark at the start of the stream is dropped.
    pub fn strip_bom(mut self, strip: bool) -> Self {
        self.strip_bom = strip;
        self
    }

    /// Number of lines handed out so far, which is also the number of the next line.
    pub fn lines_read(&self) -> usize {
        self.next_line
    }

    /// Read the next physical line.
    ///
    /// Returns `Ok(None)` once the input is exhausted. End of input is never an error.
    /// Bytes of a line read before an I/O error are kept, so a retry picks up where the
    /// failed read stopped.
    pub fn read_line(&mut self) -> Result<Option<SourceLine>, LexError> {
        let number = self.next_line;
        self.reader.read_until(b'\n', &mut self.buf).map_err(|err| {
            warn!(line = number, error = %err, "input read failed");
            LexError::Io(err)
        })?;
        if self.buf.is_empty() {
            return Ok(None);
        }
        self.next_line += 1;

        let mut bytes = std::mem::take(&mut self.buf);
        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }

        let mut text = String::from_utf8(bytes).map_err(|_| {
            warn!(line = number, "input line is not valid UTF-8");
            LexError::InvalidUtf8 { line: number }
        })?;

        if number == 0 && self.strip_bom && text.starts_with(BOM) {
            debug!("stripping byte-order mark");
            text.remove(0);
        }

        Ok(Some(SourceLine { number, text }))
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(input: &[u8]) -> Vec<SourceLine> {
        let mut reader = LineReader::new(input);
        let mut lines = Vec::new();
        while let Some(line) = reader.read_line().unwrap() {
            lines.push(line);
        }
        lines
    }

    fn texts(lines: &[SourceLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_numbers_lines_from_zero() {
        let lines = read_all(b"first\nsecond\nthird");
        assert_eq!(texts(&lines), vec!["first", "second", "third"]);
        let numbers: Vec<_> = lines.iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![0, 1, 2]);
    }

    #[test]
    fn test_strips_crlf() {
        let lines = read_all(b"one\r\ntwo\r\n");
        assert_eq!(texts(&lines), vec!["one", "two"]);
    }

    #[test]
    fn test_trailing_newline_does_not_add_a_line() {
        assert_eq!(read_all(b"one\n").len(), 1);
        assert_eq!(read_all(b"one\n\n").len(), 2);
        assert!(read_all(b"").is_empty());
    }

    #[test]
    fn test_keeps_lone_carriage_return_inside_line() {
        let lines = read_all(b"a\rb\n");
        assert_eq!(texts(&lines), vec!["a\rb"]);
    }

    #[test]
    fn test_strips_bom_on_first_line_only() {
        let lines = read_all("\u{feff}Feature: x\n\u{feff}y".as_bytes());
        assert_eq!(texts(&lines), vec!["Feature: x", "\u{feff}y"]);
    }

    #[test]
    fn test_bom_kept_when_disabled() {
        let mut reader = LineReader::new("\u{feff}x".as_bytes()).strip_bom(false);
        let line = reader.read_line().unwrap().unwrap();
        assert_eq!(line.text, "\u{feff}x");
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let mut reader = LineReader::new(&b"ok\n\xff\xfe\n"[..]);
        assert!(reader.read_line().unwrap().is_some());
        match reader.read_line() {
            Err(LexError::InvalidUtf8 { line }) => assert_eq!(line, 1),
            other => panic!("expected InvalidUtf8, got {:?}", other),
        }
    }

    #[test]
    fn test_exhaustion_is_repeatable() {
        let mut reader = LineReader::new(&b"x"[..]);
        assert!(reader.read_line().unwrap().is_some());
        assert!(reader.read_line().unwrap().is_none());
        assert!(reader.read_line().unwrap().is_none());
        assert_eq!(reader.lines_read(), 1);
    }
}
