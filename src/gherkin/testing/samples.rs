//! Verified feature-file samples
//!
//! Each constructor names one file under `samples/`. Loading reads the file fresh, so edits
//! to a fixture are picked up without recompiling.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::gherkin::lexing::{tokenize, LexError};
use crate::gherkin::token::Token;

const SAMPLES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/samples");

/// A handle on one sample file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Samples {
    file_name: &'static str,
}

impl Samples {
    /// `Feature:` line followed by three lines of narrative
    pub fn feature_header() -> Self {
        Self::named("000-feature-header.feature")
    }

    /// Feature, background, comment and a scenario with Given/When/Then
    pub fn minimal_feature() -> Self {
        Self::named("010-minimal-feature.feature")
    }

    /// Background with a step carrying a three-row table
    pub fn step_table() -> Self {
        Self::named("020-step-table.feature")
    }

    /// And/But steps, tables and comments together
    pub fn continuation_steps() -> Self {
        Self::named("030-continuation-steps.feature")
    }

    /// Lines that almost look like keywords or rows and must lex as text
    pub fn malformed_lines() -> Self {
        Self::named("040-malformed-lines.feature")
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::feature_header(),
            Self::minimal_feature(),
            Self::step_table(),
            Self::continuation_steps(),
            Self::malformed_lines(),
        ]
    }

    fn named(file_name: &'static str) -> Self {
        Self { file_name }
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }

    pub fn path(&self) -> PathBuf {
        PathBuf::from(SAMPLES_DIR).join(self.file_name)
    }

    pub fn source(&self) -> io::Result<String> {
        fs::read_to_string(self.path())
    }

    /// Load and lex the sample.
    pub fn tokenize(&self) -> Result<Vec<Token>, LexError> {
        let source = self.source()?;
        tokenize(&source)
    }
}
