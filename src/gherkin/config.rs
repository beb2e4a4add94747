//! Lexer and output settings.
//!
//! The baseline lives in `defaults/gherkin-lexer.default.toml` and is compiled in, so a
//! missing config file still yields a complete [`GherkinConfig`]. [`Loader`] stacks
//! `gherkin-lexer.toml` files and flag overrides over that baseline.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::gherkin::formats::TokenFormat;

const DEFAULT_TOML: &str = include_str!("../../defaults/gherkin-lexer.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GherkinConfig {
    pub lexer: LexerConfig,
    pub output: OutputConfig,
}

/// Knobs that change how lines are lexed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LexerConfig {
    /// Columns a leading tab counts for in a token's indent
    pub tab_width: usize,
    /// Drop a byte-order mark at the start of the input
    pub strip_bom: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            tab_width: 1,
            strip_bom: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    pub format: TokenFormat,
}

/// Builds a [`GherkinConfig`] from the embedded defaults plus any number of TOML layers.
///
/// Later layers win. Overrides set with [`Loader::set_override`] beat every file.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Add a `gherkin-lexer.toml` layer. `build` fails if the file does not exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Add a layer that is skipped when the file does not exist, e.g. a per-user config.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(file);
        self
    }

    /// Pin one dotted key such as `output.format`. The `gherkin-lex` binary maps
    /// `--format` onto this.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<GherkinConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The configuration the lexer uses when no file or flag changes it.
pub fn load_defaults() -> Result<GherkinConfig, ConfigError> {
    Loader::new().build()
}
