//! Output formats for token streams
//!
//! Renders a lexed token stream for inspection:
//!
//! - `token-simple`: one token per line, `LINE:INDENT TYPE "value"`
//! - `token-json`: pretty-printed JSON array
//! - `token-yaml`: YAML sequence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gherkin::token::Token;

/// Supported token output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenFormat {
    #[default]
    TokenSimple,
    TokenJson,
    TokenYaml,
}

impl TokenFormat {
    pub const ALL: [TokenFormat; 3] = [
        TokenFormat::TokenSimple,
        TokenFormat::TokenJson,
        TokenFormat::TokenYaml,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TokenFormat::TokenSimple => "token-simple",
            TokenFormat::TokenJson => "token-json",
            TokenFormat::TokenYaml => "token-yaml",
        }
    }
}

impl fmt::Display for TokenFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| FormatError::UnknownFormat(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unknown format '{0}' (available: token-simple, token-json, token-yaml)")]
    UnknownFormat(String),

    #[error("failed to serialize tokens as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize tokens as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Render `tokens` in the requested format.
pub fn format_tokens(tokens: &[Token], format: TokenFormat) -> Result<String, FormatError> {
    match format {
        TokenFormat::TokenSimple => Ok(to_simple_string(tokens)),
        TokenFormat::TokenJson => Ok(serde_json::to_string_pretty(tokens)?),
        TokenFormat::TokenYaml => Ok(serde_yaml::to_string(tokens)?),
    }
}

fn to_simple_string(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| format!("{}\n", token))
        .collect()
}
