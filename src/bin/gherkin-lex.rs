//! Command-line interface for gherkin-lexer
//! This binary lexes a feature file and prints the token stream, for inspecting what a
//! parser will receive.
//!
//! Usage:
//!   gherkin-lex `<path>` [--format `<format>`] [--config `<file>`]
//!
//! `<path>` may be `-` to read from stdin. Set `RUST_LOG=gherkin_lexer=trace` to log every
//! emitted token on stderr.

use std::fs::File;
use std::io::{self, BufReader, Read};

use clap::{Arg, Command};
use gherkin_lexer::gherkin::config::{GherkinConfig, Loader};
use gherkin_lexer::gherkin::formats::{format_tokens, TokenFormat};
use gherkin_lexer::gherkin::lexing::Lexer;
use gherkin_lexer::gherkin::token::Token;
use tracing_subscriber::EnvFilter;

/// Picked up from the working directory when `--config` is not given.
const LOCAL_CONFIG: &str = "gherkin-lexer.toml";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let matches = Command::new("gherkin-lex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lex a Gherkin feature file and print its tokens")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the feature file, or '-' for stdin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: token-simple, token-json or token-yaml"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let format = matches.get_one::<String>("format").map(|name| {
        name.parse::<TokenFormat>().unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        })
    });
    let config = load_config(matches.get_one::<String>("config"), format);

    let tokens = lex_path(path, &config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let output = format_tokens(&tokens, config.output.format).unwrap_or_else(|e| {
        eprintln!("Error formatting tokens: {}", e);
        std::process::exit(1);
    });
    print!("{}", output);
}

fn load_config(path: Option<&String>, format: Option<TokenFormat>) -> GherkinConfig {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(LOCAL_CONFIG),
    };
    let loader = match format {
        Some(format) => loader.set_override("output.format", format.name()),
        None => Ok(loader),
    };
    loader.and_then(Loader::build).unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    })
}

fn lex_path(path: &str, config: &GherkinConfig) -> Result<Vec<Token>, Box<dyn std::error::Error>> {
    let reader: Box<dyn Read> = if path == "-" {
        Box::new(io::stdin())
    } else {
        Box::new(File::open(path).map_err(|e| format!("cannot open {}: {}", path, e))?)
    };
    let lexer = Lexer::with_config(BufReader::new(reader), config.lexer.clone());
    Ok(lexer.collect::<Result<Vec<_>, _>>()?)
}
