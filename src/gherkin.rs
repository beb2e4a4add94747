//! Gherkin lexing
//!
//!     The crate is organized the same way the data flows through it:
//!
//!         - [token]: the token values and the keyword table.
//!         - [lexing]: the line reader, the line classifier and the lexer state machine.
//!         - [formats]: rendering token streams for inspection (simple, json, yaml).
//!         - [config]: layered configuration with embedded defaults.
//!         - [testing]: verified sample files and token factories for tests.

pub mod config;
pub mod formats;
pub mod lexing;
pub mod testing;
pub mod token;
