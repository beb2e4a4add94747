//! # gherkin-lexer
//!
//! A lexer for Gherkin-style feature files.
//!
//! Feature files are line oriented: every physical line becomes exactly one token, typed
//! by its leading keyword or marker and annotated with its source line and indentation.
//! Assembling those tokens into features, scenarios and steps is left to a parser.
//!
//! ## Testing
//!
//! For the sample files and token factories used across the test suite, see the
//! [testing module](gherkin::testing).

pub mod gherkin;
