//! Testing utilities
//!
//!     Feature-file fixtures live under `samples/` at the crate root, numbered by topic.
//!     Tests load them through [samples::Samples] instead of embedding ad-hoc strings, so a
//!     fixture is written and checked once and reused everywhere:
//!
//!     ```rust,ignore
//!     use gherkin_lexer::gherkin::testing::samples::Samples;
//!
//!     let tokens = Samples::step_table().tokenize().unwrap();
//!     ```
//!
//!     [factories] has small helpers for building expected token vectors.

pub mod factories;
pub mod samples;
