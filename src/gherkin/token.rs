//! Token types shared by the lexer, the formatters and downstream parsers.
//!
//!     Feature files are classified one physical line at a time, so there is a single token
//!     layer: each [Token] stands for one line of source. Its [TokenType] says what kind of
//!     line it was, its value carries the payload after the keyword or marker, and its line
//!     and indent locate it in the source.
//!
//! Keywords
//!
//!     The keyword table lives in [keywords]. Header keywords (`Feature:`, `Background:`,
//!     `Scenario:`) include their colon; step keywords (`Given`, `When`, `Then`, `And`,
//!     `But`) are bare words followed by a separator. `And` and `But` keep their own token
//!     types; resolving them to the step they continue is a parser concern.

pub mod core;
pub mod formatting;
pub mod keywords;

pub use core::{Token, TokenType};
pub use formatting::{detokenize, ToGherkinString};
pub use keywords::{LineHead, KEYWORDS};
