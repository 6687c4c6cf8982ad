//! Lexical analysis of the supported C++ subset.
//!
//! This module turns source text into a stream of tokens. It handles:
//!
//! - The ordered, anchored pattern table (first match wins)
//! - Keywords, identifiers, numeric and string literals
//! - Operators and delimiters
//! - Whitespace, `//` and `/* */` comment skipping
//! - Token spans for error reporting

pub mod lexer;
pub mod tokens;
