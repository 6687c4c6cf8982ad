//! Error types for lexical analysis.
//!
//! This module defines:
//!
//! - The error structure carrying a source position
//! - The lexical error variant and its tips

pub mod errors;

#[cfg(test)]
mod tests;
