//! Maps tokens to rows of the lexical-components table.

pub mod classifier;

#[cfg(test)]
mod tests;
