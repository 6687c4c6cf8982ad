//! Rendering of the lexical-components table.
//!
//! - `table` - aligned console table with a row index
//! - `csv` - comma-separated export, no index column
//!
//! Both work on in-memory rows and never touch the filesystem.

pub mod csv;
pub mod table;


pub const HEADERS: [&str; 3] = ["Regular Expression", "Lexical Component", "Attribute Value"];
