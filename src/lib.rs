#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::{
    classifier::classifier::{classify, Row},
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
};

pub mod classifier;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod report;

pub use regex;

/// Byte offset into a source plus the label of the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "offset {} in {}", self.0, self.1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Scans and classifies `source` in one go.
pub fn analyze(source: &str, file: Option<String>) -> Result<Vec<Row>, Error> {
    let tokens = tokenize(source, file)?;
    Ok(classify(&tokens))
}

/// Returns the 1-based line number, the line text without its terminator and
/// the 0-based character column of `position`.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= source.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let column = line.get(..pos - start)?.chars().count();
            let text = line.trim_end_matches(['\n', '\r']).to_string();
            return Some((index + 1, text, column));
        }

        start = end;
    }

    None
}

/// Formats a lexical error against the source it was raised on.
pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: UnexpectedCharacter
        -> input_code.txt
          |
        1 | int x = 5 @ 3;
          | ----------^
    */

    let position = error.get_position();
    let mut lines = Vec::new();

    if let ErrorTip::None = error.get_tip() {
        lines.push(format!("Error: {}", error.get_error_name()));
    } else {
        lines.push(format!("Error: {} ({})", error.get_error_name(), error.get_tip()));
    }
    lines.push(format!("-> {}", position.1));

    if let Some((line, line_text, column)) = get_line_at_position(source, position.0) {
        let line_string = line.to_string();
        let padding = line_string.len() + 2;

        lines.push(format!("{:>padding$}", "|"));

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
        lines.push(format!("{} | {}", line_string, line_text_removed.trim_end()));

        let arrows = column.saturating_sub(removed_whitespace) + 1;
        lines.push(format!("{:>padding$} {:->arrows$}", "|", "^"));
    }

    lines.join("\n")
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    let removed = string.len() - trimmed.len();

    (trimmed, removed)
}
