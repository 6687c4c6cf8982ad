//! Run configuration for the `cpplex` binary.

use std::path::PathBuf;

/// Source file read when no input is given.
pub const DEFAULT_INPUT: &str = "input_code.txt";

/// CSV file written when no output is given.
pub const DEFAULT_OUTPUT: &str = "lexical_components_table.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source file to analyze.
    pub input: PathBuf,

    /// Where the CSV export goes, `None` to skip it.
    pub csv_output: Option<PathBuf>,

    /// Print the source before the table.
    pub echo_source: bool,

    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(DEFAULT_INPUT),
            csv_output: Some(PathBuf::from(DEFAULT_OUTPUT)),
            echo_source: false,
            verbose: false,
        }
    }
}

impl Config {
    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    /// Label used for the input in diagnostics.
    pub fn input_label(&self) -> String {
        self.input.display().to_string()
    }
}
