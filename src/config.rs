//! Configuration handling for datasum

use std::path::PathBuf;

/// Configuration for a summary run
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Read at most this many data rows before computing
    pub nrows: Option<usize>,
    /// Where to persist the per-column summary as CSV, if anywhere
    pub output: Option<PathBuf>,
}

impl Config {
    /// Create a new Config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of data rows loaded
    pub fn with_nrows(mut self, nrows: usize) -> Self {
        self.nrows = Some(nrows);
        self
    }

    /// Set the summary CSV output path
    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = Some(output);
        self
    }
}
