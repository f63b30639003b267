//! Pipeline configuration
//!
//! File locations default to the names the front end and the HYG download
//! use, so running the tools from the site directory needs no arguments.

use std::path::PathBuf;

pub use crate::output::Encoding;

/// HYG v4.2 export, as published by the HYG-Database project
pub const DEFAULT_CATALOG_PATH: &str = "hyg_v42.csv";

/// File the front end loads its stars from
pub const DEFAULT_OUTPUT_PATH: &str = "stars.json";

/// Where the pipeline reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// HYG catalog CSV
    pub input: PathBuf,
    /// Star file, overwritten on every run
    pub output: PathBuf,
    /// JSON layout of the star file
    pub encoding: Encoding,
}

impl PipelineConfig {
    /// Create a configuration with the default (pretty) encoding
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            encoding: Encoding::default(),
        }
    }

    /// Replace the output encoding
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_PATH, DEFAULT_OUTPUT_PATH)
    }
}
