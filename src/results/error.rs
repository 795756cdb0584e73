//! Errors that can occur while loading a results file.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while reading the measurements table
#[derive(Error, Debug)]
pub enum LoadError {
    /// Nothing exists at the results path
    #[error("No results file at {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read
    #[error("Failed to read results file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not well-formed CSV (bad quoting, invalid UTF-8, ...)
    #[error("Failed to parse results file: {0}")]
    Csv(#[from] csv::Error),

    /// A data row has more fields than the header row
    #[error("Results file line {line} has {found} fields, expected {expected}")]
    TooManyFields {
        line: u64,
        found: usize,
        expected: usize,
    },

    /// A column the comparison needs is absent from the header row
    #[error("Results file is missing the required column '{0}'")]
    MissingColumn(&'static str),
}
