//! Error types for loading and exporting salary data.

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Fatal errors raised while loading the dataset. There is no partial load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Input file does not exist.
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// Input file exists but cannot be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Required columns are absent from the header row.
    #[error("{}: missing required columns: {}", .path.display(), .missing.join(", "))]
    Schema { path: PathBuf, missing: Vec<String> },

    /// A cell could not be converted to its column type.
    #[error("{}:{line}: invalid {column}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        column: String,
        message: String,
    },

    /// The file is not well-formed CSV.
    #[error("malformed csv {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl LoadError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::FileNotFound { path }
            | LoadError::Io { path, .. }
            | LoadError::Schema { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::Csv { path, .. } => path,
        }
    }
}

/// Errors raised while exporting filtered rows.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to build data frame: {0}")]
    Polars(#[from] PolarsError),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
