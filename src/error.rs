//! Error types for the load → deduplicate → save pipeline

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a run
#[derive(Debug, Error)]
pub enum DedupError {
    /// Input path does not exist
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Input exists but could not be opened or read
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed delimited content
    #[error("malformed data in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Key column is not one of the table's columns
    #[error("column '{column}' not found (available: {})", available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    /// Output could not be written
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Report stream failed
    #[error("failed to write report")]
    Report(#[source] io::Error),
}

impl DedupError {
    pub(crate) fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        DedupError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: impl Into<io::Error>) -> Self {
        DedupError::Write {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T, E = DedupError> = std::result::Result<T, E>;
