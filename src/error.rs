//! Error types and handling for the RTF signature library

use std::{io, path::PathBuf, result::Result as StdResult};

use thiserror::Error;

use crate::report::ReportError;

/// Custom result type for rtfsig operations
pub type Result<T> = StdResult<T, Error>;

/// Core error type for rtfsig operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Neither a file path nor a data buffer was supplied
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The document failed structural validation (magic bytes)
    #[error("Parsing error: {0}")]
    Parsing(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Maps a read failure on `path` to `FileNotFound` when the file is missing
    pub fn from_read(err: io::Error, path: impl Into<PathBuf>) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Error::FileNotFound(path.into())
        } else {
            Error::Io(err)
        }
    }
}
