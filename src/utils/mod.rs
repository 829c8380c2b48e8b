//! Shared utilities

pub mod logger;

pub use self::logger::{init_logging, LogLevel};

/// General-purpose utility error type
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    #[error("Logging error: {0}")]
    Logging(String),
}
