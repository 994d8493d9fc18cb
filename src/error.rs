//! Error types for sidenote

use thiserror::Error;

/// Result type alias for sidenote operations
pub type Result<T> = std::result::Result<T, EditorError>;

/// Crate error types
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("range {location}+{length} is not a valid window into a buffer of {buffer_len} code units")]
    InvalidRange {
        location: usize,
        length: usize,
        buffer_len: usize,
    },
}
