//! Error types for n-gram counting

use std::path::PathBuf;
use thiserror::Error;

use crate::dictionary::Code;

/// Errors produced while loading, counting or reporting
#[derive(Error, Debug)]
pub enum NgramError {
    /// The external dictionary file could not be opened
    #[error("invalid dictionary file: {}", path.display())]
    InvalidDictionaryFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A code was decoded that the dictionary never assigned
    #[error("unknown word code: {0}")]
    UnknownCode(Code),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NgramError>;
