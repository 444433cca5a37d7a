use std::{io, result};

use thiserror::Error;

/// Error types for writing paper output
#[derive(Error, Debug)]
pub enum FormatError {
    /// CSV serialization or file creation failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error while writing output
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = result::Result<T, FormatError>;
