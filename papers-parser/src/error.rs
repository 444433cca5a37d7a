use std::result;

use thiserror::Error;

/// Error types for MEDLINE parsing operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A non-academic affiliation appeared before any author in its record,
    /// so there is no author to attribute it to
    #[error("Affiliation without a preceding author: {line}")]
    AffiliationWithoutAuthor { line: String },
}

pub type Result<T> = result::Result<T, ParseError>;
