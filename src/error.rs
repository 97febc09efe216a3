//! Error types for the bibtex-codec crate
//!
//! Malformed BibTeX text is never an error: the parser is lenient and skips
//! bad records, and generation is total. Only the file convenience
//! functions can fail.

use thiserror::Error;

/// Result type for bibtex-codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for bibtex-codec
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error from reading or writing a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
