//! Error types for the pdf2html library.

use std::io;
use thiserror::Error;

/// Result type alias for pdf2html operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF document is encrypted; decryption is not supported.
    #[error("Document is encrypted")]
    Encrypted,

    /// The extractor could not decode the source document.
    #[error("Extraction error: {0}")]
    Extract(String),

    /// The assembled document tree failed to serialize.
    ///
    /// Should not occur for a well-formed logical document; indicates a
    /// programming invariant was violated.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::Extract(err.to_string()),
        }
    }
}
