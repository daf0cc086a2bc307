//! Error types for the pagedown library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pagedown operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The named input document does not exist.
    #[error("Source document not found: {}", .0.display())]
    MissingSource(PathBuf),

    /// The extraction collaborator failed to deliver page content.
    #[error("Extraction error: {0}")]
    Extract(String),

    /// Error during rendering.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
