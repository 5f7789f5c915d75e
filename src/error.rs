//! Error types for the minuta library.

use std::io;
use thiserror::Error;

/// Result type alias for minuta operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during template processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as a DOCX container.
    #[error("Unknown file format: not a valid DOCX archive")]
    UnknownFormat,

    /// Error reading the ZIP container.
    #[error("Archive error: {0}")]
    Zip(String),

    /// Error parsing the document XML.
    #[error("XML error: {0}")]
    Xml(String),

    /// A required package part is missing from the archive.
    #[error("Missing document part: {0}")]
    MissingPart(String),

    /// Error serializing a document back to DOCX.
    #[error("Document write error: {0}")]
    Write(String),

    /// Error during HTML preview rendering.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::FileNotFound => {
                Error::MissingPart("file not found in archive".to_string())
            }
            _ => Error::Zip(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownFormat;
        assert_eq!(err.to_string(), "Unknown file format: not a valid DOCX archive");

        let err = Error::MissingPart("word/document.xml".to_string());
        assert_eq!(err.to_string(), "Missing document part: word/document.xml");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_zip_error_conversion() {
        let err: Error = zip::result::ZipError::FileNotFound.into();
        assert!(matches!(err, Error::MissingPart(_)));
    }
}
