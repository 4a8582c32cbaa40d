//! Error types for the shiprec-core library.

use thiserror::Error;

/// Main error type for the shiprec library.
#[derive(Error, Debug)]
pub enum ShiprecError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Record lookup error.
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors surfaced to callers of the record lookup operations.
///
/// The recovery engine itself never fails: a field that cannot be
/// resolved is simply absent from the record. These variants cover the
/// caller-facing conditions around the parsed output.
#[derive(Error, Debug)]
pub enum LookupError {
    /// No record carries the requested reference code.
    #[error("reference not found: {0}")]
    ReferenceNotFound(String),

    /// The requested carrier format has no implemented parser.
    #[error("{0} parser not implemented")]
    CarrierUnsupported(&'static str),
}

/// Result type for the shiprec library.
pub type Result<T> = std::result::Result<T, ShiprecError>;
