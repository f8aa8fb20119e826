//! Error types for Form 283 processing.
//!
//! The quality validation engine itself is total and never fails for a
//! well-typed record; these errors belong to the surrounding pipeline —
//! configuration, file I/O, the Azure collaborators, and the point where
//! raw extraction JSON is shaped into a [`FormRecord`](crate::FormRecord).

use thiserror::Error;

/// Error types that can occur while processing a Form 283 document.
#[derive(Error, Debug)]
pub enum Form283Error {
    /// Extraction output does not conform to the Form 283 schema.
    ///
    /// Raised when the raw JSON returned by the extraction model cannot
    /// be deserialized into a [`FormRecord`](crate::FormRecord) — an
    /// unexpected composite where a scalar was declared, or vice versa.
    /// This is a typed failure surfaced to the caller, never silently
    /// coerced.
    #[error("Schema mismatch: {0}")]
    Schema(#[from] serde_json::Error),

    /// File I/O error while reading input documents or writing outputs.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The OCR service failed or returned an unusable analysis.
    #[error("OCR error: {0}")]
    Ocr(String),

    /// The extraction model call failed or returned unusable output.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Missing or invalid environment configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for [`Result<T, Form283Error>`].
pub type Result<T> = std::result::Result<T, Form283Error>;
