//! Error types for the textcat library.
//!
//! All fallible operations in textcat return [`Result`], whose error type
//! is the [`TextcatError`] enum.
//!
//! # Examples
//!
//! ```
//! use textcat::error::{TextcatError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextcatError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for textcat operations.
#[derive(Error, Debug)]
pub enum TextcatError {
    /// I/O errors (corpus files, stdin).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors (corpus files, output).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (tokenization, filtering).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// The model has no classes to score against.
    #[error("Empty model: {0}")]
    EmptyModel(String),

    /// The model contains a class that cannot produce finite scores.
    #[error("Degenerate model: {0}")]
    DegenerateModel(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with TextcatError.
pub type Result<T> = std::result::Result<T, TextcatError>;

impl TextcatError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TextcatError::Analysis(msg.into())
    }

    /// Create a new empty-model error.
    pub fn empty_model<S: Into<String>>(msg: S) -> Self {
        TextcatError::EmptyModel(msg.into())
    }

    /// Create a new degenerate-model error.
    pub fn degenerate_model<S: Into<String>>(msg: S) -> Self {
        TextcatError::DegenerateModel(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TextcatError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TextcatError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = TextcatError::empty_model("no classes");
        assert_eq!(error.to_string(), "Empty model: no classes");

        let error = TextcatError::degenerate_model("zero denominator");
        assert_eq!(error.to_string(), "Degenerate model: zero denominator");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let textcat_error = TextcatError::from(io_error);

        match textcat_error {
            TextcatError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
