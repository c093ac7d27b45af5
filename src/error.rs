//! Error types for the Glossa library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`GlossaError`] enum.
//!
//! # Examples
//!
//! ```
//! use glossa::error::{GlossaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GlossaError::invalid_argument("max_suggestions must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Glossa operations.
#[derive(Error, Debug)]
pub enum GlossaError {
    /// I/O errors (dictionary files, readers, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The engine or a store was used before `initialize()` completed.
    #[error("Not initialized: {0}")]
    NotInitialized(String),

    /// Storage-related errors raised by a `DataStore` adapter
    #[error("Storage error: {0}")]
    Storage(String),

    /// Analysis-related errors (tokenizer construction)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid argument or configuration
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with GlossaError.
pub type Result<T> = std::result::Result<T, GlossaError>;

impl GlossaError {
    /// Create a new readiness error.
    pub fn not_initialized<S: Into<String>>(msg: S) -> Self {
        GlossaError::NotInitialized(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        GlossaError::Storage(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        GlossaError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        GlossaError::InvalidArgument(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        GlossaError::InvalidArgument(format!("invalid configuration: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        GlossaError::Other(msg.into())
    }

    /// Check whether this error reports a missing `initialize()` call.
    pub fn is_not_initialized(&self) -> bool {
        matches!(self, GlossaError::NotInitialized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = GlossaError::storage("connection reset");
        assert_eq!(error.to_string(), "Storage error: connection reset");

        let error = GlossaError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = GlossaError::invalid_config("max_suggestions must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid argument: invalid configuration: max_suggestions must be positive"
        );
    }

    #[test]
    fn test_not_initialized() {
        let error = GlossaError::not_initialized("call initialize() first");
        assert!(error.is_not_initialized());
        assert!(!GlossaError::other("x").is_not_initialized());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let glossa_error = GlossaError::from(io_error);

        match glossa_error {
            GlossaError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
