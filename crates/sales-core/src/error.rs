//! Error types for sales-review

use thiserror::Error;

/// Main error type for sales-review
#[derive(Debug, Error)]
pub enum SalesError {
    /// Rating lies outside the accepted range
    #[error("Invalid rating {rating}: must be between {min} and {max}")]
    InvalidRating { rating: i32, min: i32, max: i32 },

    /// Author already has a comment on the item
    #[error("Author has already commented: {0}")]
    DuplicateAuthor(String),

    /// No comment at the given position
    #[error("Comment not found at index {index} (item has {len} comments)")]
    CommentNotFound { index: usize, len: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<SalesError>,
    },
}

impl SalesError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        SalesError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for sales-review
pub type Result<T> = std::result::Result<T, SalesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SalesError::InvalidRating { rating: 6, min: 1, max: 5 };
        assert_eq!(err.to_string(), "Invalid rating 6: must be between 1 and 5");

        let err = SalesError::DuplicateAuthor("Alice".to_string());
        assert_eq!(err.to_string(), "Author has already commented: Alice");
    }

    #[test]
    fn test_error_with_context() {
        let err = SalesError::CommentNotFound { index: 3, len: 1 };
        let err = err.with_context("Failed to remove comment");
        assert!(err.to_string().starts_with("Failed to remove comment"));
        assert!(err.to_string().contains("index 3"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SalesError = io_err.into();
        assert!(matches!(err, SalesError::Io(_)));
    }
}
