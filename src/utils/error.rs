//! Error handling for table generation
//!
//! This module provides the error type and result type shared by all
//! formatting entry points.

use std::fmt;

/// Table generation error type
#[derive(Debug, Clone)]
pub enum TableError {
    /// Invalid argument at the call boundary
    InvalidArgument { message: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidArgument { message } => {
                write!(f, "Invalid argument: {}", message)
            }
        }
    }
}

impl std::error::Error for TableError {}

/// Result type for table generation
pub type TableResult<T> = Result<T, TableError>;

// Convenience constructors
impl TableError {
    pub fn invalid(message: impl Into<String>) -> Self {
        TableError::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = TableError::invalid("nrow must be at least 1");
        assert!(err.to_string().contains("Invalid argument"));
        assert!(err.to_string().contains("nrow"));
    }
}
