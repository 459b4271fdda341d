//! Utility modules
//!
//! - Error types and result types

pub mod error;

// Re-export commonly used items
pub use error::{TableError, TableResult};
