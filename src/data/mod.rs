//! Data layer - static symbol data
//!
//! Curated symbol group listings used by the convenience formatting
//! functions.

pub mod symbols;

// Re-export commonly used items
pub use symbols::{
    group_names, symbol_group, ARROWS, BIG_OPERATORS, BINARY_OPERATORS, GREEK_LOWER,
    GREEK_UPPER, ORDERED_GROUPS, RELATIONS, SYMBOL_GROUPS,
};
