//! Core table formatting modules
//!
//! - `escape`: verbatim escaping of LaTeX special characters
//! - `cell`: the verbatim/rendered symbol pair
//! - `grid`: column-major grid layout
//! - `table`: options, column spec, and tabular generation

pub mod cell;
pub mod escape;
pub mod grid;
pub mod table;

// Re-export main types and functions
pub use cell::SymbolCell;
pub use escape::{escape_verbatim, unescape_verbatim};
pub use grid::SymbolGrid;
pub use table::{
    format_table, justification_from_aligns, ColumnAlign, SymbolTableGenerator, TableOptions,
};
