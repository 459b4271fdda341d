//! # symgrid
//!
//! LaTeX symbol reference table generator.
//!
//! Takes an ordered list of LaTeX math commands and emits a centered
//! `tabular` block in which each cell shows the command's escaped literal
//! name (in `\texttt{...}`) next to its rendered form (in math mode).
//! Symbols are laid out column-major over a configurable number of rows.
//!
//! ## Features
//!
//! - **Column-major grid layout**: row count is configurable, column count
//!   derives from it
//! - **Robust escaping**: backslashes, braces, caret, and underscore survive
//!   verbatim display
//! - **Well-formed output**: short rows are padded so every row matches the
//!   declared column specification
//! - **Curated symbol groups**: ready-made Greek letter, operator, relation,
//!   and arrow listings
//!
//! ## Usage Examples
//!
//! ### Formatting a symbol list
//!
//! ```rust
//! use symgrid::{format_table, TableOptions};
//!
//! let table = format_table(&["\\alpha", "\\beta"], &TableOptions::single_row()).unwrap();
//! assert!(table.contains("\\begin{tabular}{cc|cc}"));
//! assert!(table.contains("\\texttt{\\textbackslash{}alpha} & $\\alpha$"));
//! ```
//!
//! ### Formatting a curated group
//!
//! ```rust
//! use symgrid::{format_symbol_group, TableOptions};
//!
//! let table = format_symbol_group("greek-lower", &TableOptions::default()).unwrap();
//! assert!(table.contains("$\\omega$"));
//! ```

/// Core formatting modules
pub mod core;

/// Data layer - curated symbol groups
pub mod data;

/// Utility modules
pub mod utils;

// Re-export core types and functions
pub use core::table::{
    format_table, justification_from_aligns, ColumnAlign, SymbolTableGenerator, TableOptions,
};
pub use core::{escape_verbatim, unescape_verbatim, SymbolCell, SymbolGrid};

// Re-export symbol data
pub use data::symbols;
pub use data::{group_names, symbol_group};

// Re-export utilities
pub use utils::error::{TableError, TableResult};

/// Format a list of LaTeX symbols with the default layout (three rows,
/// centered columns)
pub fn format_symbol_table<S: AsRef<str>>(symbols: &[S]) -> TableResult<String> {
    format_table(symbols, &TableOptions::default())
}

/// Format a curated symbol group by name
///
/// Fails with [`TableError::InvalidArgument`] when no group with that name
/// exists; see [`group_names`] for the available ones.
pub fn format_symbol_group(name: &str, options: &TableOptions) -> TableResult<String> {
    let symbols = symbol_group(name)
        .ok_or_else(|| TableError::invalid(format!("unknown symbol group '{}'", name)))?;
    format_table(symbols, options)
}
