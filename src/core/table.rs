//! Symbol table generator
//!
//! Produces a centered LaTeX `tabular` block listing each symbol's escaped
//! verbatim name next to its math-mode rendering, laid out column-major.

use crate::core::cell::SymbolCell;
use crate::core::grid::SymbolGrid;
use crate::utils::error::{TableError, TableResult};

/// Column alignment for the tabular column specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl ColumnAlign {
    /// Convert to LaTeX column specification character
    pub fn to_char(&self) -> char {
        match self {
            ColumnAlign::Left => 'l',
            ColumnAlign::Center => 'c',
            ColumnAlign::Right => 'r',
        }
    }

    /// Parse from a LaTeX column specification character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'l' => Some(ColumnAlign::Left),
            'c' => Some(ColumnAlign::Center),
            'r' => Some(ColumnAlign::Right),
            _ => None,
        }
    }
}

/// Build a justification token from per-column alignments, e.g.
/// `[Center, Center]` gives `"cc"`
pub fn justification_from_aligns(aligns: &[ColumnAlign]) -> String {
    aligns.iter().map(ColumnAlign::to_char).collect()
}

/// Options for symbol table generation
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Number of grid rows
    pub nrow: usize,
    /// Alignment token repeated once per grid column in the tabular column
    /// specification. Each grid column holds two tabular columns (verbatim
    /// and rendered), hence the `"cc"` default.
    pub justification: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            nrow: 3,
            justification: "cc".to_string(),
        }
    }
}

impl TableOptions {
    /// Two-row layout for wide symbol sets
    pub fn compact() -> Self {
        TableOptions {
            nrow: 2,
            ..Default::default()
        }
    }

    /// Everything on a single row
    pub fn single_row() -> Self {
        TableOptions {
            nrow: 1,
            ..Default::default()
        }
    }

    /// Set the row count
    pub fn with_nrow(mut self, nrow: usize) -> Self {
        self.nrow = nrow;
        self
    }

    /// Set the per-column alignment token
    pub fn with_justification(mut self, justification: impl Into<String>) -> Self {
        self.justification = justification.into();
        self
    }
}

/// Generates the tabular block from a laid-out grid
pub struct SymbolTableGenerator {
    grid: SymbolGrid,
    justification: String,
}

impl SymbolTableGenerator {
    /// Create a generator for the given grid and per-column alignment token
    pub fn new(grid: SymbolGrid, justification: impl Into<String>) -> Self {
        SymbolTableGenerator {
            grid,
            justification: justification.into(),
        }
    }

    /// Generate the complete centered tabular block
    pub fn generate_latex(&self) -> String {
        let col_spec = self.build_column_spec();
        let rows: Vec<String> = self.grid.rows().map(render_row).collect();

        [
            "\\begin{center}".to_string(),
            format!("\\begin{{tabular}}{{{}}}", col_spec),
            rows.join("\\\\ \n"),
            "\\end{tabular}".to_string(),
            "\\end{center}".to_string(),
        ]
        .join("\n")
    }

    /// Build the column specification string (e.g., "cc|cc|cc"), one
    /// justification token per grid column separated by vertical rules
    fn build_column_spec(&self) -> String {
        vec![self.justification.as_str(); self.grid.ncol()].join("|")
    }
}

/// Render one grid row as tabular source.
///
/// Every grid cell occupies two tabular slots; unpopulated cells contribute
/// two empty slots so each row carries exactly `2 * ncol - 1` column
/// separators and the tabular stays well-formed.
fn render_row(row: &[Option<SymbolCell>]) -> String {
    let mut slots = Vec::with_capacity(row.len() * 2);
    for cell in row {
        match cell {
            Some(cell) => {
                slots.push(cell.verbatim_latex());
                slots.push(cell.math_latex());
            }
            None => {
                slots.push(String::new());
                slots.push(String::new());
            }
        }
    }
    slots.join(" & ")
}

/// Format a list of LaTeX symbols as a centered reference table.
///
/// Fails with [`TableError::InvalidArgument`] when `symbols` is empty,
/// `options.nrow` is zero, or `options.justification` is empty; every other
/// input is escaped, never rejected.
pub fn format_table<S: AsRef<str>>(symbols: &[S], options: &TableOptions) -> TableResult<String> {
    if symbols.is_empty() {
        return Err(TableError::invalid("symbol list is empty"));
    }
    if options.nrow == 0 {
        return Err(TableError::invalid("nrow must be at least 1"));
    }
    if options.justification.is_empty() {
        return Err(TableError::invalid("justification must not be empty"));
    }

    let grid = SymbolGrid::from_symbols(symbols, options.nrow);
    let generator = SymbolTableGenerator::new(grid, options.justification.as_str());
    Ok(generator.generate_latex())
}
