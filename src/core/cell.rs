//! Cell type for symbol reference tables

use crate::core::escape::escape_verbatim;

/// A single table cell pairing a symbol's escaped verbatim name with its
/// raw math-mode form.
///
/// One logical cell spans two tabular columns: the literal command name and
/// the rendered symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolCell {
    /// Escaped literal form, safe inside `\texttt{...}`
    pub verbatim: String,
    /// Raw symbol, emitted unescaped in math mode
    pub math: String,
}

impl SymbolCell {
    /// Create a cell from a raw symbol string
    pub fn new(symbol: &str) -> Self {
        SymbolCell {
            verbatim: escape_verbatim(symbol),
            math: symbol.to_string(),
        }
    }

    /// LaTeX for the verbatim half of the cell
    pub fn verbatim_latex(&self) -> String {
        format!("\\texttt{{{}}}", self.verbatim)
    }

    /// LaTeX for the rendered half of the cell
    pub fn math_latex(&self) -> String {
        format!("${}$", self.math)
    }

    /// Generate LaTeX for the whole cell, both halves joined by the tabular
    /// column separator
    pub fn to_latex(&self) -> String {
        format!("{} & {}", self.verbatim_latex(), self.math_latex())
    }
}
