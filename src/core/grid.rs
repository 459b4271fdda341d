//! Column-major grid layout for symbol cells

use crate::core::cell::SymbolCell;

/// Column-major arrangement of symbol cells.
///
/// The symbol at linear index `i` occupies `row = i % nrow`,
/// `col = i / nrow`; the column count is `ceil(n / nrow)`. Positions past
/// the last symbol stay empty so every row has the same number of slots.
#[derive(Debug, Clone)]
pub struct SymbolGrid {
    nrow: usize,
    ncol: usize,
    /// `cells[row][col]`, `None` for unpopulated slots
    cells: Vec<Vec<Option<SymbolCell>>>,
}

impl SymbolGrid {
    /// Lay out `symbols` column-major over `nrow` rows.
    ///
    /// `nrow` must be nonzero; the public entry points validate this before
    /// constructing a grid.
    pub fn from_symbols<S: AsRef<str>>(symbols: &[S], nrow: usize) -> Self {
        let n = symbols.len();
        let ncol = n.div_ceil(nrow);
        let mut cells = vec![vec![None; ncol]; nrow];

        for (i, symbol) in symbols.iter().enumerate() {
            let (col, row) = (i / nrow, i % nrow);
            cells[row][col] = Some(SymbolCell::new(symbol.as_ref()));
        }

        SymbolGrid { nrow, ncol, cells }
    }

    /// Number of grid rows
    pub fn nrow(&self) -> usize {
        self.nrow
    }

    /// Number of grid columns
    pub fn ncol(&self) -> usize {
        self.ncol
    }

    /// Cell at the given position, if populated
    pub fn get(&self, row: usize, col: usize) -> Option<&SymbolCell> {
        self.cells.get(row)?.get(col)?.as_ref()
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Option<SymbolCell>]> {
        self.cells.iter().map(|row| row.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_column_count_is_ceiling() {
        let symbols = ["a", "b", "c", "d", "e"];
        assert_eq!(SymbolGrid::from_symbols(&symbols, 1).ncol(), 5);
        assert_eq!(SymbolGrid::from_symbols(&symbols, 2).ncol(), 3);
        assert_eq!(SymbolGrid::from_symbols(&symbols, 3).ncol(), 2);
        assert_eq!(SymbolGrid::from_symbols(&symbols, 5).ncol(), 1);
        assert_eq!(SymbolGrid::from_symbols(&symbols, 7).ncol(), 1);
    }

    #[test]
    fn test_column_major_placement() {
        let grid = SymbolGrid::from_symbols(&["x_1", "x_2", "x_3"], 2);
        assert_eq!(grid.ncol(), 2);
        assert_eq!(grid.get(0, 0).unwrap().math, "x_1");
        assert_eq!(grid.get(1, 0).unwrap().math, "x_2");
        assert_eq!(grid.get(0, 1).unwrap().math, "x_3");
        assert!(grid.get(1, 1).is_none());
    }

    #[test]
    fn test_rows_have_uniform_width() {
        let grid = SymbolGrid::from_symbols(&["a", "b", "c", "d", "e"], 3);
        for row in grid.rows() {
            assert_eq!(row.len(), grid.ncol());
        }
    }

    #[test]
    fn test_nrow_exceeding_symbol_count() {
        let grid = SymbolGrid::from_symbols(&["\\sum"], 3);
        assert_eq!(grid.ncol(), 1);
        assert!(grid.get(0, 0).is_some());
        assert!(grid.get(1, 0).is_none());
        assert!(grid.get(2, 0).is_none());
    }

    #[test]
    fn test_out_of_range_access() {
        let grid = SymbolGrid::from_symbols(&["a"], 1);
        assert!(grid.get(5, 5).is_none());
    }
}
