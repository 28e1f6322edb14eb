/// Per-cell fill flags, stored row-major (`row * cols + col`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl FillGrid {
    /// Creates an all-clear grid.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the fill flag of a cell; cells outside the grid are clear.
    #[must_use]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    /// All flags, row-major.
    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    /// Iterates `(row, col)` of every filled cell in row-major order.
    pub fn iter_filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    /// Clears every cell, resizing first if the dimensions differ.
    pub(crate) fn reset(&mut self, rows: usize, cols: usize) {
        if self.rows != rows || self.cols != cols {
            *self = Self::new(rows, cols);
        } else {
            self.cells.fill(false);
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, filled: bool) {
        self.cells[row * self.cols + col] = filled;
    }
}
