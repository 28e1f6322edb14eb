use crate::topology::{Edge, Polygon};

/// Cell range spanned by a polygon's vertices, clamped to the grid.
///
/// Rows cover `min_row..max_row` and columns `min_col..max_col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundingBox {
    /// First row inside the box.
    pub min_row: usize,
    /// One past the last row inside the box.
    pub max_row: usize,
    /// First column inside the box.
    pub min_col: usize,
    /// One past the last column inside the box.
    pub max_col: usize,
}

impl BoundingBox {
    /// Computes the box of all vertex start points.
    ///
    /// End points are skipped: every end is the start of the next edge.
    /// Fractional coordinates widen the box outward to whole cells.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn of(polygon: &Polygon, rows: usize, cols: usize) -> Self {
        let mut starts = polygon.edges().iter().map(Edge::start);
        let Some(first) = starts.next() else {
            return Self::default();
        };
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
        for p in starts {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        let clamp = |v: f64, limit: usize| v.clamp(0.0, limit as f64) as usize;
        Self {
            min_row: clamp(min_x.floor(), rows),
            max_row: clamp(max_x.ceil(), rows),
            min_col: clamp(min_y.floor(), cols),
            max_col: clamp(max_y.ceil(), cols),
        }
    }

    /// Number of cells inside the box.
    #[must_use]
    pub fn area(&self) -> usize {
        (self.max_row - self.min_row) * (self.max_col - self.min_col)
    }

    /// Returns `true` if `(row, col)` lies inside the box.
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.min_row..self.max_row).contains(&row) && (self.min_col..self.max_col).contains(&col)
    }
}
