use tracing::trace;

use super::{BoundingBox, FillGrid};
use crate::math::intersect_2d::{ray_crosses_segment, DeterminantTest};
use crate::math::{Point2, Vector2};
use crate::topology::Polygon;

/// Direction of every probe ray: towards decreasing row.
pub const PROBE_DIRECTION: Vector2 = Vector2::new(-1.0, 0.0);

/// Fills grid cells whose centres lie inside a polygon (even-odd rule).
///
/// # Algorithm
///
/// 1. Bound the polygon's vertices to a cell range.
/// 2. For every cell in the range, cast a probe from the cell centre
///    `(row + 0.5, col + 0.5)` along [`PROBE_DIRECTION`].
/// 3. Count edges hit with `t ∈ [0, 1]` and `u ≥ 0`; an odd count fills.
///
/// Cells outside the range are always clear. The whole grid is recomputed
/// on every call, costing `O(box area × edge count)`.
#[derive(Debug, Clone, Copy)]
pub struct Rasterize {
    rows: usize,
    cols: usize,
    test: DeterminantTest,
}

impl Rasterize {
    /// Creates a rasterizer for a `rows × cols` grid with the exact
    /// determinant test.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            test: DeterminantTest::Exact,
        }
    }

    /// Sets how parallel edges are detected.
    #[must_use]
    pub fn with_determinant_test(mut self, test: DeterminantTest) -> Self {
        self.test = test;
        self
    }

    /// Rasterizes into a fresh grid.
    #[must_use]
    pub fn execute(&self, polygon: &Polygon) -> FillGrid {
        let mut grid = FillGrid::new(self.rows, self.cols);
        self.execute_into(polygon, &mut grid);
        grid
    }

    /// Rasterizes into `grid`, overwriting every cell.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute_into(&self, polygon: &Polygon, grid: &mut FillGrid) {
        grid.reset(self.rows, self.cols);
        let bbox = BoundingBox::of(polygon, self.rows, self.cols);
        for row in bbox.min_row..bbox.max_row {
            for col in bbox.min_col..bbox.max_col {
                let centre = Point2::new(row as f64 + 0.5, col as f64 + 0.5);
                if self.crossings(polygon, &centre) % 2 == 1 {
                    grid.set(row, col, true);
                }
            }
        }
        trace!(
            edges = polygon.len(),
            cells = bbox.area(),
            filled = grid.filled_count(),
            "rasterized"
        );
    }

    /// Counts the edges crossed by the probe cast from `origin`.
    #[must_use]
    pub fn crossings(&self, polygon: &Polygon, origin: &Point2) -> usize {
        polygon
            .edges()
            .iter()
            .filter(|edge| {
                ray_crosses_segment(
                    &edge.start(),
                    &edge.end(),
                    origin,
                    &PROBE_DIRECTION,
                    self.test,
                )
            })
            .count()
    }
}
