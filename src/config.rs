use crate::error::ConfigError;
use crate::math::{DeterminantTest, Point2};

/// Grid geometry shared by the editor, the rasterizer and the host renderer.
///
/// Rows run along the display's horizontal axis and columns along its
/// vertical axis, so `rows = display_width / cell_size` and
/// `cols = display_height / cell_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Display width in pixels.
    pub display_width: u32,
    /// Display height in pixels.
    pub display_height: u32,
    /// Side length of one grid cell in pixels.
    pub cell_size: u32,
    /// Maximum number of edges the polygon may hold.
    pub edge_capacity: usize,
    /// Half-width in pixels of the square used to grab a vertex.
    pub grab_radius: f64,
    /// Parallel test used by the fill pass.
    pub determinant_test: DeterminantTest,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            display_width: 1280,
            display_height: 720,
            cell_size: 20,
            edge_capacity: 32,
            grab_radius: 8.0,
            determinant_test: DeterminantTest::Exact,
        }
    }
}

impl GridConfig {
    /// Sets the display size in pixels.
    #[must_use]
    pub fn with_display(mut self, width: u32, height: u32) -> Self {
        self.display_width = width;
        self.display_height = height;
        self
    }

    /// Sets the cell size in pixels.
    #[must_use]
    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Sets the maximum edge count.
    #[must_use]
    pub fn with_edge_capacity(mut self, capacity: usize) -> Self {
        self.edge_capacity = capacity;
        self
    }

    /// Sets the grab box half-width in pixels.
    #[must_use]
    pub fn with_grab_radius(mut self, radius: f64) -> Self {
        self.grab_radius = radius;
        self
    }

    /// Sets the determinant test used while filling.
    #[must_use]
    pub fn with_determinant_test(mut self, test: DeterminantTest) -> Self {
        self.determinant_test = test;
        self
    }

    /// Number of grid rows (horizontal cells).
    #[must_use]
    pub fn rows(&self) -> usize {
        (self.display_width / self.cell_size.max(1)) as usize
    }

    /// Number of grid columns (vertical cells).
    #[must_use]
    pub fn cols(&self) -> usize {
        (self.display_height / self.cell_size.max(1)) as usize
    }

    /// Checks that the configuration describes a usable grid.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_width == 0 {
            return Err(ConfigError::Zero {
                name: "display_width",
            });
        }
        if self.display_height == 0 {
            return Err(ConfigError::Zero {
                name: "display_height",
            });
        }
        if self.cell_size == 0 {
            return Err(ConfigError::Zero { name: "cell_size" });
        }
        let extent = self.display_width.min(self.display_height);
        if self.cell_size > extent {
            return Err(ConfigError::CellLargerThanDisplay {
                cell_size: self.cell_size,
                extent,
            });
        }
        if self.edge_capacity < 3 {
            return Err(ConfigError::CapacityTooSmall(self.edge_capacity));
        }
        if !self.grab_radius.is_finite() || self.grab_radius < 0.0 {
            return Err(ConfigError::InvalidGrabRadius(self.grab_radius));
        }
        if let DeterminantTest::Tolerance(eps) = self.determinant_test {
            if !eps.is_finite() || eps <= 0.0 {
                return Err(ConfigError::InvalidTolerance(eps));
            }
        }
        Ok(())
    }

    /// Maps a pixel position to grid coordinates with
    /// `floor(pixel / extent * count)` on each axis.
    ///
    /// The result is not bounds-checked: pixels left of or above the display
    /// give negative coordinates, pixels past it give coordinates `>= count`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pixel_to_grid(&self, px: f64, py: f64) -> Point2 {
        let row = (px / f64::from(self.display_width) * self.rows() as f64).floor();
        let col = (py / f64::from(self.display_height) * self.cols() as f64).floor();
        Point2::new(row, col)
    }

    /// Returns `true` if `point` addresses a cell inside `[0, rows) × [0, cols)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn contains(&self, point: &Point2) -> bool {
        point.x >= 0.0
            && point.y >= 0.0
            && point.x < self.rows() as f64
            && point.y < self.cols() as f64
    }

    /// Pixel position at which a vertex is drawn: the centre of its cell.
    #[must_use]
    pub fn grid_to_pixel(&self, point: &Point2) -> (f64, f64) {
        let cell = f64::from(self.cell_size);
        ((point.x + 0.5) * cell, (point.y + 0.5) * cell)
    }

    /// Pixel rectangle `(x, y, width, height)` covered by a cell.
    #[must_use]
    pub fn cell_pixel_rect(&self, row: usize, col: usize) -> (u32, u32, u32, u32) {
        let cell = self.cell_size;
        let x = u32::try_from(row).unwrap_or(u32::MAX).saturating_mul(cell);
        let y = u32::try_from(col).unwrap_or(u32::MAX).saturating_mul(cell);
        (x, y, cell, cell)
    }
}
