pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

pub use intersect_2d::DeterminantTest;

/// 2D point type, in grid units. Component `x` is the row, `y` the column.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Geometric tolerance for endpoint comparisons during insertion.
///
/// The parity test itself never uses it; see [`DeterminantTest`].
pub const TOLERANCE: f64 = 1e-10;
