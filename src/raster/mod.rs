mod bounding_box;
mod fill_grid;
mod rasterize;

pub use bounding_box::BoundingBox;
pub use fill_grid::FillGrid;
pub use rasterize::{Rasterize, PROBE_DIRECTION};
