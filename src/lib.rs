pub mod config;
pub mod editor;
pub mod error;
pub mod math;
pub mod raster;
pub mod topology;

pub use config::GridConfig;
pub use editor::{Button, DragState, EditOutcome, Editor, EditorState, PointerEvent};
pub use error::{ConfigError, PolyrasterError, Result, TopologyError};
pub use raster::{BoundingBox, FillGrid, Rasterize};
pub use topology::{Edge, EdgeIndex, Polygon, Removal};
