use thiserror::Error;

/// Top-level error type for the polygon editor core.
#[derive(Debug, Error)]
pub enum PolyrasterError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors raised while validating a [`GridConfig`](crate::config::GridConfig).
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be non-zero")]
    Zero { name: &'static str },

    #[error("cell size {cell_size} exceeds display extent {extent}")]
    CellLargerThanDisplay { cell_size: u32, extent: u32 },

    #[error("edge capacity {0} is below the triangle minimum of 3")]
    CapacityTooSmall(usize),

    #[error("grab radius {0} must be finite and non-negative")]
    InvalidGrabRadius(f64),

    #[error("determinant tolerance {0} must be finite and positive")]
    InvalidTolerance(f64),

    #[error("polygon capacity {polygon} differs from configured edge capacity {configured}")]
    CapacityMismatch { configured: usize, polygon: usize },
}

/// Errors related to the polygon's edge cycle.
#[derive(Debug, Error, PartialEq)]
pub enum TopologyError {
    #[error("a closed polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("{count} vertices exceed the edge capacity of {capacity}")]
    CapacityExceeded { count: usize, capacity: usize },

    #[error("zero-length edge at vertex {0}")]
    ZeroLengthEdge(usize),

    #[error("broken link: {0}")]
    BrokenLink(String),

    #[error("edges do not form a single cycle: visited {visited} of {live}")]
    NotSingleCycle { visited: usize, live: usize },

    #[error("vertex {vertex} at ({x}, {y}) lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        vertex: usize,
        x: f64,
        y: f64,
        rows: usize,
        cols: usize,
    },
}

/// Convenience type alias for results using [`PolyrasterError`].
pub type Result<T> = std::result::Result<T, PolyrasterError>;
