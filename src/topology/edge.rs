use crate::math::{Point2, Vector2};

/// Slot index of an edge inside a [`Polygon`](super::Polygon).
///
/// Vertex indices share this space: vertex `i` is the start point of edge `i`.
pub type EdgeIndex = usize;

/// A directed polygon edge linked into the polygon's cycle.
///
/// `end` is stored redundantly and always equals the start of the edge
/// reached through `next`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub(crate) start: Point2,
    pub(crate) end: Point2,
    pub(crate) next: EdgeIndex,
    pub(crate) prev: EdgeIndex,
}

impl Edge {
    /// Creates an unlinked edge that points to its own slot in both directions.
    pub(crate) fn detached(slot: EdgeIndex, start: Point2, end: Point2) -> Self {
        Self {
            start,
            end,
            next: slot,
            prev: slot,
        }
    }

    /// Start point in grid units.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// End point in grid units.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.end
    }

    /// Slot of the following edge in the cycle.
    #[must_use]
    pub fn next(&self) -> EdgeIndex {
        self.next
    }

    /// Slot of the preceding edge in the cycle.
    #[must_use]
    pub fn prev(&self) -> EdgeIndex {
        self.prev
    }

    /// Vector from start to end.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }
}
