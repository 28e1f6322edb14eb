use tracing::{debug, trace};

use super::{EdgeIndex, Polygon};
use crate::math::intersect_2d::{ray_segment_intersect_2d, DeterminantTest};
use crate::math::{Point2, TOLERANCE};

/// Result of a successful [`Polygon::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    /// Slot that was freed and, if `relocated_from` is set, refilled.
    pub slot: EdgeIndex,
    /// Former slot of the edge that was moved into `slot`.
    ///
    /// `None` when the deleted vertex already occupied the last slot.
    pub relocated_from: Option<EdgeIndex>,
}

impl Removal {
    /// Maps an index cached before the delete to its current value.
    ///
    /// Returns `None` for the deleted vertex itself.
    #[must_use]
    pub fn remap(&self, index: EdgeIndex) -> Option<EdgeIndex> {
        match self.relocated_from {
            _ if index == self.slot => None,
            Some(from) if index == from => Some(self.slot),
            _ => Some(index),
        }
    }
}

impl Polygon {
    /// Inserts a vertex at `point` next to the nearest existing vertex.
    ///
    /// The new vertex is spliced into the nearest vertex's outgoing edge
    /// unless the new edge towards that edge's far end would cross another
    /// edge, in which case it goes into the incoming edge instead. Returns
    /// the slot of the new vertex, or `None` when the polygon is full or
    /// `point` is already a vertex.
    pub fn insert(&mut self, point: Point2) -> Option<EdgeIndex> {
        if self.is_full() {
            debug!(capacity = self.capacity(), "insert refused: polygon full");
            return None;
        }
        if self.edges.iter().any(|edge| edge.start == point) {
            debug!(x = point.x, y = point.y, "insert refused: vertex exists");
            return None;
        }
        let nearest = self.nearest_vertex(&point)?;
        let outgoing = self.edges[nearest];

        let (prev_edge, next_edge) = if self.crosses_any(&point, &outgoing.end) {
            trace!(nearest, "next side blocked, splitting incoming edge");
            (outgoing.prev, nearest)
        } else {
            (nearest, outgoing.next)
        };

        let target = self.edges[next_edge].start;
        let slot = self.add(point, target)?;
        self.reconnect(prev_edge, slot, next_edge, point);
        debug!(slot, x = point.x, y = point.y, "vertex inserted");
        debug_assert!(self.validate().is_ok());
        Some(slot)
    }

    /// Removes `vertex`, joining its predecessor directly to its successor.
    ///
    /// The two edges meeting at the vertex become one: the incoming edge is
    /// extended to the successor and the outgoing edge's slot is reclaimed by
    /// moving the last edge into it. Returns `None` when only 3 edges remain.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a live slot.
    pub fn delete(&mut self, vertex: EdgeIndex) -> Option<Removal> {
        self.assert_live(vertex);
        if self.edges.len() <= 3 {
            debug!(vertex, "delete refused: triangle is the minimum");
            return None;
        }

        let removed = self.edges[vertex];
        let incoming = removed.prev;
        let successor = removed.next;
        self.edges[incoming].end = removed.end;
        self.edges[incoming].next = successor;
        self.edges[successor].prev = incoming;

        let last = self.edges.len() - 1;
        self.edges.swap_remove(vertex);
        let relocated_from = if vertex == last {
            None
        } else {
            let moved = self.edges[vertex];
            self.edges[moved.prev].next = vertex;
            self.edges[moved.next].prev = vertex;
            Some(last)
        };

        debug!(vertex, ?relocated_from, "vertex deleted");
        debug_assert!(self.validate().is_ok());
        Some(Removal {
            slot: vertex,
            relocated_from,
        })
    }

    /// Moves `vertex` to `target` if it lies in `[0, rows) × [0, cols)`.
    ///
    /// Updates both the vertex's edge start and its incoming edge's end.
    /// Returns `false` and leaves the polygon untouched otherwise.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a live slot.
    #[allow(clippy::cast_precision_loss)]
    pub fn move_vertex(
        &mut self,
        vertex: EdgeIndex,
        target: Point2,
        rows: usize,
        cols: usize,
    ) -> bool {
        self.assert_live(vertex);
        let inside = target.x >= 0.0
            && target.y >= 0.0
            && target.x < rows as f64
            && target.y < cols as f64;
        if !inside {
            trace!(vertex, x = target.x, y = target.y, "move rejected: out of bounds");
            return false;
        }
        let incoming = self.edges[vertex].prev;
        self.edges[vertex].start = target;
        self.edges[incoming].end = target;
        true
    }

    /// Returns `true` if the segment `from → to` crosses an existing edge
    /// anywhere except at `to`.
    fn crosses_any(&self, from: &Point2, to: &Point2) -> bool {
        let dir = to - from;
        self.edges.iter().any(|edge| {
            ray_segment_intersect_2d(
                &edge.start,
                &edge.direction(),
                from,
                &dir,
                DeterminantTest::Exact,
            )
            .is_some_and(|(t, u)| (0.0..=1.0).contains(&t) && (0.0..1.0 - TOLERANCE).contains(&u))
        })
    }
}
