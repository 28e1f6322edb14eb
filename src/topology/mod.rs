pub mod edge;
pub mod edit;

pub use edge::{Edge, EdgeIndex};
pub use edit::Removal;

use tracing::debug;

use crate::error::{Result, TopologyError};
use crate::math::distance_2d::distance_squared_2d;
use crate::math::polygon_2d::is_clockwise;
use crate::math::Point2;

/// Vertices of the polygon every session starts from.
pub const SEED_TRIANGLE: [(f64, f64); 3] = [(3.0, 3.0), (8.0, 4.0), (8.0, 8.0)];

/// Fixed-capacity arena of edges forming exactly one closed cycle.
///
/// Edges live in slots `0..len()`. Following [`Edge::next`] from any slot
/// visits every live edge once and returns to the start. Deleting a vertex
/// moves the last edge into the freed slot, so an index held across
/// [`Polygon::delete`] is stale if it named the old last slot; the returned
/// [`Removal`] says which slot moved.
///
/// The edit operations assume the cycle runs clockwise on a y-down grid.
/// Nothing enforces it.
#[derive(Debug, Clone)]
pub struct Polygon {
    edges: Vec<Edge>,
    capacity: usize,
}

impl Polygon {
    /// Builds the cycle `points[0] → points[1] → … → points[0]`.
    ///
    /// # Errors
    ///
    /// Returns a [`TopologyError`] if fewer than 3 points are given, if they
    /// do not fit in `capacity`, or if two consecutive points coincide.
    pub fn new(points: &[Point2], capacity: usize) -> Result<Self> {
        let n = points.len();
        if n < 3 {
            return Err(TopologyError::TooFewVertices(n).into());
        }
        if n > capacity {
            return Err(TopologyError::CapacityExceeded { count: n, capacity }.into());
        }
        let mut edges = Vec::with_capacity(capacity);
        for i in 0..n {
            let j = (i + 1) % n;
            if points[i] == points[j] {
                return Err(TopologyError::ZeroLengthEdge(i).into());
            }
            edges.push(Edge {
                start: points[i],
                end: points[j],
                next: j,
                prev: (i + n - 1) % n,
            });
        }
        Ok(Self { edges, capacity })
    }

    /// Builds the default seed triangle.
    ///
    /// # Errors
    ///
    /// Returns an error if `capacity` is below 3.
    pub fn seed(capacity: usize) -> Result<Self> {
        let points = SEED_TRIANGLE.map(|(x, y)| Point2::new(x, y));
        Self::new(&points, capacity)
    }

    /// Number of live edges (and vertices).
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the polygon has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Maximum number of edges.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` when no further edge can be added.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.edges.len() >= self.capacity
    }

    /// Returns the edge in `slot`, if live.
    #[must_use]
    pub fn edge(&self, slot: EdgeIndex) -> Option<&Edge> {
        self.edges.get(slot)
    }

    /// Live edges in storage order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterates the edges by following `next` links from slot 0.
    pub fn cycle(&self) -> impl Iterator<Item = &Edge> + '_ {
        let mut current = 0;
        (0..self.edges.len()).map(move |_| {
            let edge = &self.edges[current];
            current = edge.next;
            edge
        })
    }

    /// Vertex positions in cycle order, starting at slot 0.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point2> {
        self.cycle().map(Edge::start).collect()
    }

    /// Returns `true` if the cycle runs clockwise on a y-down grid.
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        is_clockwise(&self.vertices())
    }

    /// Returns the vertex nearest to `point` by squared distance.
    ///
    /// Ties go to the lowest slot.
    #[must_use]
    pub fn nearest_vertex(&self, point: &Point2) -> Option<EdgeIndex> {
        let mut best: Option<(EdgeIndex, f64)> = None;
        for (i, edge) in self.edges.iter().enumerate() {
            let d = distance_squared_2d(&edge.start, point);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Appends a detached edge in the next free slot.
    ///
    /// Returns `None` without changing anything when the polygon is full.
    /// The new edge links to itself until [`connect`](Self::connect) or
    /// [`reconnect`](Self::reconnect) splices it into the cycle.
    pub fn add(&mut self, start: Point2, end: Point2) -> Option<EdgeIndex> {
        if self.is_full() {
            debug!(capacity = self.capacity, "edge capacity exhausted");
            return None;
        }
        let slot = self.edges.len();
        self.edges.push(Edge::detached(slot, start, end));
        Some(slot)
    }

    /// Sets the `next` and `prev` links of `which`.
    ///
    /// # Panics
    ///
    /// Panics if any of the three indices is not a live slot.
    pub fn connect(&mut self, which: EdgeIndex, next: EdgeIndex, prev: EdgeIndex) {
        self.assert_live(which);
        self.assert_live(next);
        self.assert_live(prev);
        let edge = &mut self.edges[which];
        edge.next = next;
        edge.prev = prev;
    }

    /// Splices `new_edge` between `prev_edge` and `next_edge`, truncating
    /// `prev_edge` so that it ends at `split_point`.
    ///
    /// # Panics
    ///
    /// Panics if any of the three indices is not a live slot.
    pub fn reconnect(
        &mut self,
        prev_edge: EdgeIndex,
        new_edge: EdgeIndex,
        next_edge: EdgeIndex,
        split_point: Point2,
    ) {
        self.connect(new_edge, next_edge, prev_edge);
        let prev = &mut self.edges[prev_edge];
        prev.end = split_point;
        prev.next = new_edge;
        self.edges[next_edge].prev = new_edge;
    }

    /// Checks the link and cycle invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> std::result::Result<(), TopologyError> {
        let live = self.edges.len();
        if live < 3 {
            return Err(TopologyError::TooFewVertices(live));
        }
        for (i, edge) in self.edges.iter().enumerate() {
            if edge.next >= live || edge.prev >= live {
                return Err(TopologyError::BrokenLink(format!(
                    "edge {i} links outside {live} live slots"
                )));
            }
            if edge.next == i {
                return Err(TopologyError::BrokenLink(format!("edge {i} is a self-loop")));
            }
            let next = &self.edges[edge.next];
            if next.prev != i {
                return Err(TopologyError::BrokenLink(format!(
                    "edge {} does not point back to {i}",
                    edge.next
                )));
            }
            if next.start != edge.end {
                return Err(TopologyError::BrokenLink(format!(
                    "edge {i} ends away from the start of edge {}",
                    edge.next
                )));
            }
        }
        let mut visited = 1;
        let mut current = self.edges[0].next;
        while current != 0 && visited <= live {
            visited += 1;
            current = self.edges[current].next;
        }
        if visited != live {
            return Err(TopologyError::NotSingleCycle { visited, live });
        }
        Ok(())
    }

    fn assert_live(&self, slot: EdgeIndex) {
        assert!(
            slot < self.edges.len(),
            "edge index {slot} is not live ({} live edges)",
            self.edges.len()
        );
    }
}
