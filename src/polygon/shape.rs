//! Closed loops of connected cells.

use crate::core::Position;

use super::geometry::point_in_polygon;

/// Minimum number of vertices in a non-degenerate grid loop.
///
/// A triangle of mutually adjacent cells (e.g. (0,0), (0,1), (1,0)) encloses
/// no cell, so shorter loops are discarded.
pub const MIN_CYCLE_LEN: usize = 4;

/// Canonical identity of a cycle, independent of start vertex and direction.
pub type CycleKey = Vec<Position>;

/// An ordered ring of distinct positions; consecutive vertices (including
/// last → first) are connected.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Polygon {
    vertices: Vec<Position>,
}

impl Polygon {
    /// Wrap a vertex ring in traversal order.
    #[must_use]
    pub fn new(vertices: Vec<Position>) -> Self {
        Self { vertices }
    }

    /// Vertices in traversal order.
    #[must_use]
    pub fn vertices(&self) -> &[Position] {
        &self.vertices
    }

    /// Number of vertices (equals the number of edges).
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True for an empty ring.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges in traversal order, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// True if `pos` is interior under the even–odd rule.
    #[must_use]
    pub fn encloses(&self, pos: Position) -> bool {
        point_in_polygon(&self.vertices, pos)
    }

    /// Canonical key collapsing rotations and reflections of the same loop.
    ///
    /// The ring is rotated to start at its smallest vertex (row, then col);
    /// the forward and reverse traversals from there are compared and the
    /// lexicographically smaller one is the key.
    #[must_use]
    pub fn canonical_key(&self) -> CycleKey {
        canonical_key(&self.vertices)
    }
}

/// Canonical key of a vertex ring. See `Polygon::canonical_key`.
#[must_use]
pub fn canonical_key(ring: &[Position]) -> CycleKey {
    let n = ring.len();
    let Some(start) = (0..n).min_by_key(|&i| ring[i]) else {
        return Vec::new();
    };

    let forward: Vec<Position> = (0..n).map(|k| ring[(start + k) % n]).collect();
    let reverse: Vec<Position> = (0..n).map(|k| ring[(start + n - k) % n]).collect();

    forward.min(reverse)
}
