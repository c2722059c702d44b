//! Connection graph between marked cells.
//!
//! The `ConnectionGraph` stores drawn connections as a symmetric adjacency
//! map: `b ∈ adj[a] ⇔ a ∈ adj[b]`. Edges are monotonic; nothing removes
//! them.
//!
//! Validation (adjacency, ownership) is the board's job: the graph only
//! records edges the `Board` has already accepted. Keys are ordered so that
//! iteration is row-major and reproducible.
//!
//! Backed by `im` persistent maps so that cloning a board for a snapshot is
//! O(1).

use im::{OrdMap, OrdSet};

use crate::core::Position;

/// Symmetric set of drawn connections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionGraph {
    adjacency: OrdMap<Position, OrdSet<Position>>,
}

impl ConnectionGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the undirected edge `a`–`b`.
    ///
    /// Returns `true` if the edge is new. Idempotent.
    pub(crate) fn link(&mut self, a: Position, b: Position) -> bool {
        let added = self.insert_half(a, b);
        self.insert_half(b, a);
        added
    }

    fn insert_half(&mut self, from: Position, to: Position) -> bool {
        let mut set = self.adjacency.get(&from).cloned().unwrap_or_default();
        let added = set.insert(to).is_none();
        self.adjacency.insert(from, set);
        added
    }

    /// Cells directly connected to `pos`, ascending. Empty if none.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        self.adjacency
            .get(&pos)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// True if `pos` has at least one drawn connection.
    #[must_use]
    pub fn has_any_connection(&self, pos: Position) -> bool {
        self.adjacency.get(&pos).map_or(false, |set| !set.is_empty())
    }

    /// True if the edge `a`–`b` is drawn.
    #[must_use]
    pub fn contains_edge(&self, a: Position, b: Position) -> bool {
        self.adjacency.get(&a).map_or(false, |set| set.contains(&b))
    }

    /// Every undirected edge exactly once, as `(low, high)` in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.adjacency.iter().flat_map(|(&a, set)| {
            set.iter()
                .copied()
                .filter(move |&b| a < b)
                .map(move |b| (a, b))
        })
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|set| set.len()).sum::<usize>() / 2
    }

    /// True if no edge has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
