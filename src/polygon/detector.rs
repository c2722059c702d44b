//! Capture detection and blocking.
//!
//! `PolygonDetector` answers two questions about a board:
//!
//! 1. Which cells are already captured? Every loop an owner has actually
//!    drawn blocks the opposing cells it encloses (`refresh_blocked`).
//! 2. Can an owner still close a capturing loop? A loop over the owner's
//!    candidate edges that encloses at least one opposing cell
//!    (`first_reachable_polygon` and friends).

use tracing::{debug, trace};

use crate::board::Board;
use crate::core::{Owner, Position};

use super::adjacency::{self, Adjacency};
use super::cycles::{all_cycles, first_cycle};
use super::geometry::point_in_polygon;
use super::shape::Polygon;

/// Stateless capture detector over a `Board`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PolygonDetector;

impl PolygonDetector {
    /// Create a detector.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    // === Adjacency views ===

    /// Drawn edges between two cells of `owner`.
    #[must_use]
    pub fn drawn_adjacency(&self, board: &Board, owner: Owner) -> Adjacency {
        adjacency::drawn_adjacency(board, owner)
    }

    /// Edges `owner` could still draw (or has drawn) between unblocked cells.
    #[must_use]
    pub fn candidate_adjacency(&self, board: &Board, owner: Owner) -> Adjacency {
        adjacency::candidate_adjacency(board, owner)
    }

    // === Blocking ===

    /// Recompute every cell's blocked flag from the drawn loops.
    ///
    /// All flags are cleared first, then each opposing cell enclosed by any
    /// drawn loop of length ≥ 4 is blocked. Running twice without a graph
    /// change yields the same flags. Returns the number of blocked cells.
    pub fn refresh_blocked(&self, board: &mut Board) -> usize {
        board.clear_blocked();

        let mut captured: Vec<Position> = Vec::new();
        for owner in Owner::PLAYERS {
            let loops = all_cycles(&adjacency::drawn_adjacency(board, owner), |_| true);
            if loops.is_empty() {
                continue;
            }

            let before = captured.len();
            captured.extend(
                board
                    .owned_by(owner.opponent())
                    .filter(|&cell| loops.iter().any(|l| l.encloses(cell))),
            );
            trace!(%owner, loops = loops.len(), enclosed = captured.len() - before, "drawn loops");
        }

        for &cell in &captured {
            board.set_blocked(cell);
        }

        let blocked = board.blocked_positions().len();
        debug!(blocked, "refreshed blocked cells");
        blocked
    }

    // === Reachable loops ===

    /// First loop over `owner`'s candidate edges enclosing an opposing cell.
    ///
    /// Search order is row-major over both roots and neighbors, so the
    /// result is reproducible for a given board.
    #[must_use]
    pub fn first_reachable_polygon(&self, board: &Board, owner: Owner) -> Option<Polygon> {
        let targets = opposing_cells(board, owner);
        if targets.is_empty() {
            return None;
        }

        let adj = adjacency::candidate_adjacency(board, owner);
        let found = first_cycle(&adj, |ring| encloses_any(ring, &targets));
        trace!(%owner, found = found.is_some(), "first reachable polygon");
        found
    }

    /// Every distinct loop over `owner`'s candidate edges enclosing an
    /// opposing cell. Rotations and reflections of one loop appear once.
    #[must_use]
    pub fn all_reachable_polygons(&self, board: &Board, owner: Owner) -> Vec<Polygon> {
        let targets = opposing_cells(board, owner);
        if targets.is_empty() {
            return Vec::new();
        }

        let adj = adjacency::candidate_adjacency(board, owner);
        let found = all_cycles(&adj, |ring| encloses_any(ring, &targets));
        trace!(%owner, count = found.len(), "all reachable polygons");
        found
    }

    /// True if `owner` can still close a capturing loop.
    #[must_use]
    pub fn has_reachable_polygon(&self, board: &Board, owner: Owner) -> bool {
        self.first_reachable_polygon(board, owner).is_some()
    }

    // === New captures ===

    /// First reachable loop enclosing an opposing cell that is not yet
    /// blocked. Loops around cells already captured do not count.
    #[must_use]
    pub fn first_capturing_polygon(&self, board: &Board, owner: Owner) -> Option<Polygon> {
        let targets: Vec<Position> = opposing_cells(board, owner)
            .into_iter()
            .filter(|&cell| !board.is_blocked(cell))
            .collect();
        if targets.is_empty() {
            return None;
        }

        let adj = adjacency::candidate_adjacency(board, owner);
        first_cycle(&adj, |ring| encloses_any(ring, &targets))
    }

    /// True if `owner` can close a loop that captures something new.
    #[must_use]
    pub fn can_capture(&self, board: &Board, owner: Owner) -> bool {
        self.first_capturing_polygon(board, owner).is_some()
    }
}

fn opposing_cells(board: &Board, owner: Owner) -> Vec<Position> {
    if !owner.is_player() {
        return Vec::new();
    }
    board.owned_by(owner.opponent()).collect()
}

fn encloses_any(ring: &[Position], targets: &[Position]) -> bool {
    targets.iter().any(|&t| point_in_polygon(ring, t))
}
