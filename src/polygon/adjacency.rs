//! Owner-restricted adjacency views derived from the board.
//!
//! - **Drawn adjacency**: edges actually drawn between two cells of the same
//!   owner; the loops an owner has completed.
//! - **Candidate adjacency**: every edge an owner could still have between
//!   two of its unblocked 8-neighboring cells. An edge qualifies if it is
//!   already drawn, or if adding it would not cross any drawn edge (of
//!   either owner) that it does not share an endpoint with.
//!
//! Both views are ordered maps so that cycle search visits nodes row-major.

use std::collections::{BTreeMap, BTreeSet};

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::board::Board;
use crate::core::{Owner, Position};

use super::geometry::Segment;

/// Ordered adjacency view over positions.
pub type Adjacency = BTreeMap<Position, BTreeSet<Position>>;

fn add_edge(adj: &mut Adjacency, a: Position, b: Position) {
    adj.entry(a).or_default().insert(b);
    adj.entry(b).or_default().insert(a);
}

/// Drawn edges whose endpoints are both held by `owner`.
#[must_use]
pub fn drawn_adjacency(board: &Board, owner: Owner) -> Adjacency {
    let mut adj = Adjacency::new();
    for pos in board.owned_by(owner) {
        for nb in board.neighbors(pos) {
            if board.owner_at(nb) == owner {
                add_edge(&mut adj, pos, nb);
            }
        }
    }
    adj
}

/// Feasible edges between `owner`'s unblocked cells.
#[must_use]
pub fn candidate_adjacency(board: &Board, owner: Owner) -> Adjacency {
    let drawn: FxHashSet<Segment> = board
        .graph()
        .edges()
        .map(|(a, b)| Segment::new(a, b))
        .collect();

    let usable = |pos: Position| board.cell_at(pos).map_or(false, |d| d.is_usable_by(owner));

    let mut adj = Adjacency::new();
    let mut rejected = 0usize;

    for a in board.owned_by(owner).filter(|&a| usable(a)) {
        // Each unordered pair is examined once, from its lower endpoint
        for b in a.neighbors().into_iter().filter(|&b| a < b && usable(b)) {
            let candidate = Segment::new(a, b);
            if drawn.contains(&candidate) || !drawn.iter().any(|e| candidate.crosses(e)) {
                add_edge(&mut adj, a, b);
            } else {
                rejected += 1;
            }
        }
    }

    trace!(%owner, nodes = adj.len(), rejected, "built candidate adjacency");
    adj
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn place_all(board: &mut Board, owner: Owner, cells: &[Position]) {
        for &c in cells {
            board.place(c, owner).unwrap();
        }
    }

    #[test]
    fn test_drawn_adjacency_filters_by_owner() {
        let mut board = Board::new(4, 4);
        place_all(&mut board, Owner::PlayerA, &[p(0, 0), p(0, 1)]);
        place_all(&mut board, Owner::PlayerB, &[p(1, 1)]);
        board.connect(p(0, 0), p(0, 1)).unwrap();
        // Mixed-owner edge: accepted by the board, ignored by both views
        board.connect(p(0, 1), p(1, 1)).unwrap();

        let a = drawn_adjacency(&board, Owner::PlayerA);
        assert_eq!(a.len(), 2);
        assert_eq!(a[&p(0, 1)], BTreeSet::from([p(0, 0)]));

        assert!(drawn_adjacency(&board, Owner::PlayerB).is_empty());
    }

    #[test]
    fn test_candidate_includes_undrawn_neighbors() {
        let mut board = Board::new(4, 4);
        place_all(&mut board, Owner::PlayerA, &[p(0, 0), p(0, 1), p(1, 1)]);

        let adj = candidate_adjacency(&board, Owner::PlayerA);
        assert_eq!(adj[&p(0, 0)], BTreeSet::from([p(0, 1), p(1, 1)]));
        assert_eq!(adj[&p(1, 1)], BTreeSet::from([p(0, 0), p(0, 1)]));
    }

    #[test]
    fn test_candidate_excludes_crossing_edge() {
        let mut board = Board::new(3, 3);
        place_all(&mut board, Owner::PlayerA, &[p(0, 0), p(1, 1)]);
        place_all(&mut board, Owner::PlayerB, &[p(0, 1), p(1, 0)]);
        board.connect(p(0, 0), p(1, 1)).unwrap();

        let b = candidate_adjacency(&board, Owner::PlayerB);
        assert!(b.is_empty());

        let a = candidate_adjacency(&board, Owner::PlayerA);
        assert!(a[&p(0, 0)].contains(&p(1, 1)));
    }

    #[test]
    fn test_candidate_keeps_endpoint_sharing_edge() {
        let mut board = Board::new(3, 3);
        place_all(&mut board, Owner::PlayerA, &[p(0, 0), p(0, 1), p(1, 0), p(1, 1)]);
        board.connect(p(0, 0), p(1, 1)).unwrap();
        board.connect(p(0, 1), p(1, 0)).unwrap();

        let a = candidate_adjacency(&board, Owner::PlayerA);
        assert!(a[&p(0, 0)].contains(&p(0, 1)));
        assert!(a[&p(0, 0)].contains(&p(1, 0)));
        // Both diagonals are drawn, so both stay even though they cross
        assert!(a[&p(0, 0)].contains(&p(1, 1)));
        assert!(a[&p(0, 1)].contains(&p(1, 0)));
    }

    #[test]
    fn test_candidate_skips_blocked_cells() {
        let mut board = Board::new(3, 3);
        place_all(&mut board, Owner::PlayerA, &[p(0, 0), p(0, 1)]);
        board.set_blocked(p(0, 1));

        assert!(candidate_adjacency(&board, Owner::PlayerA).is_empty());
    }
}
