//! Grid positions.
//!
//! A `Position` is the sole identity of a grid node: two positions are equal
//! iff row and col match. Ownership and the blocked flag live on the board,
//! never on the position, so positions stay valid map keys while the game
//! mutates cells in place.
//!
//! ## Ordering
//!
//! `Position` orders row-major (row first, then col). Every deterministic
//! scan in the engine (first unowned cell, cycle search roots, heuristics)
//! relies on this ordering.
//!
//! ```
//! use dots_engine::core::Position;
//!
//! let a = Position::new(1, 1);
//! let b = Position::new(2, 2);
//!
//! assert!(a.is_adjacent(b));
//! assert_eq!(a.chebyshev(Position::new(3, 1)), 2);
//! assert!(Position::new(0, 9) < Position::new(1, 0));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The eight unit offsets around a cell, row-major.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Orthogonal offsets in scan order: down, up, right, left.
pub const ORTHOGONAL_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A cell coordinate on the grid.
///
/// Coordinates are signed so that offsets can step off the grid; whether a
/// position is on the grid is a question for the `Board`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row index (y).
    pub row: i32,
    /// Column index (x).
    pub col: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Position shifted by `(d_row, d_col)`, saturating at the `i32` bounds.
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// Chebyshev (king-move) distance to `other`.
    #[must_use]
    pub fn chebyshev(self, other: Position) -> i32 {
        (self.row - other.row).abs().max((self.col - other.col).abs())
    }

    /// True if `other` is one of the eight cells around `self`.
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.chebyshev(other) == 1
    }

    /// The eight surrounding positions, row-major. May include off-grid cells.
    #[must_use]
    pub fn neighbors(self) -> SmallVec<[Position; 8]> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| self.offset(dr, dc))
            .collect()
    }

    /// The four orthogonal positions in scan order (down, up, right, left).
    #[must_use]
    pub fn orthogonal(self) -> [Position; 4] {
        ORTHOGONAL_OFFSETS.map(|(dr, dc)| self.offset(dr, dc))
    }

    /// Planar x coordinate used by the geometry predicates.
    #[must_use]
    pub const fn x(self) -> i64 {
        self.col as i64
    }

    /// Planar y coordinate used by the geometry predicates.
    #[must_use]
    pub const fn y(self) -> i64 {
        self.row as i64
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
