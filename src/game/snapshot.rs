//! Read-only board view for renderers.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Dot};
use crate::core::Position;

/// Everything a renderer needs to draw the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub width: i32,
    pub height: i32,
    /// Every cell, row-major.
    pub dots: Vec<Dot>,
    /// Every drawn edge once, low endpoint first.
    pub edges: Vec<(Position, Position)>,
    /// Blocked cells, row-major.
    pub blocked: Vec<Position>,
    /// Whether the human can currently close a capturing loop.
    pub human_can_capture: bool,
}

impl BoardSnapshot {
    /// Capture the current state of `board`.
    #[must_use]
    pub fn capture(board: &Board, human_can_capture: bool) -> Self {
        Self {
            width: board.width(),
            height: board.height(),
            dots: board.dots().copied().collect(),
            edges: board.graph().edges().collect(),
            blocked: board.blocked_positions(),
            human_can_capture,
        }
    }
}
