//! Engine error type.
//!
//! Every rejection is local and non-fatal: the request is refused, no state
//! is mutated, and the turn owner is expected to retry with corrected input.

use thiserror::Error;

use super::Position;

/// Errors returned by board, graph, and opponent operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Position lies outside the grid.
    #[error("position {position} is outside the grid")]
    OutOfRange { position: Position },

    /// Placement on a cell that already has an owner.
    #[error("position {position} is already owned")]
    AlreadyOwned { position: Position },

    /// Connection between cells that are not 8-neighbors.
    #[error("positions {from} and {to} are not adjacent")]
    NotAdjacent { from: Position, to: Position },

    /// Connection endpoint not owned (by anyone, or by the requesting owner).
    #[error("position {position} is not owned by the requester")]
    NotOwned { position: Position },

    /// Connection endpoint lies inside an opposing closed loop.
    #[error("position {position} is blocked by an opposing polygon")]
    Blocked { position: Position },

    /// Attempted to place a mark for `Owner::Unowned`.
    #[error("only a player can place a mark")]
    NotAPlayer,

    /// No unowned cell is left for the automated opponent.
    #[error("the board is full")]
    BoardFull,

    /// Configuration rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;
