//! # dots-engine
//!
//! Game engine for a two-player connect-the-dots capture game on a
//! rectangular grid.
//!
//! Players claim cells and draw connections between neighboring cells they
//! own. A closed loop of connections captures the opposing cells it
//! encloses: those cells become blocked and can no longer be connected.
//!
//! ## Design Principles
//!
//! 1. **One source of truth**: `Board` owns cell ownership, blocked flags
//!    and the connection graph together, and validates every mutation.
//!
//! 2. **Deterministic**: Cycle search visits cells row-major, and the
//!    opponent's randomness is an injected, seedable `ProbeSource`.
//!
//! 3. **Bounded**: No search or heuristic loops without a limit; cycle
//!    search runs on an explicit stack.
//!
//! ## Modules
//!
//! - `core`: Positions, owners, configuration, errors, RNG
//! - `board`: Cells, connection graph, the board itself
//! - `polygon`: Geometry, cycle search, blocking and capture detection
//! - `opponent`: Tiered heuristic move selection
//! - `game`: Session facade with requests, turns and snapshots
//!
//! ## Example
//!
//! ```
//! use dots_engine::{EngineConfig, Game, Owner, Position};
//!
//! let mut game = Game::new(EngineConfig::default()).unwrap();
//! let report = game.play_turn(Position::new(5, 5)).unwrap();
//!
//! assert_eq!(game.board().owner_at(Position::new(5, 5)), Owner::PlayerA);
//! assert!(report.reply.is_some());
//! ```

pub mod core;
pub mod board;
pub mod polygon;
pub mod opponent;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, EngineError, EngineResult,
    GameRng, ProbeSource,
    Owner, Position,
};

pub use crate::board::{Board, ConnectionGraph, Dot};

pub use crate::polygon::{Polygon, PolygonDetector, MIN_CYCLE_LEN};

pub use crate::opponent::{MoveOutcome, MoveSelector, MoveTier};

pub use crate::game::{BoardSnapshot, ConnectRequest, Game, PlaceRequest, TurnReport};
