//! The automated opponent.
//!
//! - `heuristics`: the per-tier target scans
//! - `selector`: `MoveSelector`, which runs the tiers and applies the move

pub mod heuristics;
pub mod selector;

pub use selector::{MoveOutcome, MoveSelector, MoveTier};
