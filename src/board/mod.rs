//! Board state: cells, owners, and drawn connections.
//!
//! - `Dot`: one cell with its owner and blocked flag
//! - `ConnectionGraph`: symmetric, monotonic edge set
//! - `Board`: the unified grid that owns both and validates every mutation

pub mod dot;
pub mod graph;
pub mod grid;

pub use dot::Dot;
pub use graph::ConnectionGraph;
pub use grid::Board;
