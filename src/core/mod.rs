//! Core engine types: positions, owners, configuration, errors, RNG.
//!
//! These are the leaf building blocks shared by the board, the polygon
//! detector and the automated opponent.

pub mod config;
pub mod error;
pub mod owner;
pub mod position;
pub mod rng;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use owner::Owner;
pub use position::Position;
pub use rng::{GameRng, ProbeSource};
