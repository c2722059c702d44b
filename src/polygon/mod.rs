//! Loop detection on the board.
//!
//! ## Layers
//!
//! - `geometry`: orientation, segment crossing, even–odd enclosure
//! - `shape`: `Polygon` rings and their canonical keys
//! - `adjacency`: drawn and candidate adjacency per owner
//! - `cycles`: iterative depth-first cycle search
//! - `detector`: `PolygonDetector`, blocking and reachable captures

pub mod adjacency;
pub mod cycles;
pub mod detector;
pub mod geometry;
pub mod shape;

pub use adjacency::Adjacency;
pub use detector::PolygonDetector;
pub use geometry::Segment;
pub use shape::{CycleKey, Polygon, MIN_CYCLE_LEN};
