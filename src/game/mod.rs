//! Session facade for the input and rendering layers.

pub mod request;
pub mod session;
pub mod snapshot;

pub use request::{ConnectRequest, PlaceRequest};
pub use session::{Game, TurnReport};
pub use snapshot::BoardSnapshot;
