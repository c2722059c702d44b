//! Requests coming from the input layer.

use serde::{Deserialize, Serialize};

use crate::core::{Owner, Position};

/// Claim an empty cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceRequest {
    pub position: Position,
    pub owner: Owner,
}

impl PlaceRequest {
    #[must_use]
    pub fn new(position: Position, owner: Owner) -> Self {
        Self { position, owner }
    }
}

/// Draw a connection between two neighboring cells of `owner`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectRequest {
    pub from: Position,
    pub to: Position,
    pub owner: Owner,
}

impl ConnectRequest {
    #[must_use]
    pub fn new(from: Position, to: Position, owner: Owner) -> Self {
        Self { from, to, owner }
    }
}
