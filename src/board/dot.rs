//! A grid cell with its owner and blocked flag.

use serde::{Deserialize, Serialize};

use crate::core::{Owner, Position};

/// A cell together with its current owner and blocked status.
///
/// `blocked` is derived state: the polygon detector recomputes it wholesale
/// on every refresh. A blocked cell, though owned, may not originate or
/// terminate a new connection because an opposing closed loop encloses it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dot {
    /// Where the cell is.
    pub position: Position,
    /// Who holds it.
    pub owner: Owner,
    /// Enclosed by an opposing drawn loop.
    pub blocked: bool,
}

impl Dot {
    /// An unowned, unblocked cell.
    #[must_use]
    pub const fn empty(position: Position) -> Self {
        Self {
            position,
            owner: Owner::Unowned,
            blocked: false,
        }
    }

    /// True if nobody owns the cell.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.owner.is_player()
    }

    /// True if `owner` holds the cell and it is not blocked.
    #[must_use]
    pub fn is_usable_by(&self, owner: Owner) -> bool {
        self.owner == owner && owner.is_player() && !self.blocked
    }
}
