//! Cell ownership.
//!
//! ## Owner
//!
//! Every cell is `Unowned` until a player marks it. Ownership is set at most
//! once and never reverts.
//!
//! By convention `PlayerA` is the human and `PlayerB` the automated
//! opponent, but nothing in the engine depends on that assignment.

use serde::{Deserialize, Serialize};

/// Who, if anyone, holds a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Owner {
    /// Nobody has marked the cell.
    #[default]
    Unowned,
    /// First competitor (the human by convention).
    PlayerA,
    /// Second competitor (the automated opponent by convention).
    PlayerB,
}

impl Owner {
    /// Both competitors, in turn order.
    pub const PLAYERS: [Owner; 2] = [Owner::PlayerA, Owner::PlayerB];

    /// True for `PlayerA` and `PlayerB`.
    #[must_use]
    pub const fn is_player(self) -> bool {
        !matches!(self, Owner::Unowned)
    }

    /// The opposing competitor. `Unowned` has no opponent and maps to itself.
    ///
    /// ```
    /// use dots_engine::core::Owner;
    ///
    /// assert_eq!(Owner::PlayerA.opponent(), Owner::PlayerB);
    /// assert_eq!(Owner::PlayerB.opponent(), Owner::PlayerA);
    /// assert_eq!(Owner::Unowned.opponent(), Owner::Unowned);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Owner {
        match self {
            Owner::PlayerA => Owner::PlayerB,
            Owner::PlayerB => Owner::PlayerA,
            Owner::Unowned => Owner::Unowned,
        }
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Owner::Unowned => write!(f, "Unowned"),
            Owner::PlayerA => write!(f, "Player A"),
            Owner::PlayerB => write!(f, "Player B"),
        }
    }
}
