//! The automated opponent's turn.
//!
//! `MoveSelector::choose_and_apply_move` picks one cell through a tiered
//! policy, claims it, wires it into the owner's existing groups, and closes
//! a capturing loop when one is reachable.
//!
//! ## Tiers
//!
//! 1. **Threat response**: block an exposed opposing cell
//! 2. **Bridge**: fill the gap between two of our cells at distance 2
//! 3. **Probe**: bounded random probes around the last placement
//! 4. **Fallback**: first empty cell, row-major
//!
//! ## Example
//!
//! ```
//! use dots_engine::board::Board;
//! use dots_engine::core::{GameRng, Owner, Position};
//! use dots_engine::opponent::{MoveSelector, MoveTier};
//! use dots_engine::polygon::PolygonDetector;
//!
//! let mut board = Board::new(10, 10);
//! board.place(Position::new(4, 4), Owner::PlayerA).unwrap();
//!
//! let mut selector = MoveSelector::new(Owner::PlayerB, GameRng::new(7));
//! let outcome = selector
//!     .choose_and_apply_move(&mut board, &PolygonDetector::new(), Position::new(4, 4))
//!     .unwrap();
//!
//! assert_eq!(outcome.tier, MoveTier::ThreatResponse);
//! assert_eq!(board.owner_at(outcome.position), Owner::PlayerB);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::board::Board;
use crate::core::{EngineConfig, EngineError, EngineResult, GameRng, Owner, Position, ProbeSource};
use crate::polygon::{Polygon, PolygonDetector};

use super::heuristics::{bridge_target, probe_target, threat_target};

/// Upper bound on full passes through the tier policy per turn.
const MAX_SELECTION_ROUNDS: usize = 4;

/// Which policy tier chose the cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveTier {
    ThreatResponse,
    Bridge,
    Probe,
    Fallback,
}

impl fmt::Display for MoveTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveTier::ThreatResponse => "threat-response",
            MoveTier::Bridge => "bridge",
            MoveTier::Probe => "probe",
            MoveTier::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

/// Result of one automated turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The cell claimed this turn.
    pub position: Position,
    /// Tier that chose it.
    pub tier: MoveTier,
    /// Own cells the new cell was connected to, row-major.
    pub connections: Vec<Position>,
    /// Loop drawn to capture opposing cells, if any.
    pub capture: Option<Polygon>,
}

/// Tiered move policy for one automated owner.
///
/// Generic over its random source so that tests can script probe offsets.
#[derive(Clone, Debug)]
pub struct MoveSelector<S: ProbeSource = GameRng> {
    owner: Owner,
    probe_radius: i32,
    probe_attempts: u32,
    opening_radius: i32,
    source: S,
}

impl MoveSelector<GameRng> {
    /// Selector seeded and tuned from `config`.
    pub fn from_config(owner: Owner, config: &EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::new(owner, GameRng::new(config.seed)).with_config(config))
    }
}

impl<S: ProbeSource> MoveSelector<S> {
    /// Selector with default tuning drawing probes from `source`.
    #[must_use]
    pub fn new(owner: Owner, source: S) -> Self {
        let defaults = EngineConfig::default();
        Self {
            owner,
            probe_radius: defaults.probe_radius,
            probe_attempts: defaults.probe_attempts,
            opening_radius: defaults.opening_radius,
            source,
        }
    }

    /// Take probe tuning from `config`.
    #[must_use]
    pub fn with_config(mut self, config: &EngineConfig) -> Self {
        self.probe_radius = config.probe_radius;
        self.probe_attempts = config.probe_attempts;
        self.opening_radius = config.opening_radius;
        self
    }

    /// The owner this selector plays for.
    #[must_use]
    pub fn owner(&self) -> Owner {
        self.owner
    }

    /// Mutable access to the probe source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Pick, claim and connect one cell; capture if a loop is reachable.
    ///
    /// Fails without touching the board: `NotAPlayer` if the selector's
    /// owner is `Unowned`, `OutOfRange` if `last_placed` is off the grid,
    /// `BoardFull` when no cell is free.
    ///
    /// `capture` is set only when the drawn loop blocked at least one cell
    /// that was not blocked before; re-finding a loop closed on an earlier
    /// turn reports `None`.
    pub fn choose_and_apply_move(
        &mut self,
        board: &mut Board,
        detector: &PolygonDetector,
        last_placed: Position,
    ) -> EngineResult<MoveOutcome> {
        if !self.owner.is_player() {
            return Err(EngineError::NotAPlayer);
        }
        if !board.contains(last_placed) {
            return Err(EngineError::OutOfRange {
                position: last_placed,
            });
        }
        if board.is_full() {
            debug!(owner = %self.owner, "no free cell");
            return Err(EngineError::BoardFull);
        }

        let (position, tier) = self.select_target(board, last_placed)?;
        board.place(position, self.owner)?;
        debug!(owner = %self.owner, %position, %tier, "placed");

        // A cell dropped inside an opposing loop must not be wired up
        detector.refresh_blocked(board);
        let connections = self.connect_to_group(board, position)?;

        let capture = match detector.first_reachable_polygon(board, self.owner) {
            Some(polygon) => self.draw_capture(board, detector, polygon),
            None => None,
        };

        Ok(MoveOutcome {
            position,
            tier,
            connections,
            capture,
        })
    }

    /// Draw `polygon` and refresh blocking. Returns the polygon only if it
    /// blocked something new.
    ///
    /// Ring edges come from the candidate graph: adjacent, unblocked cells
    /// of our own, which `Board::connect` always accepts. Missing edges are
    /// collected before any is drawn.
    fn draw_capture(
        &self,
        board: &mut Board,
        detector: &PolygonDetector,
        polygon: Polygon,
    ) -> Option<Polygon> {
        let before = board.blocked_positions();
        let missing: Vec<(Position, Position)> = polygon
            .edges()
            .filter(|&(a, b)| !board.graph().contains_edge(a, b))
            .collect();
        for &(a, b) in &missing {
            if let Err(err) = board.connect(a, b) {
                warn!(%a, %b, %err, "capture edge rejected");
            }
        }

        let blocked = detector.refresh_blocked(board);
        let newly = board
            .blocked_positions()
            .into_iter()
            .filter(|cell| !before.contains(cell))
            .count();
        if newly == 0 {
            trace!(owner = %self.owner, new_edges = missing.len(), "loop captures nothing new");
            return None;
        }

        debug!(owner = %self.owner, len = polygon.len(), new_edges = missing.len(), newly, blocked, "captured");
        Some(polygon)
    }

    /// Run the tier policy, re-checking each choice against the board.
    fn select_target(
        &mut self,
        board: &Board,
        last_placed: Position,
    ) -> EngineResult<(Position, MoveTier)> {
        for round in 0..MAX_SELECTION_ROUNDS {
            let (target, tier) = self.pick(board, last_placed)?;
            if board.is_empty_cell(target) {
                return Ok((target, tier));
            }
            warn!(round, %target, %tier, "selected cell is not free, retrying");
        }
        board
            .first_unowned()
            .map(|pos| (pos, MoveTier::Fallback))
            .ok_or(EngineError::BoardFull)
    }

    fn pick(&mut self, board: &Board, last_placed: Position) -> EngineResult<(Position, MoveTier)> {
        if let Some(target) = threat_target(board, self.owner) {
            return Ok((target, MoveTier::ThreatResponse));
        }

        let has_cells = board.owned_by(self.owner).next().is_some();
        if has_cells {
            if let Some(target) = bridge_target(board, self.owner) {
                return Ok((target, MoveTier::Bridge));
            }
        }

        let radius = if has_cells {
            self.probe_radius
        } else {
            self.opening_radius
        };
        if let Some(target) =
            probe_target(board, &mut self.source, last_placed, radius, self.probe_attempts)
        {
            return Ok((target, MoveTier::Probe));
        }

        board
            .first_unowned()
            .map(|pos| (pos, MoveTier::Fallback))
            .ok_or(EngineError::BoardFull)
    }

    /// Connect `position` to every unblocked own cell around it.
    fn connect_to_group(&self, board: &mut Board, position: Position) -> EngineResult<Vec<Position>> {
        if board.is_blocked(position) {
            debug!(%position, "placed inside an opposing loop, left unconnected");
            return Ok(Vec::new());
        }

        let mut connected = Vec::new();
        for nb in position.neighbors() {
            if board.owner_at(nb) == self.owner && !board.is_blocked(nb) {
                board.connect(position, nb)?;
                connected.push(nb);
            }
        }
        Ok(connected)
    }
}
