//! A human-versus-computer session over one board.
//!
//! `Game` is the surface the input and rendering layers talk to. It
//! validates every request before touching the board, keeps the blocked
//! flags current after each mutation, and drives the automated reply.
//!
//! ## Turn flow
//!
//! 1. The human places a cell (`play_turn` or `place`)
//! 2. Blocking is refreshed and the human's capture feasibility recorded
//! 3. The computer answers through its `MoveSelector`
//!
//! Human connections are explicit (`connect`); the computer wires its own
//! cells as part of its move.

use tracing::{debug, warn};

use crate::board::Board;
use crate::core::{EngineConfig, EngineError, EngineResult, GameRng, Owner, Position, ProbeSource};
use crate::opponent::{MoveOutcome, MoveSelector};
use crate::polygon::{Polygon, PolygonDetector};

use super::request::{ConnectRequest, PlaceRequest};
use super::snapshot::BoardSnapshot;

/// Result of a full human turn plus the automated reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// Cell the human claimed.
    pub human_move: Position,
    /// Whether the human can close a loop capturing a not-yet-blocked cell
    /// after that move.
    pub human_can_capture: bool,
    /// The computer's reply; `None` if the human filled the last cell.
    pub reply: Option<MoveOutcome>,
}

/// One game session.
#[derive(Clone, Debug)]
pub struct Game<S: ProbeSource = GameRng> {
    config: EngineConfig,
    board: Board,
    detector: PolygonDetector,
    opponent: MoveSelector<S>,
    human: Owner,
    human_can_capture: bool,
}

impl Game<GameRng> {
    /// New session with the human as `PlayerA` and a seeded opponent.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        let source = GameRng::new(config.seed);
        Self::with_source(config, source)
    }
}

impl<S: ProbeSource> Game<S> {
    /// New session whose opponent draws probes from `source`.
    pub fn with_source(config: EngineConfig, source: S) -> EngineResult<Self> {
        let board = Board::from_config(&config)?;
        let human = Owner::PlayerA;
        let opponent = MoveSelector::new(human.opponent(), source).with_config(&config);

        Ok(Self {
            config,
            board,
            detector: PolygonDetector::new(),
            opponent,
            human,
            human_can_capture: false,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn detector(&self) -> &PolygonDetector {
        &self.detector
    }

    /// The human's side.
    #[must_use]
    pub fn human(&self) -> Owner {
        self.human
    }

    /// The computer's side.
    #[must_use]
    pub fn computer(&self) -> Owner {
        self.opponent.owner()
    }

    /// Capture feasibility recorded after the human's last placement.
    #[must_use]
    pub fn human_can_capture(&self) -> bool {
        self.human_can_capture
    }

    // === Requests ===

    /// Claim a cell for `request.owner`.
    ///
    /// Fails with `OutOfRange`, `NotAPlayer` or `AlreadyOwned` without
    /// touching the board. A cell placed inside an existing loop is
    /// blocked immediately.
    pub fn place(&mut self, request: PlaceRequest) -> EngineResult<()> {
        if let Err(err) = self.board.place(request.position, request.owner) {
            warn!(?request, %err, "place rejected");
            return Err(err);
        }
        self.detector.refresh_blocked(&mut self.board);
        debug!(position = %request.position, owner = %request.owner, "placed");
        Ok(())
    }

    /// Draw a connection between two cells of `request.owner`.
    ///
    /// Checked in order: both ends on the grid (`OutOfRange`), neighbors
    /// (`NotAdjacent`), both held by the requesting owner (`NotOwned`),
    /// neither captured (`Blocked`). Rejections leave the board untouched.
    pub fn connect(&mut self, request: ConnectRequest) -> EngineResult<()> {
        if let Err(err) = self.validate_connect(&request) {
            warn!(?request, %err, "connect rejected");
            return Err(err);
        }
        self.board.connect(request.from, request.to)?;
        let blocked = self.detector.refresh_blocked(&mut self.board);
        debug!(from = %request.from, to = %request.to, blocked, "connected");
        Ok(())
    }

    fn validate_connect(&self, request: &ConnectRequest) -> EngineResult<()> {
        let ConnectRequest { from, to, owner } = *request;
        for pos in [from, to] {
            self.board.cell_at(pos)?;
        }
        if !from.is_adjacent(to) {
            return Err(EngineError::NotAdjacent { from, to });
        }
        for pos in [from, to] {
            if self.board.owner_at(pos) != owner || !owner.is_player() {
                return Err(EngineError::NotOwned { position: pos });
            }
        }
        for pos in [from, to] {
            if self.board.is_blocked(pos) {
                return Err(EngineError::Blocked { position: pos });
            }
        }
        Ok(())
    }

    // === Turns ===

    /// Let the computer move, probing around `last_placed`.
    pub fn computer_turn(&mut self, last_placed: Position) -> EngineResult<MoveOutcome> {
        self.opponent
            .choose_and_apply_move(&mut self.board, &self.detector, last_placed)
    }

    /// Human placement followed by the automated reply.
    pub fn play_turn(&mut self, position: Position) -> EngineResult<TurnReport> {
        self.place(PlaceRequest::new(position, self.human))?;
        self.human_can_capture = self.detector.can_capture(&self.board, self.human);
        if self.human_can_capture {
            debug!(%position, "human can close a loop");
        }

        let reply = match self.computer_turn(position) {
            Ok(outcome) => Some(outcome),
            Err(EngineError::BoardFull) => None,
            Err(err) => return Err(err),
        };

        Ok(TurnReport {
            human_move: position,
            human_can_capture: self.human_can_capture,
            reply,
        })
    }

    // === Queries ===

    /// A loop the human could close right now that captures a cell not
    /// already blocked, if any.
    #[must_use]
    pub fn human_capture_hint(&self) -> Option<Polygon> {
        self.detector.first_capturing_polygon(&self.board, self.human)
    }

    /// Renderer view of the current board.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(&self.board, self.human_can_capture)
    }
}
