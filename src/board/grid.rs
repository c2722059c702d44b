//! The board: per-cell ownership plus the connection graph.
//!
//! `Board` is the single source of truth for "who owns cell (r, c)" and for
//! which cells are connected. Keeping both in one entity means a connection
//! can never reference a cell whose ownership the graph does not know.
//!
//! ## Mutations
//!
//! - `place`: Unowned → player, once per cell
//! - `connect`: add an edge between two owned 8-neighbors
//! - blocked flags: rewritten wholesale by the polygon detector
//!
//! Nothing is ever removed.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::{EngineConfig, EngineError, EngineResult, Owner, Position};

use super::dot::Dot;
use super::graph::ConnectionGraph;

/// Fixed-size rectangular grid of dots with their connections.
#[derive(Clone, Debug)]
pub struct Board {
    width: i32,
    height: i32,
    /// Row-major cells.
    cells: Vec<Dot>,
    graph: ConnectionGraph,
}

impl Board {
    /// Create an empty `width` x `height` board.
    ///
    /// Panics if either dimension is zero or does not fit in `i32`.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "Board must have at least one cell");
        assert!(
            width <= i32::MAX as usize && height <= i32::MAX as usize,
            "Board dimensions must fit in i32"
        );
        let (width, height) = (width as i32, height as i32);

        let cells = (0..height)
            .flat_map(|row| (0..width).map(move |col| Dot::empty(Position::new(row, col))))
            .collect();

        Self {
            width,
            height,
            cells,
            graph: ConnectionGraph::new(),
        }
    }

    /// Create an empty board sized from a validated configuration.
    pub fn from_config(config: &EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::new(config.grid_width, config.grid_height))
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// True if `pos` lies on the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.height).contains(&pos.row) && (0..self.width).contains(&pos.col)
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| (pos.row * self.width + pos.col) as usize)
    }

    fn checked_index(&self, pos: Position) -> EngineResult<usize> {
        self.index(pos)
            .ok_or(EngineError::OutOfRange { position: pos })
    }

    // === Cells ===

    /// The dot at `pos`.
    pub fn cell_at(&self, pos: Position) -> EngineResult<&Dot> {
        let idx = self.checked_index(pos)?;
        Ok(&self.cells[idx])
    }

    /// Owner of `pos`; `Unowned` for off-grid positions.
    #[must_use]
    pub fn owner_at(&self, pos: Position) -> Owner {
        self.index(pos).map_or(Owner::Unowned, |idx| self.cells[idx].owner)
    }

    /// True if `pos` is on the grid and nobody owns it.
    #[must_use]
    pub fn is_empty_cell(&self, pos: Position) -> bool {
        self.index(pos).map_or(false, |idx| self.cells[idx].is_empty())
    }

    /// Blocked flag of `pos`; `false` for off-grid positions.
    #[must_use]
    pub fn is_blocked(&self, pos: Position) -> bool {
        self.index(pos).map_or(false, |idx| self.cells[idx].blocked)
    }

    /// Mark `pos` for `owner`.
    ///
    /// Fails with `OutOfRange`, `AlreadyOwned`, or `NotAPlayer`. No other
    /// side effects.
    pub fn place(&mut self, pos: Position, owner: Owner) -> EngineResult<()> {
        let idx = self.checked_index(pos)?;
        if !owner.is_player() {
            return Err(EngineError::NotAPlayer);
        }
        let dot = &mut self.cells[idx];
        if !dot.is_empty() {
            return Err(EngineError::AlreadyOwned { position: pos });
        }
        dot.owner = owner;
        Ok(())
    }

    /// First unowned cell in row-major order, or `None` if the board is full.
    #[must_use]
    pub fn first_unowned(&self) -> Option<Position> {
        self.cells.iter().find(|d| d.is_empty()).map(|d| d.position)
    }

    /// True if every cell has an owner.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.first_unowned().is_none()
    }

    /// All dots, row-major.
    pub fn dots(&self) -> impl Iterator<Item = &Dot> {
        self.cells.iter()
    }

    /// Positions held by `owner`, row-major.
    pub fn owned_by(&self, owner: Owner) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .filter(move |d| d.owner == owner)
            .map(|d| d.position)
    }

    // === Connections ===

    /// Draw a connection between `a` and `b`.
    ///
    /// Fails with `OutOfRange` if either end is off the grid, `NotAdjacent`
    /// unless the Chebyshev distance is exactly 1, and `NotOwned` if either
    /// end is unowned. Same-owner endpoints are not enforced here; the
    /// session layer checks that. Idempotent.
    pub fn connect(&mut self, a: Position, b: Position) -> EngineResult<()> {
        let ia = self.checked_index(a)?;
        let ib = self.checked_index(b)?;
        if !a.is_adjacent(b) {
            return Err(EngineError::NotAdjacent { from: a, to: b });
        }
        for (idx, pos) in [(ia, a), (ib, b)] {
            if self.cells[idx].is_empty() {
                return Err(EngineError::NotOwned { position: pos });
            }
        }
        self.graph.link(a, b);
        Ok(())
    }

    /// Cells directly connected to `pos`.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        self.graph.neighbors(pos)
    }

    /// True if `pos` has at least one connection.
    #[must_use]
    pub fn has_any_connection(&self, pos: Position) -> bool {
        self.graph.has_any_connection(pos)
    }

    /// Read-only view of the connection graph.
    #[must_use]
    pub fn graph(&self) -> &ConnectionGraph {
        &self.graph
    }

    // === Blocking ===

    pub(crate) fn clear_blocked(&mut self) {
        for dot in &mut self.cells {
            dot.blocked = false;
        }
    }

    pub(crate) fn set_blocked(&mut self, pos: Position) {
        if let Some(idx) = self.index(pos) {
            self.cells[idx].blocked = true;
        }
    }

    /// Every blocked cell, row-major.
    #[must_use]
    pub fn blocked_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|d| d.blocked)
            .map(|d| d.position)
            .collect()
    }

    // === Rendering queries ===

    /// Each position held by `owner` mapped to its connection set.
    #[must_use]
    pub fn connections_of(&self, owner: Owner) -> BTreeMap<Position, BTreeSet<Position>> {
        self.owned_by(owner)
            .map(|pos| (pos, self.graph.neighbors(pos).collect()))
            .collect()
    }
}
