//! Target heuristics for the automated opponent.
//!
//! Each tier is a pure function of the board (plus a probe source for the
//! random tier) returning an empty in-range cell, or `None` to fall through
//! to the next tier. None of them loops unboundedly.

use tracing::trace;

use crate::board::Board;
use crate::core::{Owner, Position, ProbeSource};

/// Distance-2 offsets scanned by the bridge tier, in scan order. The paired
/// distance-1 cell is the offset halved.
pub const BRIDGE_OFFSETS: [(i32, i32); 8] = [
    (2, 0),
    (-2, 0),
    (0, 2),
    (0, -2),
    (2, 2),
    (2, -2),
    (-2, 2),
    (-2, -2),
];

/// Threat response: an empty orthogonal neighbor of an exposed opposing cell.
///
/// Opposing cells are scanned row-major; each cell's orthogonal neighbors
/// in `ORTHOGONAL_OFFSETS` order. Off-grid neighbors are skipped. A
/// neighbor held by the scanned cell's own side marks the cell safe and
/// ends its scan; one held by `owner` is passed over; the first empty one
/// is the target.
#[must_use]
pub fn threat_target(board: &Board, owner: Owner) -> Option<Position> {
    let opponent = owner.opponent();
    if !opponent.is_player() {
        return None;
    }

    for cell in board.owned_by(opponent) {
        for nb in cell.orthogonal() {
            if !board.contains(nb) {
                continue;
            }
            match board.owner_at(nb) {
                o if o == opponent => break,
                Owner::Unowned => {
                    trace!(%cell, target = %nb, "exposed opposing cell");
                    return Some(nb);
                }
                _ => {}
            }
        }
    }
    None
}

/// Bridge: the empty cell between two of `owner`'s cells at distance 2,
/// where the far cell is already connected to something.
///
/// The connection is required of the far cell, not the middle one. The
/// middle cell must be empty, and an empty cell never has a connection, so
/// requiring it there would disable this tier entirely.
#[must_use]
pub fn bridge_target(board: &Board, owner: Owner) -> Option<Position> {
    for cell in board.owned_by(owner) {
        for (dr, dc) in BRIDGE_OFFSETS {
            let far = cell.offset(dr, dc);
            let mid = cell.offset(dr / 2, dc / 2);
            if board.owner_at(far) == owner
                && board.has_any_connection(far)
                && board.is_empty_cell(mid)
            {
                trace!(%cell, %far, target = %mid, "bridge");
                return Some(mid);
            }
        }
    }
    None
}

/// Random probe: up to `attempts` offsets within `radius` of `center`.
///
/// Each attempt draws a row offset then a column offset. Off-grid and
/// occupied probes count as failed attempts.
pub fn probe_target<S: ProbeSource + ?Sized>(
    board: &Board,
    source: &mut S,
    center: Position,
    radius: i32,
    attempts: u32,
) -> Option<Position> {
    for attempt in 0..attempts {
        let dr = source.offset(radius);
        let dc = source.offset(radius);
        let probe = center.offset(dr, dc);
        if board.is_empty_cell(probe) {
            trace!(attempt, target = %probe, "probe hit");
            return Some(probe);
        }
    }
    None
}
