//! Planar predicates over grid positions.
//!
//! Positions are treated as points with `x = col`, `y = row`.
//!
//! - `orientation`: sign of the 2D cross product
//! - `segments_intersect`: orientation test with collinear overlap via
//!   bounding-box containment
//! - `point_in_polygon`: even–odd ray casting in +x
//!
//! Points exactly on a polygon boundary get whatever the ray-casting rule
//! yields; the result is deterministic but unspecified.

use std::cmp::Ordering;

use crate::core::Position;

/// Turn direction of `a → b → c`.
///
/// `Greater` for counter-clockwise, `Less` for clockwise, `Equal` when
/// collinear.
#[must_use]
pub fn orientation(a: Position, b: Position, c: Position) -> Ordering {
    let (x1, y1) = (b.x() - a.x(), b.y() - a.y());
    let (x2, y2) = (c.x() - a.x(), c.y() - a.y());
    (x1 * y2 - y1 * x2).cmp(&0)
}

/// True if `b` lies inside the bounding box of `a` and `c`.
fn within_box(a: Position, b: Position, c: Position) -> bool {
    a.col.min(c.col) <= b.col
        && b.col <= a.col.max(c.col)
        && a.row.min(c.row) <= b.row
        && b.row <= a.row.max(c.row)
}

/// True if segment `p1–p2` intersects segment `q1–q2`.
///
/// Touching and collinear overlap count as intersecting. Callers that want
/// shared endpoints to be non-crossing must filter those first (see
/// `Segment::crosses`).
#[must_use]
pub fn segments_intersect(p1: Position, p2: Position, q1: Position, q2: Position) -> bool {
    let o1 = orientation(p1, p2, q1);
    let o2 = orientation(p1, p2, q2);
    let o3 = orientation(q1, q2, p1);
    let o4 = orientation(q1, q2, p2);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Ordering::Equal && within_box(p1, q1, p2))
        || (o2 == Ordering::Equal && within_box(p1, q2, p2))
        || (o3 == Ordering::Equal && within_box(q1, p1, q2))
        || (o4 == Ordering::Equal && within_box(q1, p2, q2))
}

/// Even–odd point-in-polygon test.
///
/// `ring` is the polygon's vertices in traversal order; the closing edge
/// from last to first is implied. Rings with fewer than three vertices
/// enclose nothing.
#[must_use]
pub fn point_in_polygon(ring: &[Position], point: Position) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let (px, py) = (point.x() as f64, point.y() as f64);
    let mut inside = false;
    let mut j = ring.len() - 1;

    for i in 0..ring.len() {
        let (xi, yi) = (ring[i].x() as f64, ring[i].y() as f64);
        let (xj, yj) = (ring[j].x() as f64, ring[j].y() as f64);

        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// An undirected drawn or candidate edge, stored with its endpoints sorted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Segment {
    /// Lower endpoint (row-major).
    pub a: Position,
    /// Higher endpoint (row-major).
    pub b: Position,
}

impl Segment {
    /// Normalize `u–v` so that `Segment::new(u, v) == Segment::new(v, u)`.
    #[must_use]
    pub fn new(u: Position, v: Position) -> Self {
        if u <= v {
            Self { a: u, b: v }
        } else {
            Self { a: v, b: u }
        }
    }

    /// True if the two segments have an endpoint in common.
    #[must_use]
    pub fn shares_endpoint(&self, other: &Segment) -> bool {
        self.a == other.a || self.a == other.b || self.b == other.a || self.b == other.b
    }

    /// True if the segments cross. Segments sharing an endpoint never cross.
    #[must_use]
    pub fn crosses(&self, other: &Segment) -> bool {
        !self.shares_endpoint(other) && segments_intersect(self.a, self.b, other.a, other.b)
    }
}
