//! Cycle search over an adjacency view.
//!
//! Depth-first traversal with back-edge detection, run iteratively with an
//! explicit frame stack so that deep boards cannot overflow the call stack.
//!
//! Roots and neighbors are visited in ascending row-major order, so the
//! "first" cycle is reproducible. When the traversal meets a neighbor that
//! is visited, still on the current path, and not the immediate parent, the
//! path from that neighbor to the current node is a cycle. Only cycles of at
//! least `MIN_CYCLE_LEN` vertices are reported.

use std::ops::ControlFlow;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::Position;

use super::adjacency::Adjacency;
use super::shape::{Polygon, MIN_CYCLE_LEN};

struct Frame {
    node: Position,
    parent: Option<Position>,
    neighbors: Vec<Position>,
    next: usize,
}

impl Frame {
    fn enter(adj: &Adjacency, node: Position, parent: Option<Position>) -> Self {
        Self {
            node,
            parent,
            neighbors: adj.get(&node).map(|s| s.iter().copied().collect()).unwrap_or_default(),
            next: 0,
        }
    }
}

/// Walk `adj`, handing every qualifying cycle (in path order) to `visit`.
///
/// Stops early when `visit` returns `ControlFlow::Break`.
fn walk<F>(adj: &Adjacency, mut visit: F)
where
    F: FnMut(&[Position]) -> ControlFlow<()>,
{
    let mut visited: FxHashSet<Position> = FxHashSet::default();

    for &root in adj.keys() {
        if !visited.insert(root) {
            continue;
        }

        let mut path = vec![root];
        let mut on_path: FxHashMap<Position, usize> = FxHashMap::default();
        on_path.insert(root, 0);
        let mut frames = vec![Frame::enter(adj, root, None)];

        while let Some(frame) = frames.last_mut() {
            let Some(&neighbor) = frame.neighbors.get(frame.next) else {
                on_path.remove(&frame.node);
                path.pop();
                frames.pop();
                continue;
            };
            frame.next += 1;

            if frame.parent == Some(neighbor) {
                continue;
            }
            let node = frame.node;

            if visited.insert(neighbor) {
                on_path.insert(neighbor, path.len());
                path.push(neighbor);
                frames.push(Frame::enter(adj, neighbor, Some(node)));
            } else if let Some(&start) = on_path.get(&neighbor) {
                let cycle = &path[start..];
                if cycle.len() >= MIN_CYCLE_LEN && visit(cycle).is_break() {
                    return;
                }
            }
        }
    }
}

/// First qualifying cycle accepted by `accept`, in traversal order.
#[must_use]
pub fn first_cycle<F>(adj: &Adjacency, mut accept: F) -> Option<Polygon>
where
    F: FnMut(&[Position]) -> bool,
{
    let mut found = None;
    walk(adj, |cycle| {
        if accept(cycle) {
            found = Some(Polygon::new(cycle.to_vec()));
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    found
}

/// Every back-edge cycle accepted by `accept`, deduplicated by canonical key.
#[must_use]
pub fn all_cycles<F>(adj: &Adjacency, mut accept: F) -> Vec<Polygon>
where
    F: FnMut(&[Position]) -> bool,
{
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    walk(adj, |cycle| {
        if accept(cycle) {
            let polygon = Polygon::new(cycle.to_vec());
            if seen.insert(polygon.canonical_key()) {
                out.push(polygon);
            }
        }
        ControlFlow::Continue(())
    });
    out
}
