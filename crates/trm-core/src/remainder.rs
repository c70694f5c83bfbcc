//! Link remainder: per-point count of broken edges over the deduplicated lattice graph.
//!
//! Every lattice point emits its four forward links (Right, DownLeft, Down,
//! DownRight), which lists each undirected edge of the 8-connected lattice
//! exactly once. Broken edges then add one to the tally of each endpoint.
//!
//! Interior points touch at most 8 edges. Clamping at the border can emit
//! self-loops (both endpoints on the same point, counted twice) and edges whose
//! far end is a clamped pixel that is not itself a lattice point (never
//! reported, since only lattice points are looked up).
use std::collections::HashMap;

use crate::direction::Direction;
use crate::exec::map_points;
use crate::gradient::{GradientField, Threshold};
use crate::lattice::GridPoint;
use crate::link::{Link, LinkState};

/// One undirected lattice edge with its classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub link: Link,
    pub state: LinkState,
}

/// Forward edges of every lattice point, grouped by point in lattice order.
pub fn forward_edges(
    field: &GradientField,
    threshold: &Threshold,
    points: &[GridPoint],
    step: usize,
) -> Vec<Edge> {
    map_points(points, |p| {
        Direction::FORWARD.map(|d| {
            let link = Link::new(p, d, step, field);
            Edge {
                link,
                state: link.classify(field, threshold),
            }
        })
    })
    .into_iter()
    .flatten()
    .collect()
}

/// Broken-edge degree of each point, aligned with `points`.
pub fn broken_degrees(points: &[GridPoint], edges: &[Edge]) -> Vec<u32> {
    let mut touched: HashMap<GridPoint, u32> = HashMap::new();
    for edge in edges.iter().filter(|e| e.state.is_broken()) {
        *touched.entry(edge.link.from).or_insert(0) += 1;
        *touched.entry(edge.link.to).or_insert(0) += 1;
    }
    points
        .iter()
        .map(|p| touched.get(p).copied().unwrap_or(0))
        .collect()
}
