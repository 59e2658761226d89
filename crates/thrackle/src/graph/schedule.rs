//! Edge scheduler: a connected-prefix order of the edges.

use std::collections::HashSet;

use super::Graph;
use crate::error::{Result, ThrackleError, MAX_EDGES};

/// One edge in construction order; `from` is embedded before `to` whenever
/// the edge is not the first one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledEdge {
    pub from: usize,
    pub to: usize,
}

impl ScheduledEdge {
    #[inline]
    pub fn touches(&self, v: usize) -> bool {
        self.from == v || self.to == v
    }

    #[inline]
    pub fn is_adjacent(&self, other: &ScheduledEdge) -> bool {
        self.touches(other.from) || self.touches(other.to)
    }
}

/// Scheduled edges plus the counts that size the rotation-system arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeSchedule {
    pub vertex_count: usize,
    pub edges: Vec<ScheduledEdge>,
    /// Crossings in every thrackle embedding: one per non-adjacent edge pair.
    pub crossing_count: usize,
}

impl EdgeSchedule {
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Number of non-adjacent edge pairs, `(E² + E − Σ deg²) / 2`.
pub fn crossing_count(graph: &Graph) -> usize {
    let e = graph.edge_count();
    let adjacent: usize = (0..graph.vertex_count())
        .map(|v| graph.degree(v) * graph.degree(v).saturating_sub(1) / 2)
        .sum();
    e * e.saturating_sub(1) / 2 - adjacent
}

/// Order the edges by a depth-first sweep from vertex 0 so that the edges
/// `0..=i` induce a connected subgraph for every `i`.
///
/// Fails eagerly on graphs the constructor cannot handle: no edges, more than
/// [`MAX_EDGES`] edges, or a disconnected vertex set. Graphs with more than
/// `edges + 1` vertices are rejected before any per-vertex work.
pub fn schedule_edges(graph: &Graph) -> Result<EdgeSchedule> {
    let n = graph.vertex_count();
    let m = graph.edge_count();
    if m > MAX_EDGES {
        return Err(ThrackleError::TooManyEdges {
            edges: m,
            capacity: MAX_EDGES,
        });
    }
    if m == 0 {
        return Err(ThrackleError::invalid_graph("graph has no edges"));
    }

    if n > m + 1 {
        return Err(ThrackleError::Disconnected);
    }

    let mut visited = vec![false; n];
    let mut stored: HashSet<(usize, usize)> = HashSet::with_capacity(m);
    let mut stack = vec![0usize];
    visited[0] = true;
    let mut edges = Vec::with_capacity(m);
    while let Some(current) = stack.pop() {
        for &nb in graph.neighbours(current) {
            if !visited[nb] {
                visited[nb] = true;
                stack.push(nb);
            }
            if stored.insert((current.min(nb), current.max(nb))) {
                edges.push(ScheduledEdge {
                    from: current,
                    to: nb,
                });
            }
        }
    }
    if visited.iter().any(|&seen| !seen) {
        return Err(ThrackleError::Disconnected);
    }
    Ok(EdgeSchedule {
        vertex_count: n,
        edges,
        crossing_count: crossing_count(graph),
    })
}
