//! Input graphs: adjacency, edge scheduling, decoding and generators.
//!
//! Purpose
//! - `Graph` is a simple undirected graph with 0-based vertex ids.
//! - `schedule` orders the edges so every prefix is connected and derives
//!   the exact arena sizes of a thrackle embedding.
//! - `multicode` decodes the compact multicode format (1-based on the wire).
//! - `special` and `rand` provide named families and seeded random graphs.

pub mod multicode;
pub mod rand;
mod schedule;
pub mod special;

pub use multicode::{encode_multicode, MulticodeReader};
pub use schedule::{crossing_count, schedule_edges, EdgeSchedule, ScheduledEdge};

use crate::error::{Result, ThrackleError};

/// Simple undirected graph; neighbor lists keep insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Graph {
    pub fn new(vertices: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Graph on `vertices` vertices with the given 0-based edges.
    pub fn from_edges(vertices: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut g = Self::new(vertices);
        for &(u, v) in edges {
            g.add_edge(u, v)?;
        }
        Ok(g)
    }

    /// Add `{u, v}`; loops, duplicates and unknown vertices are rejected.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        let n = self.adj.len();
        if u >= n || v >= n {
            return Err(ThrackleError::invalid_graph(format!(
                "edge {u}-{v} references a vertex outside 0..{n}"
            )));
        }
        if u == v {
            return Err(ThrackleError::invalid_graph(format!("loop at vertex {u}")));
        }
        if self.adj[u].contains(&v) {
            return Err(ThrackleError::invalid_graph(format!("duplicate edge {u}-{v}")));
        }
        self.adj[u].push(v);
        self.adj[v].push(u);
        self.edge_count += 1;
        Ok(())
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    #[inline]
    pub fn neighbours(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    /// Each edge once, as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, ns)| ns.iter().filter(move |&&v| u < v).map(move |&v| (u, v)))
    }
}
