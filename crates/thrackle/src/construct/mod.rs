//! Embedding constructor: exhaustive backtracking over thrackle drawings.
//!
//! Purpose
//! - Weave the scheduled edges one at a time into a shared rotation system.
//!   Edge `k` must cross every earlier edge it shares no endpoint with, and
//!   no other. The non-crossed set tracks which crossings are still owed.
//! - Every complete drawing is handed to an [`EmbeddingSink`] while the
//!   rotation system is borrowed; sinks copy what they need.
//!
//! Layout
//! - `types.rs`: `SearchCfg`, `SearchStats`, `EdgeSet`.
//! - `weave.rs`: the `Constructor` runner (seeding, weaving, landing).
//!
//! Notes
//! - States run Seeding → Weaving(k) → Complete. A branch that finds no
//!   candidate crossing or landing corner just returns; it is counted in
//!   `SearchStats::dead_ends` and is not an error.

mod types;
mod weave;

pub use types::{EdgeSet, SearchCfg, SearchStats};
pub use weave::Constructor;

use crate::error::Result;
use crate::graph::{schedule_edges, Graph};
use crate::rotation::RotationSystem;

/// Receiver of completed embeddings. Errors abort the search after the
/// rotation system has been unwound.
pub trait EmbeddingSink {
    fn accept(&mut self, rs: &RotationSystem) -> Result<()>;
}

impl<F> EmbeddingSink for F
where
    F: FnMut(&RotationSystem) -> Result<()>,
{
    fn accept(&mut self, rs: &RotationSystem) -> Result<()> {
        self(rs)
    }
}

/// Schedule `graph` and enumerate its thrackle embeddings into `sink`.
pub fn enumerate_thrackles<S: EmbeddingSink + ?Sized>(
    graph: &Graph,
    cfg: SearchCfg,
    sink: &mut S,
) -> Result<SearchStats> {
    let schedule = schedule_edges(graph)?;
    Constructor::new(&schedule, cfg).run(sink)
}

/// Number of thrackle embeddings of `graph` (rooted, not up to isomorphism).
pub fn count_thrackles(graph: &Graph) -> Result<u64> {
    let mut ignore = |_: &RotationSystem| -> Result<()> { Ok(()) };
    Ok(enumerate_thrackles(graph, SearchCfg::default(), &mut ignore)?.embeddings)
}

/// Owned copies of every embedding, in search order.
pub fn collect_thrackles(graph: &Graph, cfg: SearchCfg) -> Result<Vec<RotationSystem>> {
    let mut out = Vec::new();
    let mut keep = |rs: &RotationSystem| -> Result<()> {
        out.push(rs.clone());
        Ok(())
    };
    enumerate_thrackles(graph, cfg, &mut keep)?;
    Ok(out)
}

#[cfg(test)]
mod tests;
