//! Depth-first weaving of the scheduled edges into a rotation system.
//!
//! Each recursive call is a choice point; the statement after the nested call
//! is its undo. Results of nested calls are only inspected after the undo, so
//! the arena unwinds in LIFO order on every exit path, errors included.

use tracing::{debug, trace};

use crate::error::Result;
use crate::graph::{EdgeSchedule, ScheduledEdge};
use crate::rotation::{Attach, Capacity, HalfEdgeId, RotationSystem};

use super::types::{EdgeSet, SearchCfg, SearchStats};
use super::EmbeddingSink;

/// Backtracking constructor owning the rotation system of one input graph.
pub struct Constructor {
    edges: Vec<ScheduledEdge>,
    /// Per edge `k`: earlier edges sharing an endpoint with it.
    incident: Vec<EdgeSet>,
    rs: RotationSystem,
    cfg: SearchCfg,
    stats: SearchStats,
}

impl Constructor {
    pub fn new(schedule: &EdgeSchedule, cfg: SearchCfg) -> Self {
        let edges = schedule.edges.clone();
        let incident = edges
            .iter()
            .enumerate()
            .map(|(k, e)| {
                edges[..k]
                    .iter()
                    .enumerate()
                    .filter(|(_, f)| f.is_adjacent(e))
                    .fold(EdgeSet::EMPTY, |set, (j, _)| set.with(j))
            })
            .collect();
        let cap = Capacity::for_thrackle(
            schedule.vertex_count,
            schedule.edge_count(),
            schedule.crossing_count,
        );
        Self {
            edges,
            incident,
            rs: RotationSystem::with_capacity(cap),
            cfg,
            stats: SearchStats {
                vertices: schedule.vertex_count,
                edges: schedule.edge_count(),
                crossings: schedule.crossing_count,
                ..SearchStats::default()
            },
        }
    }

    /// The working rotation system; empty outside of [`run`](Self::run).
    pub fn rotation_system(&self) -> &RotationSystem {
        &self.rs
    }

    /// Enumerate every thrackle embedding, handing each to `sink`.
    pub fn run<S: EmbeddingSink + ?Sized>(&mut self, sink: &mut S) -> Result<SearchStats> {
        self.stats.embeddings = 0;
        self.stats.dead_ends = 0;
        debug!(
            vertices = self.stats.vertices,
            edges = self.stats.edges,
            crossings = self.stats.crossings,
            "search started"
        );
        let result = self.seed(sink);
        debug!(
            embeddings = self.stats.embeddings,
            dead_ends = self.stats.dead_ends,
            "search finished"
        );
        result.map(|()| self.stats)
    }

    fn stopped(&self) -> bool {
        self.cfg
            .limit
            .is_some_and(|limit| self.stats.embeddings >= limit)
    }

    /// The first two edges have a single embedding up to the choice of corner.
    fn seed<S: EmbeddingSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        let Some(&first) = self.edges.first() else {
            return Ok(());
        };
        let h0 = self.rs.seed_edge(first.from, first.to, 0);
        let r = match self.edges.get(1).copied() {
            None => self.complete(sink),
            Some(second) => {
                // `from` of the second edge has degree 1: one corner only.
                let out = self.rs[h0].start;
                let corner = if out == second.from {
                    h0
                } else {
                    self.rs[h0].inverse
                };
                let h1 = self
                    .rs
                    .connect_to_vertex(corner, second.to, Attach::Isolated, 1);
                let r = self.weave(2, sink);
                self.rs.disconnect_vertex(h1);
                r
            }
        };
        self.rs.disconnect_vertex(h0);
        r
    }

    /// Embed edge `k` in every admissible way, then recurse to `k + 1`.
    fn weave<S: EmbeddingSink + ?Sized>(&mut self, k: usize, sink: &mut S) -> Result<()> {
        if k == self.edges.len() {
            return self.complete(sink);
        }
        let ScheduledEdge { from, to } = self.edges[k];
        let pending = EdgeSet::below(k).minus(self.incident[k]);
        let to_embedded = self.rs.degree(to) > 0;
        let corners: Vec<HalfEdgeId> = self.rs.rotation(from).collect();
        trace!(edge = k, from, to, pending = pending.len(), "weaving");

        for h in corners {
            if self.stopped() {
                break;
            }
            if pending.is_empty() && to_embedded {
                self.connect_direct(k, h, to, sink)?;
                continue;
            }
            let loose = if to_embedded {
                self.rs.scratch_vertex()
            } else {
                to
            };
            let tip = self.rs.connect_to_vertex(h, loose, Attach::Isolated, k);
            let r = self.thread(k, tip, pending, sink);
            self.rs.disconnect_vertex(tip);
            r?;
        }
        Ok(())
    }

    /// Edge `k` needs no crossings and ends at an embedded vertex: join it to
    /// every occurrence of `to` on the face at corner `h`.
    fn connect_direct<S: EmbeddingSink + ?Sized>(
        &mut self,
        k: usize,
        h: HalfEdgeId,
        to: usize,
        sink: &mut S,
    ) -> Result<()> {
        let start = self.rs[h].next;
        let anchors = self.landing_anchors(start, to);
        if anchors.is_empty() {
            self.stats.dead_ends += 1;
        }
        for anchor in anchors {
            if self.stopped() {
                break;
            }
            let out = self.rs.connect_to_vertex(h, to, Attach::After(anchor), k);
            let r = self.weave(k + 1, sink);
            self.rs.disconnect_vertex(out);
            r?;
        }
        Ok(())
    }

    /// Extend the loose end of `tip` across the edges in `pending`, in every
    /// order and through every reachable face position, then land it.
    fn thread<S: EmbeddingSink + ?Sized>(
        &mut self,
        k: usize,
        tip: HalfEdgeId,
        pending: EdgeSet,
        sink: &mut S,
    ) -> Result<()> {
        let to = self.edges[k].to;
        let face = self.rs[tip].inverse;
        if pending.is_empty() {
            if self.rs[tip].end == to {
                return self.weave(k + 1, sink);
            }
            let loose = self.rs[tip].end;
            let anchors = self.landing_anchors(face, to);
            if anchors.is_empty() {
                self.stats.dead_ends += 1;
            }
            for anchor in anchors {
                if self.stopped() {
                    break;
                }
                self.rs.land_loose_end(tip, to, anchor);
                let r = self.weave(k + 1, sink);
                self.rs.lift_loose_end(tip, loose);
                r?;
            }
            return Ok(());
        }

        let candidates: Vec<HalfEdgeId> = self
            .rs
            .trace_face(face)
            .filter(|&g| pending.contains(self.rs[g].edge))
            .collect();
        if candidates.is_empty() {
            self.stats.dead_ends += 1;
        }
        for g in candidates {
            if self.stopped() {
                break;
            }
            let crossed = self.rs[g].edge;
            let crossing = self.rs.insert_crossing(tip, g);
            let r = self.thread(k, crossing.continuation, pending.without(crossed), sink);
            self.rs.remove_crossing(crossing.vertex);
            r?;
        }
        Ok(())
    }

    /// Anchors at `to` for every corner of `to` on the face through `start`.
    fn landing_anchors(&self, start: HalfEdgeId, to: usize) -> Vec<HalfEdgeId> {
        self.rs
            .trace_face(start)
            .filter(|&x| self.rs[x].end == to)
            .map(|x| self.rs[x].inverse)
            .collect()
    }

    fn complete<S: EmbeddingSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        if self.stopped() {
            return Ok(());
        }
        if self.cfg.check_invariants {
            if let Err(err) = self.rs.check_invariants() {
                panic!("constructor produced a broken embedding: {err}");
            }
        }
        self.stats.embeddings += 1;
        trace!(
            index = self.stats.embeddings,
            crossings = self.rs.crossing_count(),
            "embedding complete"
        );
        sink.accept(&self.rs)
    }
}
