//! Breadth-first relabeling certificates.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::error::{Result, ThrackleError};
use crate::rotation::{Direction, HalfEdgeId, RotationSystem, VertexKind};

/// Relabeled rotation lists of one embedding from one root and direction.
///
/// `code` holds, per relabeled vertex in id order, the relabeled neighbors in
/// rotation order followed by the sentinel `vertices + crossings`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Certificate {
    pub vertices: usize,
    pub crossings: usize,
    /// Directed edges, i.e. twice the number of physical edges.
    pub half_edges: usize,
    pub code: Vec<usize>,
}

impl Certificate {
    #[inline]
    pub fn sentinel(&self) -> usize {
        self.vertices + self.crossings
    }
}

impl Ord for Certificate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.vertices
            .cmp(&other.vertices)
            .then(self.crossings.cmp(&other.crossings))
            .then(self.half_edges.cmp(&other.half_edges))
            .then(self.code.len().cmp(&other.code.len()))
            .then_with(|| self.code.cmp(&other.code))
    }
}

impl PartialOrd for Certificate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Certificate of `rs` rooted at `root`, walking rotations in direction `dir`.
pub fn certificate_from(rs: &RotationSystem, root: HalfEdgeId, dir: Direction) -> Result<Certificate> {
    let mut canonizer = Canonizer::new(rs);
    canonizer.relabel(root, dir)?;
    Ok(canonizer.emit(dir))
}

/// Minimum certificate over every half-edge at every original vertex and
/// both directions; equal for isomorphic or mirrored embeddings.
pub fn canonical_certificate(rs: &RotationSystem) -> Result<Certificate> {
    Canonizer::new(rs).canonical()
}

/// Scratch buffers reused across the roots of one embedding.
struct Canonizer<'a> {
    rs: &'a RotationSystem,
    label: Vec<Option<usize>>,
    /// Relabeled id → (vertex, half-edge its rotation is read from).
    order: Vec<(usize, HalfEdgeId)>,
    queue: VecDeque<(usize, HalfEdgeId)>,
}

impl<'a> Canonizer<'a> {
    fn new(rs: &'a RotationSystem) -> Self {
        let total = rs.vertex_count();
        Self {
            rs,
            label: vec![None; total],
            order: Vec::with_capacity(total),
            queue: VecDeque::with_capacity(total),
        }
    }

    fn canonical(&mut self) -> Result<Certificate> {
        let mut best: Option<Certificate> = None;
        for v in 0..self.rs.original_count() {
            let roots: Vec<HalfEdgeId> = self.rs.rotation(v).collect();
            for root in roots {
                for dir in Direction::BOTH {
                    self.relabel(root, dir)?;
                    let cert = self.emit(dir);
                    if best.as_ref().map_or(true, |b| cert < *b) {
                        best = Some(cert);
                    }
                }
            }
        }
        best.ok_or_else(|| ThrackleError::malformed("embedding has no edges at original vertices"))
    }

    /// Label vertices in breadth-first order of first visit; originals and
    /// crossings are numbered separately, crossings after all originals.
    fn relabel(&mut self, root: HalfEdgeId, dir: Direction) -> Result<()> {
        let rs = self.rs;
        let nv = rs.original_count();
        let total = rs.vertex_count();
        self.label.iter_mut().for_each(|l| *l = None);
        self.order.clear();
        self.order.resize(total, (0, root));
        self.queue.clear();

        let mut next_original = 0;
        let mut next_crossing = nv;
        let mut visit = |label: &mut Vec<Option<usize>>, v: usize| -> Option<usize> {
            if label[v].is_some() {
                return None;
            }
            let id = match rs.kind(v) {
                VertexKind::Original => &mut next_original,
                VertexKind::Crossing => &mut next_crossing,
            };
            label[v] = Some(*id);
            *id += 1;
            label[v]
        };

        let start = rs[root].start;
        if let Some(id) = visit(&mut self.label, start) {
            self.order[id] = (start, root);
            self.queue.push_back((start, root));
        }
        while let Some((_, anchor)) = self.queue.pop_front() {
            for h in rs.rotation_from(anchor, dir) {
                let w = rs[h].end;
                let back = rs[h].inverse;
                if let Some(id) = visit(&mut self.label, w) {
                    self.order[id] = (w, back);
                    self.queue.push_back((w, back));
                }
            }
        }
        if next_original != nv || next_crossing != total {
            return Err(ThrackleError::malformed(format!(
                "embedding is not connected: {} of {total} vertices reachable",
                next_original + next_crossing - nv
            )));
        }
        Ok(())
    }

    fn emit(&self, dir: Direction) -> Certificate {
        let rs = self.rs;
        let sentinel = rs.vertex_count();
        let mut code = Vec::with_capacity(rs.half_edge_count() + sentinel);
        for &(_, anchor) in &self.order {
            for h in rs.rotation_from(anchor, dir) {
                code.extend(self.label[rs[h].end]);
            }
            code.push(sentinel);
        }
        Certificate {
            vertices: rs.original_count(),
            crossings: rs.crossing_count(),
            half_edges: rs.half_edge_count(),
            code,
        }
    }
}
