//! Conversion between the arena and plain rotation lists.
//!
//! A rotation list gives, per vertex in id order, the neighbor ids in `next`
//! order starting at the vertex anchor. This is the content of a
//! thrackle_code record.

use std::collections::{HashMap, VecDeque};

use super::types::{Capacity, HalfEdge, HalfEdgeId, VertexSlot, UNNUMBERED};
use super::RotationSystem;
use crate::error::{Result, ThrackleError};

impl RotationSystem {
    /// Build a system from rotation lists; vertices `0..originals` are
    /// original, the rest are crossings.
    ///
    /// Inverses are paired by matching `u → v` with the earliest unmatched
    /// `v → u`. Original edge numbers are unknown and set to [`UNNUMBERED`].
    pub fn from_rotations(originals: usize, rotations: &[Vec<usize>]) -> Result<Self> {
        let total = rotations.len();
        if total < originals {
            return Err(ThrackleError::malformed(format!(
                "{originals} original vertices but only {total} rotation lists"
            )));
        }
        let half_edges: usize = rotations.iter().map(Vec::len).sum();
        let mut rs = Self::with_capacity(Capacity {
            original_vertices: originals,
            max_crossings: total - originals,
            max_half_edges: half_edges,
        });
        rs.crossing_count = total - originals;

        let mut unmatched: HashMap<(usize, usize), VecDeque<HalfEdgeId>> = HashMap::new();
        for (v, list) in rotations.iter().enumerate() {
            let base = rs.half_edges.len();
            let d = list.len();
            for (i, &w) in list.iter().enumerate() {
                if w >= total {
                    return Err(ThrackleError::malformed(format!(
                        "vertex {v} has neighbor {w} outside 0..{total}"
                    )));
                }
                if w == v {
                    return Err(ThrackleError::malformed(format!("vertex {v} has a loop")));
                }
                let id = HalfEdgeId(base + i);
                let inverse = match unmatched.get_mut(&(w, v)).and_then(VecDeque::pop_front) {
                    Some(back) => {
                        rs.half_edges[back.0].inverse = id;
                        back
                    }
                    None => {
                        unmatched.entry((v, w)).or_default().push_back(id);
                        id
                    }
                };
                let (start_kind, end_kind) = (rs.kind(v), rs.kind(w));
                rs.half_edges.push(HalfEdge {
                    start: v,
                    end: w,
                    start_kind,
                    end_kind,
                    edge: UNNUMBERED,
                    next: HalfEdgeId(base + (i + 1) % d),
                    prev: HalfEdgeId(base + (i + d - 1) % d),
                    inverse,
                });
            }
            rs.vertices[v] = VertexSlot {
                first: (d > 0).then_some(HalfEdgeId(base)),
                degree: d,
            };
        }
        if let Some(((v, w), _)) = unmatched.iter().find(|(_, q)| !q.is_empty()) {
            return Err(ThrackleError::malformed(format!(
                "half-edge {v} -> {w} has no inverse {w} -> {v}"
            )));
        }
        Ok(rs)
    }

    /// Rotation lists of the live vertices, each starting at the anchor.
    pub fn to_rotations(&self) -> Vec<Vec<usize>> {
        (0..self.vertex_count())
            .map(|v| self.rotation(v).map(|h| self[h].end).collect())
            .collect()
    }
}
