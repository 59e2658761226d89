//! Rotation system: half-edges in an index arena with per-vertex rotations.
//!
//! Purpose
//! - Shared representation of the constructor and the canonical-form engine.
//!   Vertices `0..nv` are original graph vertices, `nv..nv+ni` are crossings.
//! - `next`/`prev` order the half-edges around their start vertex, `inverse`
//!   pairs the two directions of a physical edge. A face is an orbit of
//!   `h ↦ inverse(h).next`.
//!
//! Layout
//! - `types.rs`: ids, records, attach modes.
//! - `ops.rs`: paired mutations (`insert_crossing`/`remove_crossing`,
//!   `connect_to_vertex`/`disconnect_vertex`, `land_loose_end`/`lift_loose_end`).
//!   The arena top is a stack pointer; every mutation is undone in LIFO order.
//! - `walk.rs`: lazy rotation and face walks.
//! - `build.rs`: conversion from and to plain rotation lists.

mod build;
mod ops;
mod types;
mod walk;

pub use types::{
    Attach, Capacity, Crossing, Direction, HalfEdge, HalfEdgeId, VertexKind, VertexSlot, UNNUMBERED,
};
pub use walk::{FaceWalk, RotationWalk};

use std::ops::Index;

/// Broken structural invariant, reported by [`RotationSystem::check_invariants`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("rotation invariant violated: {0}")]
pub struct InvariantError(pub String);

/// Half-edge arena plus vertex table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotationSystem {
    original_count: usize,
    crossing_count: usize,
    max_crossings: usize,
    max_half_edges: usize,
    vertices: Vec<VertexSlot>,
    half_edges: Vec<HalfEdge>,
}

impl RotationSystem {
    /// Empty system; one extra vertex slot past the crossings serves as the
    /// scratch loose end used while an edge is being woven.
    pub fn with_capacity(cap: Capacity) -> Self {
        Self {
            original_count: cap.original_vertices,
            crossing_count: 0,
            max_crossings: cap.max_crossings,
            max_half_edges: cap.max_half_edges,
            vertices: vec![VertexSlot::default(); cap.original_vertices + cap.max_crossings + 1],
            half_edges: Vec::with_capacity(cap.max_half_edges),
        }
    }

    #[inline]
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    #[inline]
    pub fn crossing_count(&self) -> usize {
        self.crossing_count
    }

    /// Live vertices: originals plus current crossings.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.original_count + self.crossing_count
    }

    #[inline]
    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    #[inline]
    pub fn scratch_vertex(&self) -> usize {
        self.original_count + self.max_crossings
    }

    #[inline]
    pub fn kind(&self, v: usize) -> VertexKind {
        if v < self.original_count {
            VertexKind::Original
        } else {
            VertexKind::Crossing
        }
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.vertices[v].degree
    }

    #[inline]
    pub fn first_half_edge(&self, v: usize) -> Option<HalfEdgeId> {
        self.vertices[v].first
    }

    /// Face successor `inverse(h).next`.
    #[inline]
    pub fn face_successor(&self, h: HalfEdgeId) -> HalfEdgeId {
        self[self[h].inverse].next
    }

    /// Half-edges around `v` in `next` order, starting at its anchor.
    pub fn rotation(&self, v: usize) -> RotationWalk<'_> {
        RotationWalk::new(self, self.vertices[v].first, Direction::Forward)
    }

    /// Half-edges around `h.start` starting at `h`, in the given direction.
    pub fn rotation_from(&self, h: HalfEdgeId, dir: Direction) -> RotationWalk<'_> {
        RotationWalk::new(self, Some(h), dir)
    }

    /// Boundary of the face containing `start`, following `inverse.next`.
    pub fn trace_face(&self, start: HalfEdgeId) -> FaceWalk<'_> {
        FaceWalk::new(self, start)
    }

    /// Walk the whole arena and verify the structural invariants: rotations
    /// close after `degree` steps, `inverse` is an involution swapping
    /// endpoints, crossings have degree 4 and ids are contiguous.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let fail = |msg: String| Err(InvariantError(msg));
        for (i, h) in self.half_edges.iter().enumerate() {
            let id = HalfEdgeId(i);
            let inv = &self[h.inverse];
            if inv.inverse != id {
                return fail(format!("inverse of {id:?} is not an involution"));
            }
            if inv.start != h.end || inv.end != h.start {
                return fail(format!("inverse of {id:?} does not swap endpoints"));
            }
            if inv.start_kind != h.end_kind || h.start_kind != self.kind(h.start) {
                return fail(format!("endpoint kinds of {id:?} are inconsistent"));
            }
            if self[h.next].prev != id || self[h.prev].next != id {
                return fail(format!("next/prev of {id:?} are not mutual"));
            }
            if self[h.next].start != h.start {
                return fail(format!("next of {id:?} leaves vertex {}", h.start));
            }
        }
        for v in 0..self.vertices.len() {
            let slot = self.vertices[v];
            let Some(first) = slot.first else {
                if slot.degree != 0 {
                    return fail(format!("vertex {v} has degree {} but no anchor", slot.degree));
                }
                continue;
            };
            let steps = self.rotation(v).count();
            if steps != slot.degree {
                return fail(format!(
                    "rotation of vertex {v} closes after {steps} steps, degree is {}",
                    slot.degree
                ));
            }
            if self[first].start != v {
                return fail(format!("anchor of vertex {v} starts elsewhere"));
            }
            let live_crossing = v >= self.original_count && v < self.vertex_count();
            if live_crossing && slot.degree != 4 {
                return fail(format!("crossing {v} has degree {}", slot.degree));
            }
            if v >= self.vertex_count() && v != self.scratch_vertex() {
                return fail(format!("vertex {v} is beyond the live crossings"));
            }
        }
        Ok(())
    }
}

impl Index<HalfEdgeId> for RotationSystem {
    type Output = HalfEdge;

    #[inline]
    fn index(&self, id: HalfEdgeId) -> &HalfEdge {
        &self.half_edges[id.0]
    }
}

#[cfg(test)]
mod tests;
