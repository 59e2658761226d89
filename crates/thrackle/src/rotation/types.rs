//! Data types for the half-edge arena.
//!
//! Kept plain and `Copy` so that `ops` can rewrite links in place and undo
//! them by restoring the previous field values.

/// Index of a half-edge in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfEdgeId(pub usize);

/// Marker for half-edges whose original edge is unknown (decoded embeddings).
pub const UNNUMBERED: usize = usize::MAX;

/// Endpoint tag: a vertex of the input graph or a synthetic crossing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VertexKind {
    Original,
    Crossing,
}

/// Walking direction around a vertex: `next` (forward) or `prev` (mirror).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Mirror,
}

impl Direction {
    pub const BOTH: [Direction; 2] = [Direction::Forward, Direction::Mirror];
}

/// Directed edge record; `next`/`prev` walk the rotation around `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HalfEdge {
    pub start: usize,
    pub end: usize,
    pub start_kind: VertexKind,
    pub end_kind: VertexKind,
    /// Original graph edge this half-edge is a fragment of.
    pub edge: usize,
    pub next: HalfEdgeId,
    pub prev: HalfEdgeId,
    pub inverse: HalfEdgeId,
}

/// Per-vertex anchor into its rotation list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VertexSlot {
    pub first: Option<HalfEdgeId>,
    pub degree: usize,
}

/// Where the far end of a new half-edge pair goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attach {
    /// The target has degree 0 and becomes a degree-1 vertex.
    Isolated,
    /// Splice the inverse into the target's rotation right after this half-edge.
    After(HalfEdgeId),
}

/// Result of `insert_crossing`: the new vertex and the half-edge that
/// continues the woven edge beyond it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crossing {
    pub vertex: usize,
    pub continuation: HalfEdgeId,
}

/// Arena sizes derived from the input graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capacity {
    pub original_vertices: usize,
    pub max_crossings: usize,
    pub max_half_edges: usize,
}

impl Capacity {
    /// Exact sizes for a thrackle of a graph with `vertices`, `edges` and
    /// `crossings` non-adjacent edge pairs: every crossing adds two edges.
    pub fn for_thrackle(vertices: usize, edges: usize, crossings: usize) -> Self {
        Self {
            original_vertices: vertices,
            max_crossings: crossings,
            max_half_edges: 2 * (edges + 2 * crossings),
        }
    }
}
