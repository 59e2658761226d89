//! Paired mutations on the rotation system.
//!
//! Every operation has an exact inverse. Callers undo in reverse order, which
//! keeps the arena a stack: new half-edges are always pushed on top and the
//! inverse operation pops exactly those.

use super::types::{Attach, Crossing, HalfEdge, HalfEdgeId, VertexSlot};
use super::RotationSystem;

impl RotationSystem {
    #[inline]
    fn he_mut(&mut self, id: HalfEdgeId) -> &mut HalfEdge {
        &mut self.half_edges[id.0]
    }

    fn alloc(&mut self, he: HalfEdge) -> HalfEdgeId {
        assert!(
            self.half_edges.len() < self.max_half_edges,
            "half-edge arena overflow ({} slots)",
            self.max_half_edges
        );
        let id = HalfEdgeId(self.half_edges.len());
        self.half_edges.push(he);
        id
    }

    /// Half-edge pair `start → end` with self-loops as rotation links.
    fn alloc_pair(&mut self, start: usize, end: usize, edge: usize) -> (HalfEdgeId, HalfEdgeId) {
        let out = HalfEdgeId(self.half_edges.len());
        let back = HalfEdgeId(out.0 + 1);
        let (start_kind, end_kind) = (self.kind(start), self.kind(end));
        self.alloc(HalfEdge {
            start,
            end,
            start_kind,
            end_kind,
            edge,
            next: out,
            prev: out,
            inverse: back,
        });
        self.alloc(HalfEdge {
            start: end,
            end: start,
            start_kind: end_kind,
            end_kind: start_kind,
            edge,
            next: back,
            prev: back,
            inverse: out,
        });
        (out, back)
    }

    /// Insert `e` into the rotation of `anchor.start`, right after `anchor`.
    fn splice_after(&mut self, anchor: HalfEdgeId, e: HalfEdgeId) {
        let after = self[anchor].next;
        {
            let he = self.he_mut(e);
            he.prev = anchor;
            he.next = after;
        }
        self.he_mut(anchor).next = e;
        self.he_mut(after).prev = e;
        let v = self[e].start;
        self.vertices[v].degree += 1;
    }

    /// Make `e` the only half-edge of its start vertex.
    fn make_isolated(&mut self, e: HalfEdgeId) {
        let v = self[e].start;
        debug_assert_eq!(self.vertices[v].degree, 0, "vertex {v} is not isolated");
        let he = self.he_mut(e);
        he.next = e;
        he.prev = e;
        self.vertices[v] = VertexSlot {
            first: Some(e),
            degree: 1,
        };
    }

    /// Remove `e` from the rotation of its start vertex.
    fn unsplice(&mut self, e: HalfEdgeId) {
        let v = self[e].start;
        if self.vertices[v].degree == 1 {
            self.vertices[v] = VertexSlot::default();
            return;
        }
        let HalfEdge { next, prev, .. } = self[e];
        self.he_mut(prev).next = next;
        self.he_mut(next).prev = prev;
        let slot = &mut self.vertices[v];
        if slot.first == Some(e) {
            slot.first = Some(next);
        }
        slot.degree -= 1;
    }

    /// First edge of an embedding: both endpoints must be isolated.
    /// Undone by [`disconnect_vertex`](Self::disconnect_vertex).
    pub fn seed_edge(&mut self, a: usize, b: usize, edge: usize) -> HalfEdgeId {
        let (out, back) = self.alloc_pair(a, b, edge);
        self.make_isolated(out);
        self.make_isolated(back);
        out
    }

    /// New pair `from.start → target`, placed right after `from` in the
    /// rotation of `from.start`. The far end either creates `target` as an
    /// isolated vertex or is spliced into its rotation after the given
    /// half-edge. Returns the half-edge leaving `from.start`.
    pub fn connect_to_vertex(
        &mut self,
        from: HalfEdgeId,
        target: usize,
        attach: Attach,
        edge: usize,
    ) -> HalfEdgeId {
        let v = self[from].start;
        let (out, back) = self.alloc_pair(v, target, edge);
        self.splice_after(from, out);
        match attach {
            Attach::Isolated => self.make_isolated(back),
            Attach::After(anchor) => {
                debug_assert_eq!(self[anchor].start, target, "anchor is not at the target");
                self.splice_after(anchor, back);
            }
        }
        out
    }

    /// Inverse of [`connect_to_vertex`](Self::connect_to_vertex) and
    /// [`seed_edge`](Self::seed_edge); `out` must be the topmost pair.
    pub fn disconnect_vertex(&mut self, out: HalfEdgeId) {
        let back = self[out].inverse;
        assert!(
            back.0 == out.0 + 1 && back.0 + 1 == self.half_edges.len(),
            "disconnect out of order: {out:?} is not the top pair"
        );
        self.unsplice(back);
        self.unsplice(out);
        self.half_edges.truncate(out.0);
    }

    /// Cross the physical edges of `tip` and `other` at a new degree-4 vertex.
    ///
    /// `tip` runs from the tail of the woven edge to its loose end. Both
    /// half-edges and their inverses keep their rotation slots and are cut
    /// short at the crossing; four new half-edges leave the crossing in the
    /// order `→ other.start`, `→ tip.start`, `→ other.end`, `→ tip.end`, so
    /// the woven edge passes from the face of `other` into the face of its
    /// inverse.
    pub fn insert_crossing(&mut self, tip: HalfEdgeId, other: HalfEdgeId) -> Crossing {
        assert!(
            self.crossing_count < self.max_crossings,
            "crossing capacity exceeded ({})",
            self.max_crossings
        );
        let tip_back = self[tip].inverse;
        let other_back = self[other].inverse;
        debug_assert!(other != tip && other != tip_back, "edge cannot cross itself");
        let c = self.original_count + self.crossing_count;
        self.crossing_count += 1;

        let t = self[tip];
        let g = self[other];
        let base = self.half_edges.len();
        let [ca, cv, cb, cl] = [0, 1, 2, 3].map(|i| HalfEdgeId(base + i));
        let kind_c = self.kind(c);
        let spoke = |end: usize, edge: usize, inverse: HalfEdgeId, prev, next| HalfEdge {
            start: c,
            end,
            start_kind: kind_c,
            end_kind: self.kind(end),
            edge,
            next,
            prev,
            inverse,
        };
        let spokes = [
            spoke(g.start, g.edge, other, cl, cv),
            spoke(t.start, t.edge, tip, ca, cb),
            spoke(g.end, g.edge, other_back, cv, cl),
            spoke(t.end, t.edge, tip_back, cb, ca),
        ];
        for s in spokes {
            self.alloc(s);
        }
        for (h, inverse) in [(tip, cv), (other, ca), (tip_back, cl), (other_back, cb)] {
            let he = self.he_mut(h);
            he.end = c;
            he.end_kind = kind_c;
            he.inverse = inverse;
        }
        self.vertices[c] = VertexSlot {
            first: Some(ca),
            degree: 4,
        };
        Crossing {
            vertex: c,
            continuation: cl,
        }
    }

    /// Inverse of [`insert_crossing`](Self::insert_crossing); `c` must be the
    /// most recent crossing.
    pub fn remove_crossing(&mut self, c: usize) {
        assert!(
            self.crossing_count > 0 && c + 1 == self.original_count + self.crossing_count,
            "remove_crossing out of order: {c} is not the last crossing"
        );
        let base = self.half_edges.len() - 4;
        assert_eq!(
            self.vertices[c].first,
            Some(HalfEdgeId(base)),
            "crossing {c} does not own the top of the arena"
        );
        let [ca, cv, cb, cl] = [0, 1, 2, 3].map(|i| self.half_edges[base + i]);
        // Each old half-edge is rejoined with the old inverse it was split from.
        for (cut, far) in [(cv, cl), (ca, cb), (cl, cv), (cb, ca)] {
            let end_kind = far.end_kind;
            let he = self.he_mut(cut.inverse);
            he.end = far.end;
            he.end_kind = end_kind;
            he.inverse = far.inverse;
        }
        self.half_edges.truncate(base);
        self.vertices[c] = VertexSlot::default();
        self.crossing_count -= 1;
    }

    /// Move the loose end of `tip` onto `target`, inserting the returning
    /// half-edge into the rotation of `target` right after `anchor`.
    pub fn land_loose_end(&mut self, tip: HalfEdgeId, target: usize, anchor: HalfEdgeId) {
        let back = self[tip].inverse;
        let loose = self[tip].end;
        debug_assert_eq!(self.vertices[loose].degree, 1, "loose end {loose} is attached");
        debug_assert_eq!(self[anchor].start, target, "anchor is not at the target");
        self.vertices[loose] = VertexSlot::default();
        let kind = self.kind(target);
        {
            let he = self.he_mut(back);
            he.start = target;
            he.start_kind = kind;
        }
        {
            let he = self.he_mut(tip);
            he.end = target;
            he.end_kind = kind;
        }
        self.splice_after(anchor, back);
    }

    /// Inverse of [`land_loose_end`](Self::land_loose_end).
    pub fn lift_loose_end(&mut self, tip: HalfEdgeId, loose: usize) {
        let back = self[tip].inverse;
        self.unsplice(back);
        let kind = self.kind(loose);
        {
            let he = self.he_mut(back);
            he.start = loose;
            he.start_kind = kind;
        }
        {
            let he = self.he_mut(tip);
            he.end = loose;
            he.end_kind = kind;
        }
        self.make_isolated(back);
    }
}
