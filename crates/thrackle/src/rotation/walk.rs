//! Lazy walks over rotations and faces.
//!
//! Both iterators borrow the system immutably and are `Clone`, so a walk can
//! be restarted from its saved copy.

use super::types::{Direction, HalfEdgeId};
use super::RotationSystem;

/// Half-edges around one vertex, ending before the start comes round again.
#[derive(Clone, Debug)]
pub struct RotationWalk<'a> {
    rs: &'a RotationSystem,
    start: Option<HalfEdgeId>,
    cur: Option<HalfEdgeId>,
    dir: Direction,
}

impl<'a> RotationWalk<'a> {
    pub(super) fn new(rs: &'a RotationSystem, start: Option<HalfEdgeId>, dir: Direction) -> Self {
        Self {
            rs,
            start,
            cur: start,
            dir,
        }
    }
}

impl Iterator for RotationWalk<'_> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<HalfEdgeId> {
        let cur = self.cur?;
        let he = &self.rs[cur];
        let step = match self.dir {
            Direction::Forward => he.next,
            Direction::Mirror => he.prev,
        };
        self.cur = (Some(step) != self.start).then_some(step);
        Some(cur)
    }
}

/// Face boundary obtained by following `inverse.next` from a start half-edge.
#[derive(Clone, Debug)]
pub struct FaceWalk<'a> {
    rs: &'a RotationSystem,
    start: HalfEdgeId,
    cur: Option<HalfEdgeId>,
    steps: usize,
}

impl<'a> FaceWalk<'a> {
    pub(super) fn new(rs: &'a RotationSystem, start: HalfEdgeId) -> Self {
        Self {
            rs,
            start,
            cur: Some(start),
            steps: 0,
        }
    }
}

impl Iterator for FaceWalk<'_> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<HalfEdgeId> {
        let cur = self.cur?;
        self.steps += 1;
        debug_assert!(
            self.steps <= self.rs.half_edge_count(),
            "face walk from {:?} does not close",
            self.start
        );
        let step = self.rs.face_successor(cur);
        self.cur = (step != self.start).then_some(step);
        Some(cur)
    }
}
