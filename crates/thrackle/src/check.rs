//! Validation of finished drawings against the thrackle condition.
//!
//! Original edges are recovered by walking straight through crossings (the
//! opposite spoke is two rotation steps away), so the check works on decoded
//! embeddings whose half-edges carry no edge ids.

use std::collections::HashMap;

use crate::rotation::{HalfEdgeId, RotationSystem, VertexKind};

/// Why a rotation system is not a thrackle drawing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ThrackleViolation {
    #[error("crossing {vertex} has degree {degree}, expected 4")]
    CrossingDegree { vertex: usize, degree: usize },
    #[error("crossing {vertex} is not passed by exactly two edges")]
    StrayCrossing { vertex: usize },
    #[error("edge {edge:?} crosses itself at {vertex}")]
    SelfCrossing { edge: (usize, usize), vertex: usize },
    #[error("edge {edge:?} does not end at an original vertex")]
    Unterminated { edge: (usize, usize) },
    #[error("edge {edge:?} appears twice")]
    DuplicateEdge { edge: (usize, usize) },
    #[error("adjacent edges {a:?} and {b:?} cross")]
    AdjacentCross { a: (usize, usize), b: (usize, usize) },
    #[error("edges {a:?} and {b:?} cross {times} times")]
    RepeatedCross {
        a: (usize, usize),
        b: (usize, usize),
        times: usize,
    },
    #[error("edges {a:?} and {b:?} never meet")]
    MissingCross { a: (usize, usize), b: (usize, usize) },
}

/// Summary of a valid thrackle drawing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThrackleReport {
    /// Original edges as `(u, v)` with `u < v`, sorted.
    pub edges: Vec<(usize, usize)>,
    pub crossings: usize,
}

struct TracedEdge {
    ends: (usize, usize),
    crossings: Vec<usize>,
}

impl TracedEdge {
    fn is_adjacent(&self, other: &TracedEdge) -> bool {
        let (a, b) = self.ends;
        let (c, d) = other.ends;
        a == c || a == d || b == c || b == d
    }
}

/// Verify that every pair of edges meets exactly once: adjacent edges only at
/// their shared endpoint, non-adjacent edges at exactly one crossing.
pub fn check_thrackle(rs: &RotationSystem) -> Result<ThrackleReport, ThrackleViolation> {
    let nv = rs.original_count();
    let total = rs.vertex_count();
    for vertex in nv..total {
        let degree = rs.degree(vertex);
        if degree != 4 {
            return Err(ThrackleViolation::CrossingDegree { vertex, degree });
        }
    }

    let edges = trace_edges(rs)?;
    let mut owners: Vec<Vec<usize>> = vec![Vec::new(); total - nv];
    for (i, e) in edges.iter().enumerate() {
        for &c in &e.crossings {
            if owners[c - nv].contains(&i) {
                return Err(ThrackleViolation::SelfCrossing {
                    edge: e.ends,
                    vertex: c,
                });
            }
            owners[c - nv].push(i);
        }
    }
    let mut times: HashMap<(usize, usize), usize> = HashMap::new();
    for (offset, o) in owners.iter().enumerate() {
        let &[p, q] = o.as_slice() else {
            return Err(ThrackleViolation::StrayCrossing {
                vertex: nv + offset,
            });
        };
        *times.entry((p.min(q), p.max(q))).or_default() += 1;
    }

    for p in 0..edges.len() {
        for q in p + 1..edges.len() {
            let (a, b) = (edges[p].ends, edges[q].ends);
            if a == b {
                return Err(ThrackleViolation::DuplicateEdge { edge: a });
            }
            let n = times.get(&(p, q)).copied().unwrap_or(0);
            match (edges[p].is_adjacent(&edges[q]), n) {
                (true, 0) | (false, 1) => {}
                (true, _) => return Err(ThrackleViolation::AdjacentCross { a, b }),
                (false, 0) => return Err(ThrackleViolation::MissingCross { a, b }),
                (false, times) => return Err(ThrackleViolation::RepeatedCross { a, b, times }),
            }
        }
    }

    let mut ends: Vec<_> = edges.iter().map(|e| e.ends).collect();
    ends.sort_unstable();
    Ok(ThrackleReport {
        edges: ends,
        crossings: total - nv,
    })
}

fn trace_edges(rs: &RotationSystem) -> Result<Vec<TracedEdge>, ThrackleViolation> {
    let mut used = vec![false; rs.half_edge_count()];
    let mut edges = Vec::new();
    for v in 0..rs.original_count() {
        let outgoing: Vec<HalfEdgeId> = rs.rotation(v).collect();
        for h in outgoing {
            if used[h.0] {
                continue;
            }
            let mut cur = h;
            let mut crossings = Vec::new();
            let mut steps = 0;
            loop {
                used[cur.0] = true;
                used[rs[cur].inverse.0] = true;
                if rs[cur].end_kind == VertexKind::Original {
                    break;
                }
                steps += 1;
                if steps > rs.half_edge_count() {
                    return Err(ThrackleViolation::Unterminated {
                        edge: (v, rs[cur].end),
                    });
                }
                crossings.push(rs[cur].end);
                let arrive = rs[cur].inverse;
                cur = rs[rs[arrive].next].next;
            }
            let w = rs[cur].end;
            edges.push(TracedEdge {
                ends: (v.min(w), v.max(w)),
                crossings,
            });
        }
    }
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construct::{collect_thrackles, SearchCfg};
    use crate::graph::special;

    #[test]
    fn triangle_without_crossings_is_a_thrackle() {
        let rs = RotationSystem::from_rotations(3, &[vec![1, 2], vec![0, 2], vec![1, 0]]).unwrap();
        let report = check_thrackle(&rs).unwrap();
        assert_eq!(report.edges, vec![(0, 1), (0, 2), (1, 2)]);
        assert_eq!(report.crossings, 0);
    }

    #[test]
    fn plane_path_misses_its_crossing() {
        // Path 0-1-2-3 drawn without crossings: edges 0-1 and 2-3 never meet.
        let rs =
            RotationSystem::from_rotations(4, &[vec![1], vec![0, 2], vec![1, 3], vec![2]]).unwrap();
        assert_eq!(
            check_thrackle(&rs).unwrap_err(),
            ThrackleViolation::MissingCross {
                a: (0, 1),
                b: (2, 3)
            }
        );
    }

    #[test]
    fn constructed_path_passes() {
        for rs in collect_thrackles(&special::path(4), SearchCfg::default()).unwrap() {
            let report = check_thrackle(&rs).unwrap();
            assert_eq!(report.crossings, 1);
            assert_eq!(report.edges, vec![(0, 1), (1, 2), (2, 3)]);
        }
    }

    #[test]
    fn adjacent_edges_crossing_is_reported() {
        // Star 0-1, 0-2 whose edges cross once at vertex 3.
        // Rotations: 0: [3(a), 3(b)], crossing 3: [0(a), 0(b), 1, 2].
        let rs = RotationSystem::from_rotations(
            3,
            &[vec![3, 3], vec![3], vec![3], vec![0, 0, 1, 2]],
        )
        .unwrap();
        assert_eq!(
            check_thrackle(&rs).unwrap_err(),
            ThrackleViolation::AdjacentCross {
                a: (0, 1),
                b: (0, 2)
            }
        );
    }
}
