//! Seeded random graphs (trees and connected graphs) with replay tokens.
//!
//! Model
//! - A random tree attaches vertex `v` to a uniform earlier vertex.
//! - A random connected graph adds uniformly drawn extra edges to a tree,
//!   skipping duplicates.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so a stream of graphs can be regenerated from any position.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Graph;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

fn attach_tree<R: Rng>(g: &mut Graph, rng: &mut R) {
    for v in 1..g.vertex_count() {
        let parent = rng.gen_range(0..v);
        // Fresh vertex: the edge cannot exist yet.
        let _ = g.add_edge(parent, v);
    }
}

/// Uniformly attached random tree on `n` vertices.
pub fn random_tree(n: usize, tok: ReplayToken) -> Graph {
    let mut rng = tok.to_std_rng();
    let mut g = Graph::new(n);
    attach_tree(&mut g, &mut rng);
    g
}

/// Random connected graph: a random tree plus up to `extra` further edges.
pub fn random_connected(n: usize, extra: usize, tok: ReplayToken) -> Graph {
    let mut rng = tok.to_std_rng();
    let mut g = Graph::new(n);
    attach_tree(&mut g, &mut rng);
    if n < 3 {
        return g;
    }
    let mut budget = 4 * extra;
    let mut added = 0;
    while added < extra && budget > 0 {
        budget -= 1;
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if g.add_edge(u, v).is_ok() {
            added += 1;
        }
    }
    g
}
