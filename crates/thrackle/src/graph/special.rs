//! Named graph families used in tests and benchmarks.
//!
//! Purpose
//! - Small explicit constructors so tests can rely on them deterministically.
//!
//! Known results for thrackles of these families
//! - Paths, stars and trees are thrackleable.
//! - `C_n` is thrackleable for every `n >= 3` except `n = 4`.
//! - `K_4` contains `C_4` and admits no thrackle.

use super::Graph;

fn build(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Graph {
    let mut g = Graph::new(n);
    for (u, v) in edges {
        let added = g.add_edge(u, v);
        debug_assert!(added.is_ok(), "{added:?}");
    }
    g
}

/// Path `0 - 1 - ... - (n-1)`.
pub fn path(n: usize) -> Graph {
    build(n, (1..n).map(|v| (v - 1, v)))
}

/// Cycle of length `n`.
///
/// Panics if `n < 3`.
pub fn cycle(n: usize) -> Graph {
    assert!(n >= 3, "a cycle needs at least 3 vertices, got {n}");
    build(n, (0..n).map(|v| (v, (v + 1) % n)))
}

/// Star with centre 0 and `leaves` leaves.
pub fn star(leaves: usize) -> Graph {
    build(leaves + 1, (1..=leaves).map(|v| (0, v)))
}

/// Complete graph `K_n`.
pub fn complete(n: usize) -> Graph {
    build(n, (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v))))
}
