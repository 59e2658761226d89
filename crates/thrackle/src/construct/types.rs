//! Search configuration, statistics and the non-crossed edge set.

/// Search knobs. The constructor is exhaustive; `limit` only stops the run
/// early after that many emitted embeddings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchCfg {
    pub limit: Option<u64>,
    /// Run `RotationSystem::check_invariants` on every emitted embedding.
    pub check_invariants: bool,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            limit: None,
            check_invariants: cfg!(debug_assertions),
        }
    }
}

/// Counters reported at the end of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub vertices: usize,
    pub edges: usize,
    /// Crossings in every embedding of this graph.
    pub crossings: usize,
    pub embeddings: u64,
    /// Branches abandoned because no face offered a candidate or target.
    pub dead_ends: u64,
}

/// Bitset over original edge ids `0..64`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EdgeSet(pub u64);

impl EdgeSet {
    pub const EMPTY: EdgeSet = EdgeSet(0);

    /// Edges `0..k`.
    #[inline]
    pub fn below(k: usize) -> Self {
        if k >= 64 {
            EdgeSet(u64::MAX)
        } else {
            EdgeSet((1u64 << k) - 1)
        }
    }

    #[inline]
    pub fn single(edge: usize) -> Self {
        EdgeSet(1u64 << edge)
    }

    #[inline]
    pub fn contains(self, edge: usize) -> bool {
        edge < 64 && self.0 & (1u64 << edge) != 0
    }

    #[inline]
    pub fn without(self, edge: usize) -> Self {
        EdgeSet(self.0 & !(1u64 << edge))
    }

    #[inline]
    pub fn with(self, edge: usize) -> Self {
        EdgeSet(self.0 | (1u64 << edge))
    }

    #[inline]
    pub fn minus(self, other: EdgeSet) -> Self {
        EdgeSet(self.0 & !other.0)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }
}
