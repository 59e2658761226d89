//! Thrackle embeddings: exhaustive construction and canonical deduplication.
//!
//! A thrackle is a drawing in which every pair of edges meets exactly once,
//! either at a shared endpoint or at a single crossing. Drawings are kept as
//! rotation systems whose crossings are explicit degree-4 vertices.
//!
//! Layout
//! - `rotation`: half-edge arena with paired mutate/undo operations.
//! - `graph`: input graphs, edge scheduling, multicode, generators.
//! - `construct`: backtracking enumerator of all thrackle drawings.
//! - `canon`: certificates and the duplicate registry.
//! - `code`: the `thrackle_code` stream format.
//! - `check`: validation of finished drawings.

mod bytes;

pub mod api;
pub mod canon;
pub mod check;
pub mod code;
pub mod construct;
pub mod error;
pub mod graph;
pub mod rotation;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Result, ThrackleError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::canon::{canonical_certificate, Certificate, Classification, Registry};
    pub use crate::check::{check_thrackle, ThrackleReport, ThrackleViolation};
    pub use crate::code::{ThrackleCodeReader, ThrackleCodeWriter};
    pub use crate::construct::{enumerate_thrackles, EmbeddingSink, SearchCfg, SearchStats};
    pub use crate::error::{Result, ThrackleError};
    pub use crate::graph::rand::ReplayToken;
    pub use crate::graph::{schedule_edges, Graph, MulticodeReader};
    pub use crate::rotation::{Direction, HalfEdgeId, RotationSystem};
}
