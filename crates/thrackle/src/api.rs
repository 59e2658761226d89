//! Curated surface for the CLI and experiments.
//!
//! Prefer these re-exports over deep module paths; they are regrouped freely
//! when the modules move.

// Input graphs
pub use crate::graph::rand::{random_connected, random_tree, ReplayToken};
pub use crate::graph::{
    crossing_count, encode_multicode, schedule_edges, special, EdgeSchedule, Graph,
    MulticodeReader, ScheduledEdge,
};
// Rotation systems
pub use crate::rotation::{
    Attach, Capacity, Direction, HalfEdgeId, InvariantError, RotationSystem, VertexKind,
};
// Construction
pub use crate::construct::{
    collect_thrackles, count_thrackles, enumerate_thrackles, Constructor, EmbeddingSink, SearchCfg,
    SearchStats,
};
// Canonical forms
pub use crate::canon::{
    canonical_certificate, certificate_from, Certificate, Classification, Registry,
};
// Streams and validation
pub use crate::check::{check_thrackle, ThrackleReport, ThrackleViolation};
pub use crate::code::{encode_record, ThrackleCodeReader, ThrackleCodeWriter};
pub use crate::error::{Result, ThrackleError, MAX_EDGES};
