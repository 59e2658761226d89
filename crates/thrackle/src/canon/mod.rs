//! Canonical-form engine: isomorphism-invariant certificates and deduplication.
//!
//! Purpose
//! - Two embeddings are the same drawing up to relabeling, choice of root and
//!   reflection iff their minimal certificates are equal.
//! - `Registry` classifies a stream of embeddings as new or duplicate.
//!
//! Notes
//! - Certificates compare by vertex count, crossing count, half-edge count,
//!   length, then content. The sentinel after each rotation list is
//!   `vertices + crossings`, larger than every relabeled id.
//! - Only roots at original vertices are tried: crossings are never mapped
//!   to original vertices by an isomorphism.

mod certificate;
mod registry;

pub use certificate::{canonical_certificate, certificate_from, Certificate};
pub use registry::{Classification, Registry};
