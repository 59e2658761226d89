//! Error type shared by decoders, scheduler and constructor.

use std::io;

/// Maximum number of original edges; the non-crossed set is one `u64`.
pub const MAX_EDGES: usize = 64;

/// Fatal errors. Search exhaustion is not an error and never appears here.
#[derive(Debug, thiserror::Error)]
pub enum ThrackleError {
    /// Corrupt or truncated input stream.
    #[error("malformed input: {reason}")]
    Malformed { reason: String },
    /// The input graph is not connected; the edge schedule needs connected prefixes.
    #[error("input graph was not connected")]
    Disconnected,
    #[error("capacity exceeded: graph has {edges} edges, at most {capacity} are supported")]
    TooManyEdges { edges: usize, capacity: usize },
    /// Embedding too large for the 16-bit thrackle code record.
    #[error("embeddings with {vertices} vertices are not supported by thrackle_code")]
    RecordTooLarge { vertices: usize },
    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ThrackleError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_graph(reason: impl Into<String>) -> Self {
        Self::InvalidGraph {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ThrackleError>;
