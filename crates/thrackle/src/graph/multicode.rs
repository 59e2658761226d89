//! Multicode graph decoder.
//!
//! Format
//! - Optional `>>multi_code ...<<` header.
//! - Byte form: first byte `n != 0`, then for each vertex `i` in `1..n` its
//!   neighbors `j > i` followed by `0`; the last vertex has no terminator.
//! - Short form: a `0` flag byte, then the same content as little-endian
//!   16-bit values.
//!
//! Ids are 1-based on the wire and 0-based in [`Graph`].

use std::io::Read;

use super::Graph;
use crate::bytes::ByteSource;
use crate::error::{Result, ThrackleError};

/// Streaming reader of multicode graphs.
pub struct MulticodeReader<R> {
    src: ByteSource<R>,
}

impl<R: Read> MulticodeReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            src: ByteSource::new(inner),
        }
    }

    /// Next graph, or `None` at a clean end of stream.
    pub fn next_graph(&mut self) -> Result<Option<Graph>> {
        self.src.skip_header(b"multi_code")?;
        let Some(first) = self.src.read_u8()? else {
            return Ok(None);
        };
        let wide = first == 0;
        let n = if wide {
            self.src.expect_u16("multicode vertex count")? as usize
        } else {
            first as usize
        };
        let mut graph = Graph::new(n);
        let mut current = 0;
        while current + 1 < n {
            let entry = if wide {
                self.src.expect_u16("multicode")? as usize
            } else {
                self.src.expect_u8("multicode")? as usize
            };
            if entry == 0 {
                current += 1;
                continue;
            }
            if entry > n {
                return Err(ThrackleError::invalid_graph(format!(
                    "neighbor {entry} of vertex {} exceeds vertex count {n}",
                    current + 1
                )));
            }
            graph.add_edge(current, entry - 1)?;
        }
        Ok(Some(graph))
    }
}

/// Encode `graph` as multicode without header, using the byte form when all
/// ids fit in a byte.
pub fn encode_multicode(graph: &Graph) -> Vec<u8> {
    let n = graph.vertex_count();
    let mut entries = vec![n];
    for v in 0..n {
        entries.extend(graph.neighbours(v).iter().filter(|&&w| w > v).map(|&w| w + 1));
        if v + 1 < n {
            entries.push(0);
        }
    }
    if (1..=255).contains(&n) {
        entries.into_iter().map(|x| x as u8).collect()
    } else {
        let mut out = vec![0u8];
        for x in entries {
            out.extend_from_slice(&(x as u16).to_le_bytes());
        }
        out
    }
}
