//! `thrackle_code`: the binary stream format for embeddings.
//!
//! Format
//! - Header `>>thrackle_code<<` once, before the first record.
//! - Byte record when `0 < vertices` and `vertices + crossings + 1 <= 255`:
//!   vertex count, crossing count, then per vertex in id order the 1-based
//!   ids of its neighbors in rotation order followed by `0`.
//! - Otherwise a `0` flag byte and the same content as little-endian 16-bit
//!   values. Larger embeddings are rejected with `RecordTooLarge`.

mod reader;
mod writer;

pub use reader::ThrackleCodeReader;
pub use writer::{encode_record, ThrackleCodeWriter};

pub const HEADER: &[u8] = b">>thrackle_code<<";
