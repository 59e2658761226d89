//! Thrackle code decoder.

use std::io::Read;

use crate::bytes::ByteSource;
use crate::error::{Result, ThrackleError};
use crate::rotation::RotationSystem;

/// Streaming reader of thrackle code records.
///
/// The stream must open with a `>>thrackle_code` header; further headers
/// between records are skipped.
pub struct ThrackleCodeReader<R> {
    src: ByteSource<R>,
    started: bool,
}

impl<R: Read> ThrackleCodeReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            src: ByteSource::new(inner),
            started: false,
        }
    }

    /// Next embedding, or `None` at a clean end of stream.
    pub fn next_record(&mut self) -> Result<Option<RotationSystem>> {
        if !self.started {
            if !self.src.skip_header(b"thrackle_code")? {
                return Err(ThrackleError::malformed("no thrackle_code header detected"));
            }
            self.started = true;
        }
        while self.src.skip_header(b"thrackle_code")? {}

        let Some(first) = self.src.read_u8()? else {
            return Ok(None);
        };
        let wide = first == 0;
        let next = |src: &mut ByteSource<R>| -> Result<usize> {
            if wide {
                Ok(src.expect_u16("thrackle_code record")? as usize)
            } else {
                Ok(src.expect_u8("thrackle_code record")? as usize)
            }
        };
        let nv = if wide { next(&mut self.src)? } else { first as usize };
        let ni = next(&mut self.src)?;
        let total = nv + ni;

        let mut lists = Vec::with_capacity(total);
        for v in 0..total {
            let mut list = Vec::new();
            loop {
                let entry = next(&mut self.src)?;
                if entry == 0 {
                    break;
                }
                if entry > total {
                    return Err(ThrackleError::malformed(format!(
                        "vertex {} lists neighbor {entry} beyond {total}",
                        v + 1
                    )));
                }
                list.push(entry - 1);
            }
            lists.push(list);
        }
        RotationSystem::from_rotations(nv, &lists).map(Some)
    }
}

impl<R: Read> Iterator for ThrackleCodeReader<R> {
    type Item = Result<RotationSystem>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
