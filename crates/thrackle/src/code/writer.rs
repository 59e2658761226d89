//! Thrackle code encoder.

use std::io::Write;

use super::HEADER;
use crate::error::{Result, ThrackleError};
use crate::rotation::RotationSystem;

/// Writes one record per embedding; the stream header goes out before the
/// first record. Each record is assembled in memory and written in one call.
pub struct ThrackleCodeWriter<W: Write> {
    inner: W,
    header_written: bool,
    buf: Vec<u8>,
}

impl<W: Write> ThrackleCodeWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            header_written: false,
            buf: Vec::new(),
        }
    }

    pub fn write(&mut self, rs: &RotationSystem) -> Result<()> {
        encode_record(rs, &mut self.buf)?;
        if !self.header_written {
            self.inner.write_all(HEADER)?;
            self.header_written = true;
        }
        self.inner.write_all(&self.buf)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Encode one record (without header) into `out`, replacing its contents.
pub fn encode_record(rs: &RotationSystem, out: &mut Vec<u8>) -> Result<()> {
    out.clear();
    let nv = rs.original_count();
    let ni = rs.crossing_count();
    let total = nv + ni;
    if nv > 0 && total < u8::MAX as usize {
        out.extend([nv as u8, ni as u8]);
        for v in 0..total {
            out.extend(rs.rotation(v).map(|h| (rs[h].end + 1) as u8));
            out.push(0);
        }
    } else if total < u16::MAX as usize {
        out.push(0);
        let mut put = |x: usize| out.extend_from_slice(&(x as u16).to_le_bytes());
        put(nv);
        put(ni);
        for v in 0..total {
            for h in rs.rotation(v) {
                put(rs[h].end + 1);
            }
            put(0);
        }
    } else {
        return Err(ThrackleError::RecordTooLarge { vertices: total });
    }
    Ok(())
}
