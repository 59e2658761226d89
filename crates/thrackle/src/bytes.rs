//! Byte-level input shared by the multicode and thrackle_code readers.

use std::io::{ErrorKind, Read};

use crate::error::{Result, ThrackleError};

/// Reader with a small push-back stack for header detection.
pub(crate) struct ByteSource<R> {
    inner: R,
    pushed: Vec<u8>,
}

impl<R: Read> ByteSource<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self {
            inner,
            pushed: Vec::new(),
        }
    }

    pub(crate) fn read_u8(&mut self) -> Result<Option<u8>> {
        if let Some(b) = self.pushed.pop() {
            return Ok(Some(b));
        }
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Push bytes back; they are read again in the given order.
    pub(crate) fn unread(&mut self, bytes: &[u8]) {
        self.pushed.extend(bytes.iter().rev());
    }

    pub(crate) fn expect_u8(&mut self, what: &str) -> Result<u8> {
        self.read_u8()?
            .ok_or_else(|| ThrackleError::malformed(format!("unexpected end of stream in {what}")))
    }

    /// Little-endian 16-bit value.
    pub(crate) fn expect_u16(&mut self, what: &str) -> Result<u16> {
        let lo = self.expect_u8(what)?;
        let hi = self.expect_u8(what)?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Up to `n` bytes; fewer only at end of stream.
    pub(crate) fn peek(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(n);
        while out.len() < n {
            match self.read_u8()? {
                Some(b) => out.push(b),
                None => break,
            }
        }
        self.unread(&out);
        Ok(out)
    }

    /// Consume a `>>name ...<<` header if the stream is positioned on one
    /// whose name starts with `name`. Returns whether a header was skipped.
    pub(crate) fn skip_header(&mut self, name: &[u8]) -> Result<bool> {
        let mut prefix = b">>".to_vec();
        prefix.extend_from_slice(name);
        if self.peek(prefix.len())? != prefix {
            return Ok(false);
        }
        for _ in 0..prefix.len() {
            self.read_u8()?;
        }
        let what = String::from_utf8_lossy(name).into_owned() + " header";
        while self.expect_u8(&what)? != b'<' {}
        if self.expect_u8(&what)? != b'<' {
            return Err(ThrackleError::malformed(format!("single '<' closing the {what}")));
        }
        Ok(true)
    }
}
