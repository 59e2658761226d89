//! Ordered registry of canonical certificates seen during one run.

use std::collections::BTreeMap;

use super::certificate::{canonical_certificate, Certificate};
use crate::error::Result;
use crate::rotation::RotationSystem;

/// Outcome of [`Registry::classify`]; indices count records read, from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    New { index: usize },
    Duplicate { index: usize, original: usize },
}

impl Classification {
    #[inline]
    pub fn is_new(&self) -> bool {
        matches!(self, Classification::New { .. })
    }
}

/// Certificates keyed in certificate order, each mapped to the index of the
/// record that introduced it. Entries are never removed.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    seen: BTreeMap<Certificate, usize>,
    read: usize,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify the next embedding of the stream.
    pub fn classify(&mut self, rs: &RotationSystem) -> Result<Classification> {
        let cert = canonical_certificate(rs)?;
        Ok(self.classify_certificate(cert))
    }

    /// Same as [`classify`](Self::classify) for a precomputed certificate.
    pub fn classify_certificate(&mut self, cert: Certificate) -> Classification {
        self.read += 1;
        let index = self.read;
        match self.seen.get(&cert) {
            Some(&original) => Classification::Duplicate { index, original },
            None => {
                self.seen.insert(cert, index);
                Classification::New { index }
            }
        }
    }

    /// Records classified so far.
    #[inline]
    pub fn read(&self) -> usize {
        self.read
    }

    /// Distinct certificates seen so far.
    #[inline]
    pub fn unique(&self) -> usize {
        self.seen.len()
    }
}
