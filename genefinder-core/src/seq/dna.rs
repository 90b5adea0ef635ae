use crate::alphabets::dna;
use crate::error::{GeneError, GeneResult};
use crate::seq::protein::ProteinSeq;
use crate::translate;

use memchr::memmem;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// A DNA strand restricted to the canonical bases `A`, `C`, `G`, `T`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DnaSeq {
    bytes: Vec<u8>,
}

impl DnaSeq {
    pub fn new(bytes: Vec<u8>) -> GeneResult<Self> {
        if let Some((pos, b)) = dna::alphabet().first_foreign(bytes.as_slice()) {
            return Err(GeneError::InvalidNucleotide { ch: b as char, pos });
        }
        Ok(Self { bytes })
    }

    #[inline]
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn reverse_complement(&self) -> Self {
        Self::from_bytes_unchecked(dna::reverse_complement_unchecked(self.as_bytes()))
    }

    /// A uniform random permutation of this sequence's bases.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut out = self.bytes.clone();
        out.shuffle(rng);
        Self::from_bytes_unchecked(out)
    }

    pub fn contains(&self, pat: &[u8]) -> bool {
        pat.is_empty() || memmem::find(self.as_bytes(), pat).is_some()
    }

    pub fn translate(&self) -> GeneResult<ProteinSeq> {
        translate::coding_strand_to_aa(self.as_bytes())
    }
}

impl FromStr for DnaSeq {
    type Err = GeneError;

    fn from_str(s: &str) -> GeneResult<Self> {
        DnaSeq::new(s.as_bytes().to_vec())
    }
}

impl AsRef<[u8]> for DnaSeq {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for DnaSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Validated bytes are ASCII.
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}
