//! Standard genetic code over the DNA alphabet.
//!
//! Codons are indexed as `(b1 << 4) | (b2 << 2) | b3` with A=0, C=1, G=2, T=3.
//! Stop codons translate to `*`.

use crate::error::{GeneError, GeneResult};
use std::sync::LazyLock;

pub const START_CODON: &[u8; 3] = b"ATG";
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

/// Every one-letter code the table can produce.
pub const AMINO_ACIDS: [u8; 21] = *b"ACDEFGHIKLMNPQRSTVWY*";

const CODON_TABLE: [u8; 64] = *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

const BASES: [u8; 4] = *b"ACGT";

static BASE_INDEX: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut map = [255u8; 256];
    for (i, &b) in BASES.iter().enumerate() {
        map[b as usize] = i as u8;
    }
    map
});

#[inline]
fn codon_index(codon: &[u8]) -> Option<usize> {
    let [b1, b2, b3] = codon else {
        return None;
    };
    let i1 = BASE_INDEX[*b1 as usize];
    let i2 = BASE_INDEX[*b2 as usize];
    let i3 = BASE_INDEX[*b3 as usize];
    if i1 < 4 && i2 < 4 && i3 < 4 {
        Some(((i1 as usize) << 4) | ((i2 as usize) << 2) | (i3 as usize))
    } else {
        None
    }
}

/// Amino acid for `codon`; `pos` is only used to locate the codon in errors.
pub fn lookup_at(codon: &[u8], pos: usize) -> GeneResult<u8> {
    codon_index(codon)
        .map(|idx| CODON_TABLE[idx])
        .ok_or_else(|| GeneError::UnknownCodon {
            codon: String::from_utf8_lossy(codon).into_owned(),
            pos,
        })
}

#[inline]
pub fn lookup(codon: &[u8]) -> GeneResult<u8> {
    lookup_at(codon, 0)
}

/// Codons that encode `aa`, in table order. Empty for codes outside [`AMINO_ACIDS`].
pub fn codons_for(aa: u8) -> Vec<[u8; 3]> {
    CODON_TABLE
        .iter()
        .enumerate()
        .filter(|&(_, &code)| code == aa)
        .map(|(idx, _)| [BASES[idx >> 4], BASES[(idx >> 2) & 3], BASES[idx & 3]])
        .collect()
}

#[inline]
pub fn is_start_codon(codon: &[u8]) -> bool {
    codon == START_CODON
}

#[inline]
pub fn is_stop_codon(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|stop| codon == *stop)
}
