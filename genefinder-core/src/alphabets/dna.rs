use crate::alphabets::Alphabet;
use crate::error::{GeneError, GeneResult};
use std::sync::LazyLock;

pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGT")
}

// 0 marks bytes with no Watson-Crick partner.
static COMPLEMENT: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut comp = [0u8; 256];
    b"ACGT"
        .iter()
        .zip(b"TGCA".iter())
        .for_each(|(&a, &b)| comp[a as usize] = b);
    comp
});

#[inline]
fn complement_at(a: u8, pos: usize) -> GeneResult<u8> {
    match COMPLEMENT[a as usize] {
        0 => Err(GeneError::InvalidNucleotide { ch: a as char, pos }),
        b => Ok(b),
    }
}

/// Watson-Crick complement of a single base (A<->T, C<->G).
#[inline]
pub fn complement(a: u8) -> GeneResult<u8> {
    complement_at(a, 0)
}

/// Reverse complement of bytes already known to be over {A,C,G,T}.
pub(crate) fn reverse_complement_unchecked(text: &[u8]) -> Vec<u8> {
    text.iter().rev().map(|&a| COMPLEMENT[a as usize]).collect()
}

/// Reverse complement of `text`. Errors name the offending byte's offset in `text`.
pub fn reverse_complement(text: &[u8]) -> GeneResult<Vec<u8>> {
    let last = text.len().saturating_sub(1);
    text.iter()
        .rev()
        .enumerate()
        .map(|(i, &a)| complement_at(a, last - i))
        .collect()
}
