use crate::error::GeneResult;
use crate::genetic_code;
use crate::seq::protein::ProteinSeq;

/// Translate every complete codon of `dna` from offset 0.
///
/// Start and stop codons get no special treatment: a stop codon becomes `*`.
/// Trailing bases that do not fill a codon are dropped. A codon outside the
/// table fails with `UnknownCodon`.
pub fn coding_strand_to_aa(dna: &[u8]) -> GeneResult<ProteinSeq> {
    let out = dna
        .chunks_exact(3)
        .enumerate()
        .map(|(i, codon)| genetic_code::lookup_at(codon, i * 3))
        .collect::<GeneResult<Vec<u8>>>()?;
    Ok(ProteinSeq::from_bytes_unchecked(out))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna_seq(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
            0..=max_len,
        )
    }

    proptest! {
        #[test]
        fn one_residue_per_full_codon(dna in dna_seq(90)) {
            let protein = coding_strand_to_aa(&dna).unwrap();
            prop_assert!(protein.len() * 3 <= dna.len());
            prop_assert_eq!(protein.len() * 3 == dna.len(), dna.len() % 3 == 0);
        }
    }
}
