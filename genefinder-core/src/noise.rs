//! Shuffle-based noise floor for ORF length.
//!
//! Permuting a sequence keeps its base composition but destroys any coding
//! signal, so the longest ORF seen across many permutations estimates how
//! long an ORF can get by chance alone.

use crate::error::{GeneError, GeneResult};
use crate::orf::longest_orf_len;
use crate::seq::dna::DnaSeq;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of shuffle trials. Never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrialCount(usize);

impl TrialCount {
    pub const fn new(trials: usize) -> Self {
        Self(trials)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for TrialCount {
    fn from(trials: usize) -> Self {
        Self(trials)
    }
}

impl TryFrom<i64> for TrialCount {
    type Error = GeneError;

    fn try_from(trials: i64) -> GeneResult<Self> {
        usize::try_from(trials)
            .map(Self)
            .map_err(|_| GeneError::InvalidTrialCount { trials })
    }
}

pub const DEFAULT_TRIALS: TrialCount = TrialCount::new(1500);

fn shuffled_trial(seq: &DnaSeq, seed: u64) -> usize {
    let mut rng = StdRng::seed_from_u64(seed);
    longest_orf_len(&seq.shuffled(&mut rng))
}

/// Longest ORF length over `trials` independent shuffles of `seq`.
///
/// Returns 0 for zero trials or when no shuffle contains an ORF. Each trial
/// gets its own seed drawn from `rng` up front, so a seeded `rng` gives the
/// same threshold whether or not trials run in parallel.
pub fn longest_orf_noncoding<R: Rng + ?Sized>(
    seq: &DnaSeq,
    trials: TrialCount,
    rng: &mut R,
) -> usize {
    let seeds: Vec<u64> = (0..trials.get()).map(|_| rng.gen()).collect();
    let lengths: Vec<usize> = par_map!(seeds, |&seed| shuffled_trial(seq, seed));
    let threshold = lengths.into_iter().max().unwrap_or(0);

    debug!(
        "noise threshold {threshold} from {} shuffles of {} bases",
        trials.get(),
        seq.len()
    );
    threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> DnaSeq {
        s.parse().unwrap()
    }

    #[test]
    fn trial_count_conversion() {
        assert_eq!(TrialCount::try_from(0i64).unwrap().get(), 0);
        assert_eq!(TrialCount::try_from(1500i64).unwrap(), DEFAULT_TRIALS);
        assert_eq!(TrialCount::from(7usize).get(), 7);
        match TrialCount::try_from(-1i64) {
            Err(GeneError::InvalidTrialCount { trials: -1 }) => {}
            other => panic!("expected invalid trial count, got {other:?}"),
        }
    }

    #[test]
    fn zero_trials_is_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let s = seq("ATGCGAATGTAGCATCAAA");
        assert_eq!(longest_orf_noncoding(&s, TrialCount::new(0), &mut rng), 0);
    }

    #[test]
    fn composition_without_starts_is_zero() {
        // Only A and T: no permutation can spell ATG or CAT.
        let mut rng = StdRng::seed_from_u64(2);
        let s = seq("AAAATTTTAAAATTTT");
        assert_eq!(longest_orf_noncoding(&s, TrialCount::new(50), &mut rng), 0);
    }

    #[test]
    fn single_codon_permutations() {
        // Only the ATG arrangement of {A, T, G} holds an ORF (of length 3).
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(longest_orf_noncoding(&seq("GTA"), TrialCount::new(200), &mut rng), 3);
    }

    #[test]
    fn seeded_runs_repeat() {
        let s = seq("ATGCGAATGTAGCATCAAAGGCTTACCATGGA");
        let a = longest_orf_noncoding(&s, TrialCount::new(100), &mut StdRng::seed_from_u64(9));
        let b = longest_orf_noncoding(&s, TrialCount::new(100), &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
        assert!(a <= s.len());
    }

    #[test]
    fn empty_sequence_is_zero() {
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(longest_orf_noncoding(&seq(""), TrialCount::new(10), &mut rng), 0);
    }
}
