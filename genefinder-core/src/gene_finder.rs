use crate::error::GeneResult;
use crate::noise::{longest_orf_noncoding, TrialCount, DEFAULT_TRIALS};
use crate::orf::{find_orfs_both_strands, Orf};
use crate::seq::dna::DnaSeq;
use crate::seq::protein::ProteinSeq;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneFinderConfig {
    /// Shuffles used to estimate the noise threshold.
    pub trials: TrialCount,
    /// Fixed seed for the shuffles. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneFinderConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
        }
    }
}

impl GeneFinderConfig {
    pub fn with_trials(mut self, trials: impl Into<TrialCount>) -> Self {
        self.trials = trials.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// An ORF that beat the noise threshold, with its translation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gene {
    pub orf: Orf,
    pub protein: ProteinSeq,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneReport {
    /// Length of the scanned sequence.
    pub seq_len: usize,
    pub threshold: usize,
    /// ORFs found on both strands before thresholding.
    pub orf_count: usize,
    pub genes: Vec<Gene>,
}

impl GeneReport {
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn proteins(&self) -> impl Iterator<Item = &ProteinSeq> {
        self.genes.iter().map(|gene| &gene.protein)
    }

    pub fn into_proteins(self) -> Vec<ProteinSeq> {
        self.genes.into_iter().map(|gene| gene.protein).collect()
    }
}

#[derive(Clone, Debug, Default)]
pub struct GeneFinder {
    config: GeneFinderConfig,
}

impl GeneFinder {
    pub fn new(config: GeneFinderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneFinderConfig {
        &self.config
    }

    pub fn run(&self, seq: &DnaSeq) -> GeneResult<GeneReport> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_with_rng(seq, &mut rng)
    }

    /// Translate every ORF on either strand that is strictly longer than the
    /// shuffle threshold. Genes keep the dual-strand scan order.
    pub fn run_with_rng<R: Rng + ?Sized>(&self, seq: &DnaSeq, rng: &mut R) -> GeneResult<GeneReport> {
        let threshold = longest_orf_noncoding(seq, self.config.trials, rng);
        let orfs = find_orfs_both_strands(seq);
        let orf_count = orfs.len();

        let genes = orfs
            .into_iter()
            .filter(|orf| orf.len() > threshold)
            .map(|orf| {
                let protein = orf.translate()?;
                Ok(Gene { orf, protein })
            })
            .collect::<GeneResult<Vec<_>>>()?;

        info!(
            "{} of {orf_count} ORFs exceed the noise threshold of {threshold} bases",
            genes.len()
        );

        Ok(GeneReport {
            seq_len: seq.len(),
            threshold,
            orf_count,
            genes,
        })
    }
}

/// Amino-acid sequences of the ORFs in `seq` that beat a 1500-shuffle threshold.
pub fn gene_finder(seq: &DnaSeq) -> GeneResult<Vec<ProteinSeq>> {
    Ok(GeneFinder::default().run(seq)?.into_proteins())
}
