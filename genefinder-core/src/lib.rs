#[macro_use]
mod par;

pub mod alphabets;
pub mod error;
pub mod gene_finder;
pub mod genetic_code;
pub mod io;
pub mod noise;
pub mod orf;
pub mod seq;
pub mod translate;

pub use error::{GeneError, GeneResult};
pub use gene_finder::{gene_finder, Gene, GeneFinder, GeneFinderConfig, GeneReport};
pub use noise::{longest_orf_noncoding, TrialCount, DEFAULT_TRIALS};
pub use orf::{
    find_orfs, find_orfs_both_strands, find_orfs_oneframe, longest_orf, rest_of_orf, Orf, Strand,
};
pub use seq::{DnaSeq, ProteinSeq, SeqRecord};
pub use translate::coding_strand_to_aa;
