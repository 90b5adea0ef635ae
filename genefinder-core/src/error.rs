use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneError {
    #[error("invalid nucleotide '{ch}' at position {pos} (expected A, C, G or T)")]
    InvalidNucleotide { ch: char, pos: usize },

    #[error("unknown codon '{codon}' at position {pos}")]
    UnknownCodon { codon: String, pos: usize },

    #[error("invalid trial count: {trials} (must be >= 0)")]
    InvalidTrialCount { trials: i64 },

    #[error("fasta format error at line {line}: {msg}")]
    FastaFormat { msg: &'static str, line: usize },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("report write error in {path}: {source}")]
    CsvWrite {
        path: String,
        #[source]
        source: csv::Error,
    },
}

pub type GeneResult<T> = Result<T, GeneError>;
