pub mod fasta;
pub mod report;

pub use fasta::{load_seq, FastaRecords};
pub use report::{write_report, write_report_to_path, Delimiter};
