use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "genefinder",
    about = "Find open reading frames that beat a shuffled-sequence noise threshold",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Args {
    #[arg(
        short = 'f',
        long = "fasta",
        required = true,
        help = "Path to .fa file (the first record is scanned)"
    )]
    pub fasta: PathBuf,

    #[arg(
        short = 'n',
        long = "trials",
        help = "Number of shuffles used for the noise threshold",
        value_name = "TRIALS",
        allow_negative_numbers = true,
        default_value_t = 1500
    )]
    pub trials: i64,

    #[arg(
        short = 's',
        long = "seed",
        help = "Seed for the shuffles; omit for a random seed",
        value_name = "SEED"
    )]
    pub seed: Option<u64>,

    #[arg(
        short = 'o',
        long = "output",
        help = "Write a gene table here instead of printing proteins",
        value_name = "PATH"
    )]
    pub output: Option<PathBuf>,

    #[arg(long = "tsv", help = "Tab-separated gene table (default is comma)")]
    pub tsv: bool,

    #[arg(
        short = 't',
        long = "threads",
        help = "Number of threads",
        value_name = "THREADS",
        default_value_t = num_cpus::get()
    )]
    pub threads: usize,

    #[arg(
        short = 'L',
        long = "level",
        help = "Logging level",
        value_name = "LEVEL",
        default_value_t = log::Level::Info,
    )]
    pub level: log::Level,
}
