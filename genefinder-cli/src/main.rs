use clap::Parser;
use log::{error, info, warn};
use simple_logger::init_with_level;
use std::io::Write;
use std::process::ExitCode;

use genefinder_core::io::{load_seq, write_report_to_path, Delimiter};
use genefinder_core::{GeneError, GeneFinder, GeneFinderConfig, GeneResult, TrialCount};

mod cli;

use cli::Args;

fn run(args: Args) -> GeneResult<()> {
    let trials = TrialCount::try_from(args.trials)?;
    let seq = load_seq(&args.fasta)?;
    info!("Loaded {} bases from {}", seq.len(), args.fasta.display());

    let mut config = GeneFinderConfig::default().with_trials(trials);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let report = GeneFinder::new(config).run(&seq)?;
    info!(
        "Noise threshold: {} bases ({} shuffles); {} genes",
        report.threshold,
        trials.get(),
        report.len()
    );

    match args.output {
        Some(path) => {
            let delimiter = if args.tsv { Delimiter::Tab } else { Delimiter::Comma };
            write_report_to_path(&path, &report, delimiter)?;
            info!("Wrote gene table to {}", path.display());
        }
        None => {
            let mut out = std::io::stdout().lock();
            for protein in report.proteins() {
                writeln!(out, "{protein}")?;
            }
        }
    }

    Ok(())
}

fn failure_message(err: &GeneError) -> String {
    format!("error: {err}")
}

// Without a logger `error!` is a no-op, so the failure goes straight to stderr.
fn report_failure(err: &GeneError, logging: bool) {
    if logging {
        error!("{err}");
    } else {
        eprintln!("{}", failure_message(err));
    }
}

fn main() -> ExitCode {
    let start = std::time::Instant::now();

    let args = Args::parse();

    let logging = match init_with_level(args.level) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("failed to initialize logger: {err}");
            false
        }
    };
    if let Err(err) = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
    {
        warn!("Using the default thread pool: {err}");
    }

    if let Err(err) = run(args) {
        report_failure(&err, logging);
        return ExitCode::FAILURE;
    }

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
    ExitCode::SUCCESS
}
