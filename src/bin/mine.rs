use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use spade_miner::io::{csv, spmf};
use spade_miner::report::{input_stats, out_file::OutFileSink, stat_file};
use spade_miner::{mine, naming, Algorithm as MineAlgorithm, MiningError, Record};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Algorithm {
    Dspade,
    Bspade,
    MaxeltsDspade,
    MaxeltsBspade,
}

/// Sequential pattern mining driver implementing the SPADE algorithm family.
#[derive(Parser, Debug)]
#[command(name = "mine", version, about)]
struct Cli {
    /// Which enumerator to run.
    #[arg(long, value_enum)]
    algorithm: Algorithm,

    /// Minimum support threshold (absolute sequence count), must be >= 1.
    #[arg(long)]
    sup: u32,

    /// Maximum number of items per pattern; required for the maxelts variants.
    #[arg(long = "max-elts")]
    max_elts: Option<u32>,

    /// Input dataset: CSV (sid,eid,items) or SPMF text format.
    #[arg(long)]
    input: PathBuf,

    /// Directory OUT and STAT reports are written to.
    #[arg(long = "results-dir")]
    results_dir: PathBuf,

    /// Treat `--input` as SPMF instead of CSV.
    #[arg(long)]
    spmf: bool,
}

fn read_records(cli: &Cli) -> Result<Vec<Record>, MiningError> {
    if cli.spmf {
        spmf::read(&cli.input)
    } else {
        csv::read(&cli.input)
    }
}

fn resolve_algorithm(cli: &Cli) -> Result<MineAlgorithm, String> {
    match (cli.algorithm, cli.max_elts) {
        (Algorithm::Dspade, _) => Ok(MineAlgorithm::DSpade),
        (Algorithm::Bspade, _) => Ok(MineAlgorithm::BSpade),
        (Algorithm::MaxeltsDspade, Some(max_elts)) => Ok(MineAlgorithm::MaxEltsDSpade {
            max_elts: max_elts as usize,
        }),
        (Algorithm::MaxeltsBspade, Some(max_elts)) => Ok(MineAlgorithm::MaxEltsBSpade {
            max_elts: max_elts as usize,
        }),
        (Algorithm::MaxeltsDspade, None) | (Algorithm::MaxeltsBspade, None) => {
            Err("--max-elts is required for a maxelts algorithm".to_string())
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    if cli.sup < 1 {
        return Err(format!("--sup must be >= 1, got {}", cli.sup));
    }
    let algorithm = resolve_algorithm(&cli)?;

    let total_start = Instant::now();

    let read_start = Instant::now();
    let records = read_records(&cli).map_err(|e| format!("failed to read {:?}: {e}", cli.input))?;
    let time_read_s = read_start.elapsed().as_secs_f64();

    let fname = naming::file_stem(&cli.input);
    let info = input_stats::compute(&records, &fname).map_err(|e| e.to_string())?;
    info!(sequences = info.num_sequences, transactions = info.num_transactions, items = info.num_distinct_items, "loaded input");

    std::fs::create_dir_all(&cli.results_dir).map_err(|e| e.to_string())?;
    let out_path = cli
        .results_dir
        .join(naming::out_file_name(algorithm.name(), &info, cli.sup as usize, algorithm.max_elts()));
    let stat_path = cli
        .results_dir
        .join(naming::stat_file_name(algorithm.name(), &info, cli.sup as usize, algorithm.max_elts()));

    let mine_start = Instant::now();
    let mut out_sink = OutFileSink::create(&out_path).map_err(|e| e.to_string())?;
    let stats = mine(&records, cli.sup as usize, algorithm, &mut out_sink).map_err(|e| e.to_string())?;
    out_sink.finish().map_err(|e| e.to_string())?;
    let time_mine_s = mine_start.elapsed().as_secs_f64();

    info!(discovered = stats.total_discovered(), "mining complete");

    let meta = stat_file::RunMeta {
        alg: algorithm.name(),
        sup: cli.sup as usize,
        max_elts: algorithm.max_elts(),
    };

    // The STAT file reports its own write time, so it is written twice: a
    // first pass with a placeholder, then a second pass once the real
    // write duration (OUT file plus the first STAT pass) is known.
    let write_start = Instant::now();
    let placeholder_timings = stat_file::Timings {
        time_read_s,
        time_mine_s,
        time_write_s: 0.0,
        total_time_s: 0.0,
    };
    stat_file::write(&stat_path, &info, &meta, &placeholder_timings, &stats)
        .map_err(|e| e.to_string())?;
    let time_write_s = write_start.elapsed().as_secs_f64();

    let timings = stat_file::Timings {
        time_read_s,
        time_mine_s,
        time_write_s,
        total_time_s: total_start.elapsed().as_secs_f64(),
    };
    stat_file::write(&stat_path, &info, &meta, &timings, &stats).map_err(|e| e.to_string())?;

    println!("wrote {}", out_path.display());
    println!("wrote {}", stat_path.display());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            error!("{msg}");
            eprintln!("error: {msg}");
            ExitCode::FAILURE
        }
    }
}
