//! Page replacement simulator command line.

use {
    anyhow::{Context, Result, bail},
    clap::{Parser, Subcommand},
    pagesim::{
        Runner,
        RunnerConfig,
        batch::{self, Case},
        generator::{self, WorkloadGenerator},
    },
    std::{fs, path::PathBuf},
};

/// Compares FIFO, LRU and optimal page replacement on page request traces.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate workloads given as pairs of input and output files
    Run {
        /// Input/output files: IN1 OUT1 IN2 OUT2 ...; a trailing lone input
        /// writes to output.txt
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Simulate the algorithms on separate threads
        #[arg(short, long)]
        parallel: bool,
    },

    /// Write a random workload
    Generate {
        /// Seed of the generator; derived from the clock when omitted
        #[arg(short, long)]
        seed: Option<u64>,

        /// File to write the workload to
        #[arg(short, long, default_value = "input.txt")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match args.command {
        Command::Run { files, parallel } => {
            let cases = Case::from_files(&files).context("Invalid file arguments")?;
            let runner = Runner::new(RunnerConfig { parallel });
            let summary = batch::process_all(&cases, &runner);
            if !summary.failed.is_empty() {
                bail!(
                    "{} of {} cases failed",
                    summary.failed.len(),
                    summary.failed.len() + summary.succeeded
                );
            }
        }
        Command::Generate { seed, output } => {
            let seed = seed.unwrap_or_else(generator::clock_seed);
            let workload = WorkloadGenerator::new(seed).generate();
            fs::write(&output, format!("{workload}"))
                .with_context(|| format!("Failed to write {}", output.display()))?;
            log::info!("workload with seed {seed} written to {}", output.display());
        }
    }

    Ok(())
}
