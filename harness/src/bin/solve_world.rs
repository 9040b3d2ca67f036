//! Solve a sample world and print its sequence diagram.
//!
//! Usage: `solve_world [WORLD] [--strategy NAME] [--seed N] [--max-expansions N]`
//!
//! `RUST_LOG` controls log verbosity (default `warn`).

use std::process::ExitCode;

use clap::Parser;
use seqplan_harness::{run, RunConfig};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::parse();
    match run(&config) {
        Ok(report) => {
            print!("{report}");
            if report.outcome.is_solved() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
