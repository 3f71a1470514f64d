//! Command-line entry point for the latency harness
//!
//! Resolves the requested operation up front, runs the full measurement
//! with the default configuration, and prints the two sample file paths.
//! Any failure, including an unknown operation name, stops the run
//! before measurement or file I/O and exits non-zero.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use fpbench_core::{harness, HarnessConfig, Operation};

mod cli;

use cli::Cli;

fn main() {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        for cause in e.chain().skip(1) {
            eprintln!("Caused by: {cause}");
        }
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Resolve the operation before anything else happens; an unknown
    // name must not reach the sampler or the filesystem.
    let operation: Operation = cli.operation.parse()?;

    let config = HarnessConfig::default();
    log::debug!(
        "running `{}`: {} trials over a pool of {}",
        operation,
        config.trials(),
        config.pool_size()
    );

    let artifacts = harness::run(&config, operation)
        .with_context(|| format!("measurement run for `{operation}` failed"))?;

    println!("{}", artifacts.native_path.display());
    println!("{}", artifacts.arbitrary_path.display());
    Ok(())
}
