//! Run orchestration
//!
//! A run is a straight line: validate the configuration, generate the
//! input pool, measure the native pass to completion, measure the
//! arbitrary-precision pass to completion, then persist both streams.
//! The passes are never interleaved, so each engine gets an independent
//! warm-up state.

use std::path::PathBuf;

use log::info;

use crate::config::HarnessConfig;
use crate::error::HarnessResult;
use crate::input::InputPool;
use crate::ops::Operation;
use crate::output::write_samples;
use crate::sampler::{sample_arbitrary, sample_native, Engine};

/// Paths of the two sample files produced by a completed run
#[derive(Debug, Clone)]
pub struct RunArtifacts {
    /// Sample file for the native pass
    pub native_path: PathBuf,
    /// Sample file for the arbitrary-precision pass
    pub arbitrary_path: PathBuf,
}

/// Execute a full measurement run for one operation
pub fn run(config: &HarnessConfig, operation: Operation) -> HarnessResult<RunArtifacts> {
    config.validate()?;

    let seed = config.resolve_seed();
    info!(
        "generating input pool: {} pairs, seed {}",
        config.pool_size(),
        seed
    );
    let pool = InputPool::generate(config.pool_size(), seed);

    info!(
        "{}: native pass, {} trials ({} warmup)",
        operation,
        config.trials(),
        config.warmup()
    );
    let native = sample_native(&pool, operation, config.trials(), config.warmup());

    info!(
        "{}: arbitrary-precision pass, {} trials ({} warmup)",
        operation,
        config.trials(),
        config.warmup()
    );
    let arbitrary = sample_arbitrary(&pool, operation, config.trials(), config.warmup());

    let native_path = write_samples(config.output_dir(), Engine::Native, operation, native.samples())?;
    info!("wrote {}", native_path.display());

    let arbitrary_path = write_samples(
        config.output_dir(),
        Engine::Arbitrary,
        operation,
        arbitrary.samples(),
    )?;
    info!("wrote {}", arbitrary_path.display());

    Ok(RunArtifacts { native_path, arbitrary_path })
}
