//! Harness configuration
//!
//! All run parameters live in an explicit [`HarnessConfig`] value passed
//! into the harness rather than in process-lifetime globals, so tests can
//! run with small trial counts and throwaway output directories.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{HarnessError, HarnessResult};

/// Default number of operand pairs in the input pool
pub const DEFAULT_POOL_SIZE: usize = 1000;

/// Default number of timed trials per engine
pub const DEFAULT_TRIALS: usize = 1_000_000;

/// Default number of untimed warmup iterations per engine
pub const DEFAULT_WARMUP: usize = 1_000_000;

/// Default directory for sample files, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "results";

/// Configuration for a measurement run
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pool_size: usize,
    trials: usize,
    warmup: usize,
    output_dir: PathBuf,
    seed: Option<u64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            trials: DEFAULT_TRIALS,
            warmup: DEFAULT_WARMUP,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: None,
        }
    }
}

impl HarnessConfig {
    /// Create a configuration with the default run parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input pool size
    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Set the timed trial count per engine
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Set the untimed warmup iteration count per engine
    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }

    /// Set the directory sample files are written into
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Pin the pseudo-random seed instead of deriving it from the clock
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Input pool size
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Timed trial count per engine
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Warmup iteration count per engine
    pub fn warmup(&self) -> usize {
        self.warmup
    }

    /// Directory sample files are written into
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// The seed to use for this run
    ///
    /// A pinned seed is returned as-is; otherwise the seed is derived from
    /// the wall clock at the time of the call, so consecutive runs draw
    /// different input pools.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }

    /// Reject configurations the sampler cannot run with
    pub fn validate(&self) -> HarnessResult<()> {
        if self.pool_size == 0 {
            return Err(HarnessError::InvalidConfig(
                "pool size must be at least 1".to_string(),
            ));
        }
        if self.trials == 0 {
            return Err(HarnessError::InvalidConfig(
                "trial count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HarnessConfig::default();
        assert_eq!(config.pool_size(), DEFAULT_POOL_SIZE);
        assert_eq!(config.trials(), DEFAULT_TRIALS);
        assert_eq!(config.warmup(), DEFAULT_WARMUP);
        assert_eq!(config.output_dir(), Path::new(DEFAULT_OUTPUT_DIR));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = HarnessConfig::new()
            .with_pool_size(16)
            .with_trials(500)
            .with_warmup(0)
            .with_output_dir("/tmp/fpbench")
            .with_seed(42);

        assert_eq!(config.pool_size(), 16);
        assert_eq!(config.trials(), 500);
        assert_eq!(config.warmup(), 0);
        assert_eq!(config.output_dir(), Path::new("/tmp/fpbench"));
        assert_eq!(config.resolve_seed(), 42);
    }

    #[test]
    fn test_validate_rejects_empty_pool() {
        let config = HarnessConfig::new().with_pool_size(0);
        assert!(matches!(
            config.validate(),
            Err(HarnessError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_trials() {
        let config = HarnessConfig::new().with_trials(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_clock_seed_varies() {
        let config = HarnessConfig::new();
        // Two clock reads a moment apart must not collapse to a constant.
        let a = config.resolve_seed();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = config.resolve_seed();
        assert_ne!(a, b);
    }
}
