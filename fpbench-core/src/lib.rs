//! Timed micro-benchmark harness for floating-point operation latency
//!
//! This crate measures the per-call latency of elementary arithmetic and
//! transcendental operations under two numeric engines: the platform's
//! native `f64` arithmetic and a software arbitrary-precision engine
//! (arpfloat, round-to-nearest-even). It produces raw per-trial sample
//! streams for offline statistical analysis; it performs no
//! summarization and no correctness checking of computed results.

#![warn(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod harness;
pub mod input;
pub mod ops;
pub mod output;
pub mod sampler;

// Re-export main types
pub use config::HarnessConfig;
pub use error::{HarnessError, HarnessResult};
pub use harness::{run, RunArtifacts};
pub use input::InputPool;
pub use ops::{Arity, Operation};
pub use sampler::{sample_arbitrary, sample_native, timed_pass, Engine, SampleStream};
