//! Timed sampling loops
//!
//! Both engines run through the same timed loop: for trial i the kernel
//! evaluates exactly one operation on pool pair `i % N` between two
//! monotonic clock reads, and the elapsed nanoseconds land in the sample
//! stream at index i. The loop body is shared code, so trip count,
//! indexing, timer pair, and elapsed-time arithmetic are identical across
//! engines by construction; the only varying factor is the kernel.

use std::hint::black_box;
use std::time::Instant;

use crate::input::InputPool;
use crate::ops::Operation;

/// The numeric engine a sample stream was measured under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// Platform 64-bit IEEE 754 arithmetic
    Native,
    /// Software arbitrary-precision arithmetic
    Arbitrary,
}

impl Engine {
    /// File-name tag distinguishing this engine's output
    pub fn tag(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Arbitrary => "apf",
        }
    }
}

/// Ordered per-trial latency samples for one (operation, engine) run
pub struct SampleStream {
    /// Engine the samples were measured under
    pub engine: Engine,
    /// Operation the samples were measured for
    pub operation: Operation,
    samples: Vec<i64>,
}

impl SampleStream {
    /// The recorded samples, in trial order, nanoseconds per trial
    pub fn samples(&self) -> &[i64] {
        &self.samples
    }

    /// Number of recorded trials
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no trials were recorded
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Run `trials` timed kernel invocations, cycling through `pool_size`
/// input indices, and return the elapsed nanoseconds per trial
///
/// Clock granularity can make individual samples zero; they are recorded
/// verbatim. Samples are signed so downstream tooling shares one integer
/// type with harnesses whose clocks can run backwards between reads.
pub fn timed_pass<F: FnMut(usize)>(trials: usize, pool_size: usize, mut kernel: F) -> Vec<i64> {
    let mut samples = Vec::with_capacity(trials);
    for i in 0..trials {
        let idx = i % pool_size;
        let start = Instant::now();
        kernel(idx);
        let end = Instant::now();
        samples.push(end.duration_since(start).as_nanos() as i64);
    }
    samples
}

/// Run `iterations` untimed kernel invocations over the same index cycle
fn warmup_pass<F: FnMut(usize)>(iterations: usize, pool_size: usize, mut kernel: F) {
    for i in 0..iterations {
        kernel(i % pool_size);
    }
}

/// Measure the native fixed-precision pass for one operation
pub fn sample_native(
    pool: &InputPool,
    operation: Operation,
    trials: usize,
    warmup: usize,
) -> SampleStream {
    let kernel = operation.native_kernel();
    let mut run = |idx: usize| {
        let (x, y) = pool.native(idx);
        black_box(kernel(black_box(x), black_box(y)));
    };

    warmup_pass(warmup, pool.len(), &mut run);
    let samples = timed_pass(trials, pool.len(), &mut run);

    SampleStream { engine: Engine::Native, operation, samples }
}

/// Measure the arbitrary-precision pass for one operation
///
/// The computed value is dropped each trial; only the act of computing it
/// is measured.
pub fn sample_arbitrary(
    pool: &InputPool,
    operation: Operation,
    trials: usize,
    warmup: usize,
) -> SampleStream {
    let mut run = |idx: usize| {
        let (x, y) = pool.arbitrary(idx);
        black_box(operation.eval_arbitrary(x, y));
    };

    warmup_pass(warmup, pool.len(), &mut run);
    let samples = timed_pass(trials, pool.len(), &mut run);

    SampleStream { engine: Engine::Arbitrary, operation, samples }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Anything below -1ms cannot be clock granularity; it would mean the
    // harness itself is broken.
    const PATHOLOGICAL_NEGATIVE_NS: i64 = -1_000_000;

    #[test]
    fn test_timed_pass_index_sequence() {
        let mut seen = Vec::new();
        let samples = timed_pass(25, 7, |idx| seen.push(idx));

        assert_eq!(samples.len(), 25);
        let expected: Vec<usize> = (0..25).map(|i| i % 7).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_passes_share_index_sequence() {
        // Drive both engine entry points with an instrumented pool and
        // verify they consume identical index sequences.
        let pool = InputPool::generate(13, 5);
        let trials = 100;

        let mut native_indices = Vec::new();
        let _ = timed_pass(trials, pool.len(), |idx| {
            native_indices.push(idx);
            let (x, y) = pool.native(idx);
            black_box(x + y);
        });

        let mut apf_indices = Vec::new();
        let _ = timed_pass(trials, pool.len(), |idx| {
            apf_indices.push(idx);
            let (x, y) = pool.arbitrary(idx);
            black_box(Operation::Add.eval_arbitrary(x, y));
        });

        assert_eq!(native_indices, apf_indices);
    }

    #[test]
    fn test_sample_counts_match_trials() {
        let pool = InputPool::generate(8, 3);
        let native = sample_native(&pool, Operation::Mul, 500, 50);
        let arbitrary = sample_arbitrary(&pool, Operation::Mul, 500, 50);

        assert_eq!(native.len(), 500);
        assert_eq!(arbitrary.len(), 500);
        assert_eq!(native.engine, Engine::Native);
        assert_eq!(arbitrary.engine, Engine::Arbitrary);
    }

    #[test]
    fn test_no_pathological_negative_samples() {
        let pool = InputPool::generate(8, 3);
        for op in [Operation::Add, Operation::Tan] {
            let stream = sample_native(&pool, op, 2000, 0);
            assert!(
                stream.samples().iter().all(|&s| s > PATHOLOGICAL_NEGATIVE_NS),
                "harness defect: pathologically negative sample for {op}"
            );
        }
    }

    #[test]
    fn test_zero_warmup_is_allowed() {
        let pool = InputPool::generate(4, 1);
        let stream = sample_native(&pool, Operation::Div, 10, 0);
        assert_eq!(stream.len(), 10);
        assert!(!stream.is_empty());
    }
}
