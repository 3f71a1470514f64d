//! Input pool generation
//!
//! A run draws a fixed pool of operand pairs once, up front, and both
//! measurement passes read it cyclically. Each pair is held twice: as
//! native `f64` values and as arbitrary-precision values converted from
//! the same bits, so the two engines consume numerically equal inputs.

use arpfloat::Float;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ops::working_semantics;

/// Immutable pool of operand pairs shared by both engines
pub struct InputPool {
    xs: Vec<f64>,
    ys: Vec<f64>,
    apf_xs: Vec<Float>,
    apf_ys: Vec<Float>,
}

impl InputPool {
    /// Generate a pool of `size` pairs, each coordinate uniform in [0, 1)
    pub fn generate(size: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let sem = working_semantics();

        let mut xs = Vec::with_capacity(size);
        let mut ys = Vec::with_capacity(size);
        let mut apf_xs = Vec::with_capacity(size);
        let mut apf_ys = Vec::with_capacity(size);

        for _ in 0..size {
            let x: f64 = rng.gen();
            let y: f64 = rng.gen();
            apf_xs.push(Float::from_f64(x).cast(sem));
            apf_ys.push(Float::from_f64(y).cast(sem));
            xs.push(x);
            ys.push(y);
        }

        Self { xs, ys, apf_xs, apf_ys }
    }

    /// Number of operand pairs in the pool
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether the pool holds no pairs
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The native representation of pair `idx`
    pub fn native(&self, idx: usize) -> (f64, f64) {
        (self.xs[idx], self.ys[idx])
    }

    /// The arbitrary-precision representation of pair `idx`
    pub fn arbitrary(&self, idx: usize) -> (&Float, &Float) {
        (&self.apf_xs[idx], &self.apf_ys[idx])
    }
}
