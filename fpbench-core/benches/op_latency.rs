//! Criterion cross-check of the two engines
//!
//! The harness binary records raw per-call samples; these benches give a
//! statistically summarized second opinion on the same kernels.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fpbench_core::{InputPool, Operation};

fn op_latency_benchmark(c: &mut Criterion) {
    let pool = InputPool::generate(1000, 42);

    for op in Operation::ALL {
        let kernel = op.native_kernel();
        let mut i = 0usize;
        c.bench_function(&format!("native_{op}"), |b| {
            b.iter(|| {
                let idx = i % pool.len();
                i += 1;
                let (x, y) = pool.native(idx);
                black_box(kernel(black_box(x), black_box(y)))
            })
        });

        let mut j = 0usize;
        c.bench_function(&format!("apf_{op}"), |b| {
            b.iter(|| {
                let idx = j % pool.len();
                j += 1;
                let (x, y) = pool.arbitrary(idx);
                black_box(op.eval_arbitrary(x, y))
            })
        });
    }
}

criterion_group!(benches, op_latency_benchmark);
criterion_main!(benches);
