//! Criterion benchmarks for the per-frame work done on scroll and counter ticks.
//!
//! Run with:
//!   cargo bench
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use nutri::counter::{CounterRun, CounterSpec};
use nutri::reveal::RevealTracker;

/// Benchmark a full counter run, one frame per tick.
fn bench_counter_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter_run");

    for spec in CounterSpec::defaults() {
        group.bench_with_input(
            BenchmarkId::new("to_target", &spec.element_id),
            &spec,
            |b, spec| {
                b.iter(|| {
                    let mut run = CounterRun::new(spec, 30);
                    let mut frames = 0usize;
                    while let Some(frame) = run.tick() {
                        frames += frame.text.len();
                    }
                    black_box(frames)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark reveal evaluation over growing element counts.
fn bench_reveal_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal_evaluate");

    for size in [16usize, 128, 1024].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let tops: Vec<f64> = (0..*size).map(|i| i as f64 * 120.0).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut tracker = RevealTracker::new(size);
                let mut scroll = 0.0;
                while !tracker.all_revealed() {
                    let shifted: Vec<f64> = tops.iter().map(|t| t - scroll).collect();
                    black_box(tracker.evaluate(&shifted, 900.0));
                    scroll += 600.0;
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_counter_run, bench_reveal_evaluate);
criterion_main!(benches);
