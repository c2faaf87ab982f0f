// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use tread_dry_tests::scattered_spheres;

const DT: f32 = 1.0 / 60.0;

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_step");
    // The pair scan is quadratic in registered bodies.
    for &n in &[10usize, 50, 100, 250] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || scattered_spheres(n).build().expect("scene"),
                |mut scene| {
                    let report = scene.world.step(DT).expect("step");
                    criterion::black_box(report.pairs_tested);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_settle(c: &mut Criterion) {
    c.bench_function("settle_100_spheres_60_steps", |b| {
        b.iter_batched(
            || scattered_spheres(100).build().expect("scene"),
            |mut scene| scene.run(60).expect("run"),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_step, bench_settle);
criterion_main!(benches);
