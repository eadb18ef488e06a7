// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
//! Cost of materializing group elements, without any application step.
use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use fuchsian_orbit::{
    enumerate, make_transformation, GeneratorSet, LetterOrder, Mode, Prng, Tolerance,
};

fn triangle_group() -> GeneratorSet {
    // (2, 3, ∞) generators plus a hyperbolic element.
    GeneratorSet::new(vec![
        make_transformation(1.0, 1.0, 0.0, 1.0).unwrap(),
        make_transformation(0.0, -1.0, 1.0, 0.0).unwrap(),
        make_transformation(2.0, 1.0, 1.0, 1.0).unwrap(),
    ])
}

fn bench_enumeration(c: &mut Criterion) {
    let gens = triangle_group();
    let mut group = c.benchmark_group("enumerate");
    for &n in &[1_000usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |b, &n| {
            b.iter(|| {
                let els = enumerate(
                    &gens,
                    n,
                    Mode::Sequential,
                    LetterOrder::default(),
                    Tolerance::DEFAULT,
                )
                .unwrap();
                black_box(els)
            });
        });
        group.bench_with_input(BenchmarkId::new("random", n), &n, |b, &n| {
            b.iter_batched(
                || Prng::from_seed_u64(n as u64),
                |mut rng| {
                    let els = enumerate(
                        &gens,
                        n,
                        Mode::Random(&mut rng),
                        LetterOrder::default(),
                        Tolerance::DEFAULT,
                    )
                    .unwrap();
                    black_box(els)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_enumeration);
criterion_main!(benches);
