use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::num::NonZeroU64;

use nullopt::NullOpt;

fn bench_map_chain(c: &mut Criterion) {
    let seed = NonZeroU64::new(17).unwrap();

    c.bench_function("nullopt_map_chain", |b| {
        b.iter(|| {
            black_box(NullOpt::of(black_box(seed)))
                .map(|n| NonZeroU64::new(n.get().wrapping_mul(3)).unwrap())
                .map(|n| NonZeroU64::new(n.get() | 1).unwrap())
                .get_or_else(|| seed)
        })
    });

    c.bench_function("option_map_chain", |b| {
        b.iter(|| {
            black_box(Some(black_box(seed)))
                .map(|n| NonZeroU64::new(n.get().wrapping_mul(3)).unwrap())
                .map(|n| NonZeroU64::new(n.get() | 1).unwrap())
                .unwrap_or(seed)
        })
    });
}

fn bench_fold(c: &mut Criterion) {
    c.bench_function("nullopt_fold_present", |b| {
        let carrier = NullOpt::of(99u64);
        b.iter(|| black_box(carrier).fold(|| 0u64, |n| n + 1))
    });

    c.bench_function("nullopt_fold_absent", |b| {
        let carrier = NullOpt::<u64>::empty();
        b.iter(|| black_box(carrier).fold(|| 0u64, |n| n + 1))
    });
}

fn bench_zip(c: &mut Criterion) {
    let a = NonZeroU64::new(3).unwrap();
    let b_val = NonZeroU64::new(4).unwrap();

    c.bench_function("nullopt_zip_present", |b| {
        b.iter(|| black_box(NullOpt::of(a)).zip(black_box(NullOpt::of(b_val))))
    });

    c.bench_function("nullopt_zip_absent_side", |b| {
        b.iter(|| black_box(NullOpt::of(a)).zip(black_box(NullOpt::<NonZeroU64>::empty())))
    });
}

fn bench_reference_carrier(c: &mut Criterion) {
    let value = 123456u64;

    c.bench_function("nullopt_ref_filter_contains", |b| {
        b.iter(|| {
            let carrier = NullOpt::of(black_box(&value));
            carrier.filter(|v| **v > 1000).contains(&&value)
        })
    });
}

criterion_group!(
    benches,
    bench_map_chain,
    bench_fold,
    bench_zip,
    bench_reference_carrier
);
criterion_main!(benches);
