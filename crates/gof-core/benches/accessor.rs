//! Warm-path accessor benchmarks for the singleton holder family.
//!
//! Every holder is published before measurement starts, so the numbers
//! compare steady-state read costs: a mutex lock (racy), a plain clone
//! (eager), an `Acquire` load (double-checked), and a `OnceLock` read
//! (lazy).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gof_core::singleton::{
    DoubleCheckedSingleton, EagerSingleton, LazySingleton, RacySingleton, Singleton,
};

fn warm_instance(c: &mut Criterion) {
    let mut group = c.benchmark_group("warm_instance");

    let racy = RacySingleton::new(|| 1_u64);
    let eager = EagerSingleton::new(1_u64);
    let double_checked = DoubleCheckedSingleton::new(|| 1_u64);
    let lazy = LazySingleton::new(|| 1_u64);

    racy.instance();
    double_checked.instance();
    lazy.instance();

    group.bench_function("racy", |b| b.iter(|| black_box(racy.instance())));
    group.bench_function("eager", |b| b.iter(|| black_box(eager.instance())));
    group.bench_function("double_checked", |b| {
        b.iter(|| black_box(double_checked.instance()))
    });
    group.bench_function("lazy", |b| b.iter(|| black_box(lazy.instance())));

    group.finish();
}

criterion_group!(benches, warm_instance);
criterion_main!(benches);
