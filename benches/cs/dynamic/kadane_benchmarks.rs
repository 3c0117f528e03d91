use criterion::{black_box, criterion_group, criterion_main, Criterion};
use katas::cs::dynamic::kadane::{max_subarray_sum, max_subarray_sum_brute};
use rand::Rng;

fn bench_max_subarray_sum(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let values: Vec<i32> = (0..10_000).map(|_| rng.gen_range(-100..=100)).collect();

    c.bench_function("max_subarray_sum 10k", |b| {
        b.iter(|| max_subarray_sum(black_box(&values)))
    });

    let small = values[..500].to_vec();
    c.bench_function("max_subarray_sum_brute 500", |b| {
        b.iter(|| max_subarray_sum_brute(black_box(&small)))
    });
}

criterion_group!(benches, bench_max_subarray_sum);
criterion_main!(benches);
