use criterion::{black_box, criterion_group, criterion_main, Criterion};
use katas::cs::string::minimum_window::{minimum_window, minimum_window_brute};
use rand::Rng;

fn bench_minimum_window(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let haystack: String = (0..5_000)
        .map(|_| (b'a' + rng.gen_range(0..6)) as char)
        .collect();
    let target = "abcdef";

    c.bench_function("minimum_window 5k", |b| {
        b.iter(|| minimum_window(black_box(&haystack), black_box(target)))
    });

    let small = &haystack[..400];
    c.bench_function("minimum_window_brute 400", |b| {
        b.iter(|| minimum_window_brute(black_box(small), black_box(target)))
    });
}

criterion_group!(benches, bench_minimum_window);
criterion_main!(benches);
