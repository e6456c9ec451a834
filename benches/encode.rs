use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rescode::{encode, prefixed_id, Config};

fn bench_encode(c: &mut Criterion) {
    let config = Config::new();
    c.bench_function("encode", |b| {
        b.iter(|| encode(black_box(123_456_789), &config))
    });
    c.bench_function("prefixed_id", |b| {
        b.iter(|| prefixed_id("user", black_box(123_456_789), &config))
    });
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
