use bmc_canvas_engine::share::{SharePayload, decode, encode};
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_share_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("share");

    let payload = SharePayload::new("bench.md", common::generate_canvas(5, 10));
    let token = encode(&payload).unwrap();

    group.bench_function("encode", |b| {
        b.iter(|| encode(std::hint::black_box(&payload)).unwrap());
    });
    group.bench_function("decode", |b| {
        b.iter(|| decode(std::hint::black_box(&token)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_share_codec);
criterion_main!(benches);
