use criterion::{criterion_group, criterion_main, Criterion};
use detparse::{parse_detections, NetworkDims, ParseConfig, TensorLayout, TensorView};
use std::hint::black_box;

fn make_tensor(records: usize, stride: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(records * stride);
    for i in 0..records {
        for j in 0..stride {
            let value = ((i * 13) ^ (j * 7) ^ (i * j)) & 0xFF;
            data.push(value as f32 / 255.0);
        }
    }
    data
}

fn bench_parse(c: &mut Criterion) {
    let network = NetworkDims::new(640, 640);

    // Full-size anchor-free head: 8400 records of 80 classes + 4 coords.
    let tensor = make_tensor(8400, 84);
    let layers = [TensorView::from_slice(&tensor)];
    let cfg = ParseConfig {
        confidence_threshold: 0.999,
        ..ParseConfig::new(TensorLayout::AnchorFree)
    };
    c.bench_function("parse_anchor_free_8400x84", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            parse_detections(black_box(&layers), network, &cfg, &mut out).unwrap();
            black_box(out)
        })
    });

    let tensor = make_tensor(8400, 85);
    let layers = [TensorView::from_slice(&tensor)];
    let cfg = ParseConfig {
        confidence_threshold: 0.999,
        ..ParseConfig::new(TensorLayout::AnchorBased)
    };
    c.bench_function("parse_anchor_based_8400x85", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            parse_detections(black_box(&layers), network, &cfg, &mut out).unwrap();
            black_box(out)
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
