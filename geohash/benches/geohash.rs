use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Deterministic spread of coordinates over the whole map.
fn sample_coords(count: usize) -> Vec<(f64, f64)> {
    (0..count)
        .map(|i| {
            let frac = i as f64 / count as f64;
            // Different strides so lat and lon don't move in lockstep
            let lat = (frac * 7.0).fract() * 180.0 - 90.0;
            let lon = (frac * 13.0).fract() * 360.0 - 180.0;
            (lat, lon)
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let coords = sample_coords(1000);

    for precision in [6, 12] {
        c.bench_function(&format!("encode_1000_precision_{}", precision), |b| {
            b.iter(|| {
                for &(lat, lon) in &coords {
                    black_box(geohash::encode(black_box(lat), black_box(lon), precision).unwrap());
                }
            });
        });
    }
}

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode", |b| {
        b.iter(|| {
            black_box(geohash::decode(black_box("wtw37qtx")).unwrap());
        });
    });
}

fn bench_adjacent_grid(c: &mut Criterion) {
    c.bench_function("adjacent_grid_precision_4", |b| {
        b.iter(|| {
            black_box(geohash::adjacent_grid(black_box("wx4g")).unwrap());
        });
    });

    c.bench_function("adjacent_grid_precision_8", |b| {
        b.iter(|| {
            black_box(geohash::adjacent_grid(black_box("wtw37qtx")).unwrap());
        });
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_adjacent_grid);
criterion_main!(benches);
