use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rigbake_core::{correct_curve, RotationCurve};

/// Dense synthetic curve with periodic wrap and pole artifacts.
fn flip_heavy_curve(len: usize) -> RotationCurve {
    let mut x = Vec::with_capacity(len);
    let mut y = Vec::with_capacity(len);
    let mut z = Vec::with_capacity(len);
    for k in 0..len {
        let t = k as f64;
        let artifact = match k % 7 {
            0 => 360.0,
            3 => -360.0,
            5 => 180.0,
            _ => 0.0,
        };
        x.push((t * 7.0) % 160.0 + artifact);
        y.push((t * 3.0) % 80.0 - artifact);
        z.push((t * 11.0) % 160.0 - 80.0 + artifact);
    }
    let frames = (0..len as i64).collect();
    RotationCurve::new(frames, x, y, z).expect("aligned")
}

fn bench_correct_curve(c: &mut Criterion) {
    let curve = flip_heavy_curve(10_000);
    c.bench_function("correct_curve_10k", |b| {
        b.iter(|| correct_curve(black_box(&curve)))
    });
}

criterion_group!(benches, bench_correct_curve);
criterion_main!(benches);
