use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use runtime_curve_editor::{curve_to_path, path_to_curve, ConversionConfig, Curve, Keyframe, Path};
use std::hint::black_box;

fn build_synthetic_curve(key_count: usize) -> Curve {
    let keys = (0..key_count)
        .map(|i| {
            let t = i as f32 * 0.1;
            let value = (t * 1.7).sin();
            let slope = 1.7 * (t * 1.7).cos();
            Keyframe::new(t, value, slope, slope)
        })
        .collect();
    Curve::new(keys)
}

fn build_synthetic_path(segment_count: usize) -> Path {
    let mut points = vec![Vec2::ZERO];
    for i in 0..segment_count {
        let t0 = i as f32;
        let wave = if i % 2 == 0 { 0.8 } else { -0.8 };
        points.extend([
            Vec2::new(t0 + 0.3, wave),
            Vec2::new(t0 + 0.7, -wave),
            Vec2::new(t0 + 1.0, (t0 * 0.37).sin()),
        ]);
    }
    Path::from_points(points)
}

fn bench_conversion(c: &mut Criterion) {
    let config = ConversionConfig::default();
    let mut group = c.benchmark_group("conversion");

    for &size in &[16usize, 1_000usize, 10_000usize] {
        let curve = build_synthetic_curve(size);
        group.bench_with_input(BenchmarkId::new("curve_to_path", size), &curve, |b, curve| {
            b.iter(|| black_box(curve_to_path(black_box(curve), &config).point_count()))
        });

        let path = build_synthetic_path(size);
        group.bench_with_input(BenchmarkId::new("path_to_curve", size), &path, |b, path| {
            b.iter(|| black_box(path_to_curve(black_box(path), &config).len()))
        });
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let curve = build_synthetic_curve(1_000);
    let (start, end) = curve.time_range().unwrap_or((0.0, 1.0));

    c.bench_function("curve_evaluate_1024", |b| {
        b.iter(|| {
            let mut sum = 0.0f32;
            for i in 0..1024 {
                let t = start + (end - start) * (i as f32 / 1023.0);
                sum += curve.evaluate(black_box(t));
            }
            black_box(sum)
        })
    });
}

criterion_group!(codec_benches, bench_conversion, bench_evaluate);
criterion_main!(codec_benches);
