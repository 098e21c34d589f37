#![no_main]

use glam::Vec2;
use libfuzzer_sys::fuzz_target;
use runtime_curve_editor::{curve_to_path, path_to_curve, ConversionConfig, Curve, Path};

fn read_f32(chunk: &[u8]) -> f32 {
    let value = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    if value.is_finite() {
        value.clamp(-1.0e6, 1.0e6)
    } else {
        0.0
    }
}

fuzz_target!(|data: &[u8]| {
    let floats: Vec<f32> = data.chunks_exact(4).map(read_f32).collect();
    let config = ConversionConfig::default();

    // Externe Kurvendaten: fallible Konstruktion darf nie paniken
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(curve) = serde_json::from_str::<Curve>(text) {
            let path = curve_to_path(&curve, &config);
            let _ = path_to_curve(&path, &config);
        }
    }

    // Pfad mit streng steigenden Anker-Zeiten aus je 6 Floats pro Segment
    let mut time = 0.0f32;
    let mut points = vec![Vec2::new(time, floats.first().copied().unwrap_or(0.0))];
    for seg in floats.get(1..).unwrap_or(&[]).chunks_exact(6).take(64) {
        let next = time + seg[0].abs().clamp(0.01, 100.0);
        points.extend([
            Vec2::new(time + (next - time) * seg[1].abs().fract(), seg[2]),
            Vec2::new(time + (next - time) * seg[3].abs().fract(), seg[4]),
            Vec2::new(next, seg[5]),
        ]);
        time = next;
    }

    let path = Path::from_points(points);
    let curve = path_to_curve(&path, &config);
    assert_eq!(curve.len(), if path.segment_count() == 0 { 0 } else { path.segment_count() + 1 });
    let _ = curve_to_path(&curve, &config);
});
