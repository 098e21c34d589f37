//! Bézier-Auswertung für Pfad-Segmente.

use glam::Vec2;

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Wertet ein Segment als `[P0, P1, P2, P3]` aus.
pub fn cubic_bezier_segment(segment: &[Vec2; 4], t: f32) -> Vec2 {
    cubic_bezier(segment[0], segment[1], segment[2], segment[3], t)
}

/// Approximierte Kurvenlänge über Polylinien-Segmente.
pub fn approx_length(positions_fn: impl Fn(f32) -> Vec2, samples: usize) -> f32 {
    let samples = samples.max(1);
    let mut length = 0.0;
    let mut prev = positions_fn(0.0);
    for i in 1..=samples {
        let t = i as f32 / samples as f32;
        let p = positions_fn(t);
        length += prev.distance(p);
        prev = p;
    }
    length
}

/// Grobe Längenschätzung eines Segments aus Sehne und Kontrollpolygon.
///
/// `|P0P3| + (|P0P1| + |P1P2| + |P2P3|) / 2`, reicht zur Wahl der Abtastdichte.
pub fn estimated_segment_length(segment: &[Vec2; 4]) -> f32 {
    let [p0, p1, p2, p3] = *segment;
    let control_net = p0.distance(p1) + p1.distance(p2) + p2.distance(p3);
    p0.distance(p3) + control_net * 0.5
}
