//! Reine Polylinien-Geometrie (Arc-Length-Resampling).
//!
//! Layer-neutral: wird von `core::path` genutzt, ohne Zirkel-Abhängigkeiten
//! zu erzeugen.

use glam::Vec2;

/// Verteilt Punkte mit festem Abstand `spacing` entlang einer Polyline.
///
/// Der erste Punkt wird immer übernommen. Der Rest nach dem letzten vollen
/// Abstand wird verworfen, der Endpunkt also nur getroffen, wenn die Länge
/// ein Vielfaches von `spacing` ist.
pub fn resample_fixed_spacing(polyline: &[Vec2], spacing: f32) -> Vec<Vec2> {
    let Some(&first) = polyline.first() else {
        return Vec::new();
    };
    if spacing <= 0.0 || !spacing.is_finite() {
        return vec![first];
    }

    let mut result = vec![first];
    let mut prev = first;
    let mut since_last = 0.0f32;

    for &p in &polyline[1..] {
        let mut from = prev;
        let mut seg_len = from.distance(p);
        while since_last + seg_len >= spacing {
            let needed = spacing - since_last;
            let t = if seg_len > f32::EPSILON {
                needed / seg_len
            } else {
                0.0
            };
            let even = from.lerp(p, t);
            result.push(even);
            from = even;
            seg_len = from.distance(p);
            since_last = 0.0;
        }
        since_last += seg_len;
        prev = p;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fixed_spacing_on_straight_line() {
        let line = [Vec2::ZERO, Vec2::new(1.0, 0.0)];
        let points = resample_fixed_spacing(&line, 0.25);
        assert_eq!(points.len(), 5);
        for (i, p) in points.iter().enumerate() {
            assert_relative_eq!(p.x, i as f32 * 0.25, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_fixed_spacing_across_corners() {
        let line = [Vec2::ZERO, Vec2::new(0.5, 0.0), Vec2::new(0.5, 0.5)];
        let points = resample_fixed_spacing(&line, 0.3);
        assert_eq!(points.len(), 4);
        for w in points.windows(2) {
            // Abstand entlang der Polyline ist 0.3, Luftlinie höchstens 0.3
            assert!(w[0].distance(w[1]) <= 0.3 + 1e-5);
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(resample_fixed_spacing(&[], 1.0).is_empty());
        assert_eq!(resample_fixed_spacing(&[Vec2::ONE], 0.0), vec![Vec2::ONE]);
    }
}
