//! Konvertierung zwischen Bézier-Pfad und Keyframe-Kurve.
//!
//! Beide Richtungen sind reine Funktionen. Die Rückrichtung ist nicht exakt:
//! eine Tangente legt nur die Richtung eines Henkels fest, nicht seinen
//! Abstand zum Anker. `curve_to_path` rekonstruiert den Abstand daher aus
//! einem festen Anteil des Zeitintervalls oder, mit
//! [`HandleDistancePolicy::PreferStored`], aus den im Keyframe mitgeführten
//! Henkel-Abständen.

use super::keyframe::{Curve, Keyframe};
use super::path::Path;
use crate::shared::{ConversionConfig, HandleDistancePolicy};
use glam::Vec2;

/// Relativer Vergleich: `|a - b| <= eps · max(1, |a|, |b|)`.
pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps * 1.0f32.max(a.abs()).max(b.abs())
}

/// Steigung vom Anker zum Henkel; senkrechte Henkel liefern 0.
pub fn tangent_from_control(anchor: Vec2, control: Vec2, vertical_epsilon: f32) -> f32 {
    let delta = control - anchor;
    if delta.x.abs() < vertical_epsilon {
        0.0
    } else {
        delta.y / delta.x
    }
}

/// Henkel-Position aus Tangente und vorzeichenbehaftetem Zeitabstand.
pub fn control_from_tangent(anchor: Vec2, tangent: f32, time_offset: f32) -> Vec2 {
    anchor + Vec2::new(time_offset, tangent * time_offset)
}

/// Gilt das Segment `a → b` als Gerade?
///
/// Ja, wenn die Werte gleich sind, beide Tangenten ≈ 0 sind oder beide
/// Tangenten der Geradensteigung entsprechen.
pub fn is_flat_segment(a: &Keyframe, b: &Keyframe, config: &ConversionConfig) -> bool {
    let eps_value = config.flat_value_epsilon;
    if approx_eq(a.value, b.value, eps_value) {
        return true;
    }
    if approx_eq(a.out_tangent, 0.0, eps_value) && approx_eq(b.in_tangent, 0.0, eps_value) {
        return true;
    }
    let straight_slope = (b.value - a.value) / (b.time - a.time);
    (a.out_tangent - straight_slope).abs() < config.flat_tangent_epsilon
        && (b.in_tangent - straight_slope).abs() < config.flat_tangent_epsilon
}

/// Erzeugt einen Pfad mit einem Segment pro Keyframe-Paar.
///
/// Kurven mit weniger als zwei Keys ergeben einen Ein-Punkt-Pfad im Ursprung.
pub fn curve_to_path(curve: &Curve, config: &ConversionConfig) -> Path {
    let keys = curve.keys();
    if keys.len() < 2 {
        return Path::new(Vec2::ZERO);
    }

    let mut points = Vec::with_capacity((keys.len() - 1) * 3 + 1);
    points.push(Vec2::new(keys[0].time, keys[0].value));

    for pair in keys.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let start = Vec2::new(a.time, a.value);
        let end = Vec2::new(b.time, b.value);

        let (control1, control2) = if is_flat_segment(a, b, config) {
            (start.lerp(end, 1.0 / 3.0), start.lerp(end, 2.0 / 3.0))
        } else {
            let tangent_weight = (b.time - a.time) * config.control_point_time_fraction;
            let (out_weight, in_weight) = match config.handle_distance {
                HandleDistancePolicy::TimeFraction => (tangent_weight, tangent_weight),
                HandleDistancePolicy::PreferStored => (
                    a.out_weight.unwrap_or(tangent_weight),
                    b.in_weight.unwrap_or(tangent_weight),
                ),
            };
            (
                control_from_tangent(start, a.out_tangent, out_weight),
                control_from_tangent(end, b.in_tangent, -in_weight),
            )
        };

        points.extend([control1, control2, end]);
    }

    log::debug!(
        "Kurve → Pfad: {} Keys, {} Punkte",
        keys.len(),
        points.len()
    );
    Path::from_points(points)
}

/// Erzeugt eine Kurve mit einem Keyframe pro Anker.
///
/// Anker werden exakt übernommen. Ein Pfad ohne Segment ergibt eine leere
/// Kurve.
///
/// # Panics
/// Wenn die Anker-Zeiten nicht streng steigen.
pub fn path_to_curve(path: &Path, config: &ConversionConfig) -> Curve {
    if path.segment_count() == 0 {
        return Curve::empty();
    }

    let points = path.points();
    let eps = config.vertical_handle_epsilon;
    let last = points.len() - 1;

    let keys: Vec<Keyframe> = (0..=last)
        .step_by(3)
        .map(|i| {
            let anchor = points[i];
            let mut key = Keyframe::flat(anchor.x, anchor.y);

            if i > 0 {
                let control = points[i - 1];
                key.in_tangent = tangent_from_control(anchor, control, eps);
                key.in_weight = handle_weight(anchor.x - control.x, eps);
            }
            if i < last {
                let control = points[i + 1];
                key.out_tangent = tangent_from_control(anchor, control, eps);
                key.out_weight = handle_weight(control.x - anchor.x, eps);
            }
            key
        })
        .collect();

    log::debug!(
        "Pfad → Kurve: {} Segmente, {} Keys",
        path.segment_count(),
        keys.len()
    );
    Curve::new(keys)
}

fn handle_weight(time_offset: f32, vertical_epsilon: f32) -> Option<f32> {
    (time_offset.abs() >= vertical_epsilon).then_some(time_offset)
}
