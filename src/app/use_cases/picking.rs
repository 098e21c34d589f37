//! Hit-Testing auf Pfadpunkten und der Kurvenlinie.

use crate::core::{cubic_bezier_segment, Curve, CurveView, Path};
use crate::shared::options::OFFSCREEN_MARGIN_PX;
use crate::shared::EditorOptions;
use glam::Vec2;

/// Nächster Kurvenpunkt zu einer Abfrageposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveHit {
    /// Position auf der Kurve (Kurven-Koordinaten)
    pub position: Vec2,
    /// Segment, in dem die Position liegt
    pub segment_index: usize,
    /// Abstand zur Abfrageposition (Kurven-Einheiten)
    pub distance: f32,
}

/// Sucht den nächsten Pfadpunkt im Screen-Space.
///
/// Anker und Steuerpunkte haben getrennte Pick-Radien. Punkte weit außerhalb
/// des Viewports werden über ihre auf den Rand geklemmte Position mit einem
/// größeren Radius erreicht.
pub fn nearest_point_index(
    path: &Path,
    view: &CurveView,
    screen_pos: Vec2,
    options: &EditorOptions,
    include_controls: bool,
) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;

    for (index, &point) in path.points().iter().enumerate() {
        let is_anchor = Path::is_anchor(index);
        if !is_anchor && !include_controls {
            continue;
        }

        let point_screen = view.curve_to_screen(point);
        let mut distance = screen_pos.distance(point_screen);
        let mut threshold = options.pick_radius_px(is_anchor);

        if view.is_offscreen(point_screen, OFFSCREEN_MARGIN_PX) {
            threshold = options.offscreen_pick_radius_px;
            let edge = view.clamp_to_viewport(point_screen);
            distance = distance.min(screen_pos.distance(edge));
        }

        if distance < threshold && best.map_or(true, |(_, d)| distance < d) {
            best = Some((index, distance));
        }
    }

    best.map(|(index, _)| index)
}

/// Sucht die nächste abgetastete Position auf der dargestellten Kurve.
///
/// Mit mindestens zwei Keys wird die Hermite-Kurve gleichmäßig über ihren
/// Zeitbereich abgetastet, sonst der Bézier-Pfad segmentweise.
pub fn nearest_curve_sample(
    curve: &Curve,
    path: &Path,
    query: Vec2,
    options: &EditorOptions,
) -> Option<CurveHit> {
    match curve.time_range() {
        Some((min_time, max_time)) if curve.len() >= 2 => {
            let samples = options.hermite_sample_count.max(1);
            let mut best: Option<(Vec2, f32)> = None;
            for i in 0..=samples {
                let t = min_time + (max_time - min_time) * (i as f32 / samples as f32);
                let on_curve = Vec2::new(t, curve.evaluate(t));
                let distance = query.distance(on_curve);
                if best.map_or(true, |(_, d)| distance < d) {
                    best = Some((on_curve, distance));
                }
            }
            let (position, distance) = best?;
            let segment_index = curve.segment_index_at(position.x)?;
            Some(CurveHit {
                position,
                segment_index,
                distance,
            })
        }
        _ => nearest_bezier_sample(path, query, options.bezier_samples_per_segment),
    }
}

fn nearest_bezier_sample(path: &Path, query: Vec2, samples_per_segment: usize) -> Option<CurveHit> {
    let samples = samples_per_segment.max(1);
    let mut best: Option<CurveHit> = None;
    for segment_index in 0..path.segment_count() {
        let segment = path.points_in_segment(segment_index);
        for i in 0..=samples {
            let position = cubic_bezier_segment(&segment, i as f32 / samples as f32);
            let distance = query.distance(position);
            if best.map_or(true, |hit| distance < hit.distance) {
                best = Some(CurveHit {
                    position,
                    segment_index,
                    distance,
                });
            }
        }
    }
    best
}
