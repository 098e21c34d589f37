//! Builder für Darstellungs-Szenen aus dem AppState.

use crate::app::state::InteractionPhase;
use crate::app::AppState;
use crate::core::Path;
use crate::shared::{CurveSampling, CurveScene, ScenePoint};
use glam::Vec2;

/// Baut eine CurveScene aus dem aktuellen AppState.
///
/// Während eines Drags oder einer ausstehenden Konvertierung ist der Pfad
/// aktueller als die Kurve, daher wird dann der Bézier-Pfad abgetastet.
pub fn build(state: &AppState) -> CurveScene {
    let path_is_ahead = !matches!(state.phase, InteractionPhase::Idle);
    let (polyline, sampling) = if path_is_ahead || state.curve.len() < 2 {
        (
            state
                .display_path
                .flatten(state.options.bezier_samples_per_segment),
            CurveSampling::Bezier,
        )
    } else {
        (sample_curve(state), CurveSampling::Hermite)
    };

    let show_controls = state.view.show_control_points;
    let dragged = state.dragged_point();
    let path = &state.display_path;

    let points = path
        .points()
        .iter()
        .enumerate()
        .filter(|(index, _)| show_controls || Path::is_anchor(*index))
        .map(|(index, &position)| ScenePoint {
            index,
            position,
            is_anchor: Path::is_anchor(index),
            hovered: state.hover.point_index == Some(index),
            dragged: dragged == Some(index),
        })
        .collect();

    let handle_lines = if show_controls {
        (0..path.segment_count())
            .flat_map(|segment| {
                let [a, c1, c2, b] = path.points_in_segment(segment);
                [(a, c1), (b, c2)]
            })
            .collect()
    } else {
        Vec::new()
    };

    CurveScene {
        polyline,
        sampling,
        points,
        handle_lines,
        hovered_curve_position: state.hover.curve_position,
        greyed_out: state.phase == InteractionPhase::Converting,
        view: state.view.curve_view(),
    }
}

fn sample_curve(state: &AppState) -> Vec<Vec2> {
    let Some((min_time, max_time)) = state.curve.time_range() else {
        return Vec::new();
    };
    let samples = state.options.hermite_sample_count.max(1);
    (0..=samples)
        .map(|i| {
            let t = min_time + (max_time - min_time) * (i as f32 / samples as f32);
            Vec2::new(t, state.curve.evaluate(t))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::state::InteractionPhase;
    use crate::app::AppState;
    use crate::shared::CurveSampling;

    #[test]
    fn idle_scene_samples_hermite_curve() {
        let state = AppState::new();
        let scene = build(&state);
        assert_eq!(scene.sampling, CurveSampling::Hermite);
        assert_eq!(scene.polyline.len(), state.options.hermite_sample_count + 1);
        assert_eq!(scene.points.len(), 4);
        assert_eq!(scene.handle_lines.len(), 2);
        assert!(!scene.greyed_out);
    }

    #[test]
    fn dragging_scene_samples_bezier_path() {
        let mut state = AppState::new();
        state.phase = InteractionPhase::Dragging { point_index: 3 };
        let scene = build(&state);
        assert_eq!(scene.sampling, CurveSampling::Bezier);
        assert!(scene.points.iter().any(|p| p.index == 3 && p.dragged));
    }

    #[test]
    fn converting_scene_is_greyed_out() {
        let mut state = AppState::new();
        state.phase = InteractionPhase::Converting;
        assert!(build(&state).greyed_out);
    }

    #[test]
    fn hidden_controls_leave_only_anchors() {
        let mut state = AppState::new();
        state.view.show_control_points = false;
        let scene = build(&state);
        assert_eq!(scene.anchor_count(), 2);
        assert_eq!(scene.points.len(), 2);
        assert!(scene.handle_lines.is_empty());
    }
}
