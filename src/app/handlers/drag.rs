//! Handler für das Ziehen von Pfadpunkten.

use crate::app::history::Snapshot;
use crate::app::state::InteractionPhase;
use crate::app::use_cases::conversion;
use crate::app::AppState;
use crate::core::Path;
use glam::Vec2;

/// Beginnt einen Drag auf `point_index`.
pub fn begin(state: &mut AppState, point_index: usize) {
    if !state.is_idle() {
        log::debug!("Drag-Start ignoriert: Phase {:?}", state.phase);
        return;
    }
    if point_index >= state.display_path.point_count() {
        log::warn!("Drag-Start auf ungültigem Punkt {}", point_index);
        return;
    }
    if state.display_path.auto_set_control_points() && !Path::is_anchor(point_index) {
        log::debug!("Steuerpunkte sind im Auto-Modus nicht verschiebbar");
        return;
    }

    state.drag_origin = Some(Snapshot::from_state(state));
    state.phase = InteractionPhase::Dragging { point_index };
    state.hover.curve_position = None;
    log::debug!("Drag gestartet auf Punkt {}", point_index);
}

/// Verschiebt den gezogenen Punkt. Keine Konvertierung während des Drags.
pub fn move_to(state: &mut AppState, position: Vec2) {
    let Some(point_index) = state.dragged_point() else {
        return;
    };
    let target = if Path::is_anchor(point_index) {
        clamp_anchor_time(&state.display_path, point_index, position, state.options.anchor_spacing())
    } else {
        position
    };
    state.display_path.move_point(point_index, target);
}

/// Beendet den Drag und übernimmt den Pfad in die Kurve.
pub fn end(state: &mut AppState) {
    let Some(point_index) = state.dragged_point() else {
        return;
    };
    state.phase = InteractionPhase::Idle;

    let Some(origin) = state.drag_origin.take() else {
        return;
    };
    if origin.display_path == state.display_path {
        log::debug!("Drag ohne Bewegung auf Punkt {}", point_index);
        return;
    }

    state.history.record_snapshot(origin);
    conversion::request_conversion(state);
    log::info!("Punkt {} verschoben", point_index);
}

/// Hält die Zeit eines Ankers streng zwischen seinen Nachbar-Ankern.
///
/// Der Abstand wächst mit dem Betrag der Nachbarzeit, damit `t ± spacing`
/// auch bei großen Zeiten ein anderer f32-Wert bleibt.
fn clamp_anchor_time(path: &Path, anchor_index: usize, position: Vec2, min_spacing: f32) -> Vec2 {
    let gap = |t: f32| min_spacing.max(t.abs() * f32::EPSILON * 4.0);
    let lower = anchor_index.checked_sub(3).map(|prev| {
        let t = path.point(prev).x;
        t + gap(t)
    });
    let upper = (anchor_index + 3 < path.point_count()).then(|| {
        let t = path.point(anchor_index + 3).x;
        t - gap(t)
    });

    let mut time = position.x;
    if let Some(lo) = lower {
        time = time.max(lo);
    }
    if let Some(hi) = upper {
        time = time.min(hi);
    }
    if let (Some(lo), Some(hi)) = (lower, upper) {
        if lo > hi {
            // Kein Platz zwischen den Nachbarn: Zeit bleibt stehen
            time = path.point(anchor_index).x;
        }
    }
    Vec2::new(time, position.y)
}
