//! Use-Case-Funktionen für die Pfad↔Kurve-Synchronisation.
//!
//! Konvertiert wird nur an festen Übergängen: Drag-Ende, strukturelle
//! Bearbeitung und programmatisches Setzen der Kurve. Während eines Drags
//! bleibt der Pfad unangetastet.

use crate::app::state::InteractionPhase;
use crate::app::AppState;
use crate::core::{curve_to_path, path_to_curve, Curve};
use crate::shared::ConversionMode;

/// Leitet den Anzeige-Pfad aus der aktuellen Kurve neu ab.
pub fn refresh_display_path(state: &mut AppState) {
    let mut path = curve_to_path(&state.curve, &state.options.conversion);
    path.arm_auto_set_control_points(state.options.auto_set_control_points);
    state.display_path = path;
}

/// Ersetzt die Kurve und leitet den Anzeige-Pfad neu ab.
pub fn set_curve(state: &mut AppState, curve: Curve) {
    state.replace_curve(curve);
    refresh_display_path(state);
    state.pending_conversion = false;
    log::debug!(
        "Kurve gesetzt: {} Keys, Revision {}",
        state.curve.len(),
        state.curve_revision
    );
}

/// Übernimmt den Anzeige-Pfad als neue Kurve; der Pfad selbst bleibt erhalten.
pub fn commit_path_to_curve(state: &mut AppState) {
    let curve = path_to_curve(&state.display_path, &state.options.conversion);
    state.replace_curve(curve);
    state.pending_conversion = false;
    state.phase = InteractionPhase::Idle;
    log::debug!(
        "Pfad übernommen: {} Keys, Revision {}",
        state.curve.len(),
        state.curve_revision
    );
}

/// Konvertiert sofort oder merkt die Konvertierung für den nächsten Frame vor.
pub fn request_conversion(state: &mut AppState) {
    match state.options.conversion_mode {
        ConversionMode::Immediate => commit_path_to_curve(state),
        ConversionMode::NextFrame => {
            state.pending_conversion = true;
            state.phase = InteractionPhase::Converting;
        }
    }
}

/// Führt eine vorgemerkte Konvertierung aus.
///
/// Gibt `true` zurück, wenn konvertiert wurde.
pub fn run_pending_conversion(state: &mut AppState) -> bool {
    if !state.pending_conversion {
        return false;
    }
    commit_path_to_curve(state);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn set_curve_refreshes_display_path() {
        let mut state = AppState::new();
        let before = state.curve_revision;
        set_curve(&mut state, Curve::ease_in_out(0.0, 0.2, 1.0, 0.8));
        assert_eq!(state.curve_revision, before + 1);
        assert_eq!(state.display_path.point(0), Vec2::new(0.0, 0.2));
        assert_eq!(state.display_path.point(3), Vec2::new(1.0, 0.8));
    }

    #[test]
    fn commit_keeps_user_handles() {
        let mut state = AppState::new();
        state.display_path.set_point_raw(1, Vec2::new(0.05, 0.4));
        commit_path_to_curve(&mut state);
        assert_eq!(state.display_path.point(1), Vec2::new(0.05, 0.4));
        assert!((state.curve.keys()[0].out_tangent - 8.0).abs() < 1e-4);
    }

    #[test]
    fn next_frame_mode_defers_conversion() {
        let mut state = AppState::new();
        state.options.conversion_mode = ConversionMode::NextFrame;
        let before = state.curve_revision;

        request_conversion(&mut state);
        assert_eq!(state.phase, InteractionPhase::Converting);
        assert_eq!(state.curve_revision, before);

        assert!(run_pending_conversion(&mut state));
        assert_eq!(state.phase, InteractionPhase::Idle);
        assert_eq!(state.curve_revision, before + 1);
        assert!(!run_pending_conversion(&mut state));
    }
}
