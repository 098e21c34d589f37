//! Handler für Laufzeit-Optionen.

use crate::app::use_cases::conversion;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen.
///
/// Wird der Auto-Modus eingeschaltet, werden die Steuerpunkte sofort
/// geglättet und die Kurve aus dem Pfad neu erzeugt.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    let auto_changed = options.auto_set_control_points != state.options.auto_set_control_points;
    let depth_changed = options.undo_depth != state.options.undo_depth;
    state.options = options;
    state.view.show_control_points = state.options.show_control_points;

    if depth_changed {
        state.history.set_max_depth(state.options.undo_depth);
    }
    if auto_changed {
        let enabled = state.options.auto_set_control_points;
        if enabled && state.is_idle() {
            state.record_undo_snapshot();
            state.display_path.set_auto_set_control_points(true);
            conversion::request_conversion(state);
        } else {
            state.display_path.arm_auto_set_control_points(enabled);
        }
    }
    log::info!("Optionen übernommen");
}

/// Schreibt die aktuellen Optionen neben die Binary.
pub fn save_options(state: &AppState) -> anyhow::Result<()> {
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabling_auto_mode_smooths_and_converts() {
        let mut state = AppState::new();
        crate::app::handlers::structure::split_segment(
            &mut state,
            glam::Vec2::new(0.5, 0.8),
            0,
        )
        .unwrap();
        let revision = state.curve_revision;

        let mut options = state.options.clone();
        options.auto_set_control_points = true;
        apply_options(&mut state, options);

        assert!(state.display_path.auto_set_control_points());
        assert_eq!(state.curve_revision, revision + 1);
    }

    #[test]
    fn shrinking_undo_depth_applies_to_history() {
        let mut state = AppState::new();
        for _ in 0..3 {
            state.record_undo_snapshot();
        }
        let mut options = state.options.clone();
        options.undo_depth = 1;
        apply_options(&mut state, options);

        crate::app::handlers::history::undo(&mut state);
        assert!(!state.can_undo());
    }
}
