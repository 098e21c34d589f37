//! Handler für Viewport, sichtbaren Kurvenbereich und Hover-Feedback.

use crate::app::AppState;
use glam::Vec2;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = Vec2::from(size).max(Vec2::ONE);
}

/// Setzt den sichtbaren Kurvenbereich (Zeit, Wert).
pub fn set_curve_range(state: &mut AppState, range: [f32; 2]) {
    let range = Vec2::from(range);
    if range.x <= 0.0 || range.y <= 0.0 || !range.is_finite() {
        log::warn!("Ungültiger Kurvenbereich {:?} ignoriert", range);
        return;
    }
    state.view.curve_range = range;
}

/// Blendet Steuerpunkte ein oder aus.
pub fn toggle_control_points(state: &mut AppState) {
    state.view.show_control_points = !state.view.show_control_points;
    if !state.view.show_control_points
        && state
            .hover
            .point_index
            .is_some_and(|i| !crate::core::Path::is_anchor(i))
    {
        state.hover.point_index = None;
    }
}

/// Setzt das Hover-Feedback.
pub fn set_hover(state: &mut AppState, point_index: Option<usize>, curve_position: Option<Vec2>) {
    state.hover.point_index = point_index;
    state.hover.curve_position = if point_index.is_some() {
        None
    } else {
        curve_position
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_curve_range_is_ignored() {
        let mut state = AppState::new();
        set_curve_range(&mut state, [0.0, 2.0]);
        assert_eq!(state.view.curve_range, Vec2::ONE);
        set_curve_range(&mut state, [2.0, 3.0]);
        assert_eq!(state.view.curve_range, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn hovering_a_point_hides_curve_preview() {
        let mut state = AppState::new();
        set_hover(&mut state, Some(0), Some(Vec2::ONE));
        assert_eq!(state.hover.curve_position, None);
        set_hover(&mut state, None, Some(Vec2::ONE));
        assert_eq!(state.hover.curve_position, Some(Vec2::ONE));
    }

    #[test]
    fn hiding_controls_clears_control_hover() {
        let mut state = AppState::new();
        set_hover(&mut state, Some(1), None);
        toggle_control_points(&mut state);
        assert!(!state.view.show_control_points);
        assert_eq!(state.hover.point_index, None);
    }
}
