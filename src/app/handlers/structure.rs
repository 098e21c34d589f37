//! Handler für strukturelle Pfad-Änderungen (Einfügen, Löschen, Anhängen).

use crate::app::history::Snapshot;
use crate::app::use_cases::conversion;
use crate::app::AppState;
use crate::core::PathError;
use glam::Vec2;

/// Teilt `segment_index` mit einem neuen Anker bei `position`.
///
/// Positionen, deren Zeit nicht streng zwischen den Segment-Ankern liegt,
/// werden verworfen.
pub fn split_segment(state: &mut AppState, position: Vec2, segment_index: usize) -> anyhow::Result<()> {
    if !state.is_idle() {
        log::debug!("Einfügen ignoriert: Phase {:?}", state.phase);
        return Ok(());
    }
    let count = state.display_path.segment_count();
    if segment_index >= count {
        return Err(PathError::SegmentOutOfRange {
            index: segment_index,
            count,
        }
        .into());
    }

    let [start, _, _, end] = state.display_path.points_in_segment(segment_index);
    let spacing = state.options.anchor_spacing();
    if position.x <= start.x + spacing || position.x >= end.x - spacing {
        log::warn!(
            "Einfügen bei t={:.4} verworfen: zu nah an einem Anker von Segment {}",
            position.x,
            segment_index
        );
        return Ok(());
    }

    let before = Snapshot::from_state(state);
    state.display_path.split_segment_at(position, segment_index)?;
    state.history.record_snapshot(before);
    conversion::request_conversion(state);
    log::info!(
        "Anker eingefügt bei ({:.3}, {:.3}) in Segment {}",
        position.x,
        position.y,
        segment_index
    );
    Ok(())
}

/// Löscht den Anker `anchor_index`; das letzte Segment bleibt immer erhalten.
pub fn delete_anchor(state: &mut AppState, anchor_index: usize) {
    if !state.is_idle() {
        log::debug!("Löschen ignoriert: Phase {:?}", state.phase);
        return;
    }

    let before = Snapshot::from_state(state);
    match state.display_path.delete_segment(anchor_index) {
        Ok(()) => {
            state.history.record_snapshot(before);
            state.hover = Default::default();
            conversion::request_conversion(state);
            log::info!("Anker {} gelöscht", anchor_index);
        }
        Err(e) => log::warn!("Anker {} nicht gelöscht: {}", anchor_index, e),
    }
}

/// Hängt ein Segment bis `position` an; nur hinter dem letzten Anker.
pub fn append_anchor(state: &mut AppState, position: Vec2) {
    if !state.is_idle() {
        log::debug!("Anhängen ignoriert: Phase {:?}", state.phase);
        return;
    }
    let last = state.display_path.point(state.display_path.point_count() - 1);
    if position.x <= last.x + state.options.anchor_spacing() {
        log::warn!(
            "Anhängen bei t={:.4} verworfen: liegt nicht hinter t={:.4}",
            position.x,
            last.x
        );
        return;
    }

    let before = Snapshot::from_state(state);
    state.display_path.append_segment(position);
    state.history.record_snapshot(before);
    conversion::request_conversion(state);
    log::info!("Anker angehängt bei ({:.3}, {:.3})", position.x, position.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Curve, Keyframe};

    #[test]
    fn split_adds_segment_and_converts() {
        let mut state = AppState::new();
        split_segment(&mut state, Vec2::new(0.5, 0.5), 0).unwrap();
        assert_eq!(state.display_path.segment_count(), 2);
        assert_eq!(state.curve.len(), 3);
        assert!(state.can_undo());
    }

    #[test]
    fn split_on_anchor_time_is_rejected() {
        let mut state = AppState::new();
        split_segment(&mut state, Vec2::new(1.0, 1.0), 0).unwrap();
        assert_eq!(state.display_path.segment_count(), 1);
        assert!(!state.can_undo());
    }

    #[test]
    fn split_out_of_range_is_an_error() {
        let mut state = AppState::new();
        assert!(split_segment(&mut state, Vec2::new(0.5, 0.5), 3).is_err());
    }

    #[test]
    fn delete_last_segment_is_rejected() {
        let mut state = AppState::new();
        let revision = state.curve_revision;
        delete_anchor(&mut state, 3);
        assert_eq!(state.display_path.segment_count(), 1);
        assert_eq!(state.curve_revision, revision);
    }

    #[test]
    fn append_requires_later_time() {
        let mut state = AppState::new();
        append_anchor(&mut state, Vec2::new(0.5, 0.0));
        assert_eq!(state.curve.len(), 2);

        append_anchor(&mut state, Vec2::new(1.5, 0.0));
        assert_eq!(state.curve.len(), 3);
        assert_eq!(state.curve.keys()[2].time, 1.5);
    }

    #[test]
    fn append_on_single_point_path_requires_later_time() {
        let mut state = AppState::new();
        conversion::set_curve(&mut state, Curve::new(vec![Keyframe::flat(0.5, 0.5)]));
        assert_eq!(state.display_path.segment_count(), 0);
        let revision = state.curve_revision;

        append_anchor(&mut state, Vec2::new(-0.5, 1.0));
        append_anchor(&mut state, Vec2::new(0.0, 1.0));
        assert_eq!(state.display_path.segment_count(), 0);
        assert_eq!(state.curve_revision, revision);

        append_anchor(&mut state, Vec2::new(0.5, 1.0));
        assert_eq!(state.curve.len(), 2);
        assert_eq!(state.curve.keys()[1].time, 0.5);
    }

    #[test]
    fn zero_spacing_option_still_rejects_split_on_anchor() {
        let mut state = AppState::new();
        state.options.min_anchor_spacing = 0.0;
        split_segment(&mut state, Vec2::new(0.0, 0.3), 0).unwrap();
        assert_eq!(state.display_path.segment_count(), 1);
    }
}
