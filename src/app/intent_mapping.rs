//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Bearbeitende Intents werden nur in der Phase `Idle` angenommen; während
//! eines Drags zählen nur Zeigerbewegung und Loslassen, während einer
//! ausstehenden Konvertierung nur der nächste Frame.

use super::state::InteractionPhase;
use super::use_cases::picking;
use super::{AppCommand, AppIntent, AppState};
use crate::core::Path;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let idle = state.is_idle();
    let view = state.view.curve_view();

    match intent {
        AppIntent::PointerPressed { screen_pos } if idle => {
            match pick_point(state, screen_pos) {
                Some(point_index) => vec![AppCommand::BeginDrag { point_index }],
                None => vec![],
            }
        }
        AppIntent::PointerDragged { screen_pos } => match state.phase {
            InteractionPhase::Dragging { .. } => vec![AppCommand::MoveDraggedPoint {
                position: view.screen_to_curve(screen_pos),
            }],
            _ => vec![],
        },
        AppIntent::PointerReleased => match state.phase {
            InteractionPhase::Dragging { .. } => vec![AppCommand::EndDrag],
            _ => vec![],
        },
        AppIntent::PointerMoved { screen_pos } if idle => {
            let point_index = pick_point(state, screen_pos);
            let curve_position = if point_index.is_none() {
                picking::nearest_curve_sample(
                    &state.curve,
                    &state.display_path,
                    view.screen_to_curve(screen_pos),
                    &state.options,
                )
                .filter(|hit| hit.distance <= state.options.curve_hover_distance)
                .map(|hit| hit.position)
            } else {
                None
            };
            if point_index == state.hover.point_index
                && curve_position == state.hover.curve_position
            {
                vec![]
            } else {
                vec![AppCommand::SetHover {
                    point_index,
                    curve_position,
                }]
            }
        }
        AppIntent::PointerLeft => vec![AppCommand::SetHover {
            point_index: None,
            curve_position: None,
        }],
        AppIntent::InsertAnchorRequested { screen_pos } if idle => {
            let query = view.screen_to_curve(screen_pos);
            match picking::nearest_curve_sample(
                &state.curve,
                &state.display_path,
                query,
                &state.options,
            ) {
                Some(hit) if hit.distance <= state.options.split_max_distance => {
                    vec![AppCommand::SplitSegment {
                        position: hit.position,
                        segment_index: hit.segment_index,
                    }]
                }
                Some(hit) => {
                    log::info!(
                        "Klick zu weit von der Kurve entfernt ({:.3}), kein Anker eingefügt",
                        hit.distance
                    );
                    vec![]
                }
                None => vec![],
            }
        }
        AppIntent::DeleteAnchorRequested { screen_pos } if idle => {
            match pick_point(state, screen_pos) {
                Some(index) if Path::is_anchor(index) => {
                    vec![AppCommand::DeleteAnchor {
                        anchor_index: index,
                    }]
                }
                Some(index) => {
                    log::warn!("Steuerpunkt {} kann nicht gelöscht werden", index);
                    vec![]
                }
                None => vec![],
            }
        }
        AppIntent::AppendAnchorRequested { screen_pos } if idle => {
            vec![AppCommand::AppendAnchor {
                position: view.screen_to_curve(screen_pos),
            }]
        }

        AppIntent::SetCurveRequested { curve } if idle => vec![AppCommand::SetCurve { curve }],
        AppIntent::NewCurveRequested if idle => vec![AppCommand::NewCurve],
        AppIntent::PresetSelected { name: Some(name) } if idle => {
            vec![AppCommand::LoadPreset { name }]
        }
        AppIntent::PresetSelected { name: None } => vec![AppCommand::ClearPresetSelection],
        AppIntent::SavePresetRequested => vec![AppCommand::SavePreset],
        AppIntent::SavePresetAsRequested { name, description } => {
            vec![AppCommand::SavePresetAs { name, description }]
        }

        AppIntent::UndoRequested if idle => vec![AppCommand::Undo],
        AppIntent::RedoRequested if idle => vec![AppCommand::Redo],

        AppIntent::FrameTick if state.pending_conversion => {
            vec![AppCommand::RunPendingConversion]
        }

        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CurveRangeChanged { range } => vec![AppCommand::SetCurveRange { range }],
        AppIntent::ToggleControlPointsRequested => vec![AppCommand::ToggleControlPoints],

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],

        other => {
            log::debug!("Intent {:?} in Phase {:?} ignoriert", other, state.phase);
            vec![]
        }
    }
}

/// Nächster pickbarer Punkt; Steuerpunkte nur wenn sichtbar und nicht abgeleitet.
fn pick_point(state: &AppState, screen_pos: glam::Vec2) -> Option<usize> {
    let include_controls =
        state.view.show_control_points && !state.display_path.auto_set_control_points();
    picking::nearest_point_index(
        &state.display_path,
        &state.view.curve_view(),
        screen_pos,
        &state.options,
        include_controls,
    )
}
