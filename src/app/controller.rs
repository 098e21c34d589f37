//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::core::Curve;
use crate::shared::CurveScene;

/// Callback für Kurvenänderungen.
pub type CurveListener = Box<dyn FnMut(&Curve)>;

/// Kennung eines registrierten Listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Nach jedem Command, das die maßgebliche Kurve ersetzt hat, werden alle
/// registrierten Listener mit der neuen Kurve aufgerufen.
#[derive(Default)]
pub struct AppController {
    listeners: Vec<(ListenerId, CurveListener)>,
    next_listener_id: u64,
}

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Listener für Kurvenänderungen.
    pub fn subscribe(&mut self, listener: impl FnMut(&Curve) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Entfernt einen Listener. Gibt `false` zurück, wenn er nicht registriert war.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        let revision_before = state.curve_revision;
        use super::handlers;

        match command {
            // === Drag ===
            AppCommand::BeginDrag { point_index } => handlers::drag::begin(state, point_index),
            AppCommand::MoveDraggedPoint { position } => handlers::drag::move_to(state, position),
            AppCommand::EndDrag => handlers::drag::end(state),
            AppCommand::SetHover {
                point_index,
                curve_position,
            } => handlers::view::set_hover(state, point_index, curve_position),

            // === Struktur ===
            AppCommand::SplitSegment {
                position,
                segment_index,
            } => handlers::structure::split_segment(state, position, segment_index)?,
            AppCommand::DeleteAnchor { anchor_index } => {
                handlers::structure::delete_anchor(state, anchor_index)
            }
            AppCommand::AppendAnchor { position } => {
                handlers::structure::append_anchor(state, position)
            }

            // === Kurve & Vorlagen ===
            AppCommand::SetCurve { curve } => handlers::curve::set_curve(state, curve),
            AppCommand::NewCurve => handlers::curve::new_curve(state),
            AppCommand::LoadPreset { name } => handlers::curve::load_preset(state, &name),
            AppCommand::ClearPresetSelection => handlers::curve::clear_preset_selection(state),
            AppCommand::SavePreset => handlers::curve::save_preset(state),
            AppCommand::SavePresetAs { name, description } => {
                handlers::curve::save_preset_as(state, &name, &description)?
            }

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Konvertierung ===
            AppCommand::RunPendingConversion => handlers::conversion::run_pending(state),

            // === Ansicht ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::SetCurveRange { range } => handlers::view::set_curve_range(state, range),
            AppCommand::ToggleControlPoints => handlers::view::toggle_control_points(state),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply_options(state, options),
            AppCommand::SaveOptions => handlers::options::save_options(state)?,
        }

        if state.curve_revision != revision_before {
            self.notify_curve_changed(&state.curve);
        }

        Ok(())
    }

    fn notify_curve_changed(&mut self, curve: &Curve) {
        log::debug!(
            "Kurve geändert ({} Keys), {} Listener",
            curve.len(),
            self.listeners.len()
        );
        for (_, listener) in &mut self.listeners {
            listener(curve);
        }
    }

    /// Baut die Darstellungs-Szene aus dem aktuellen AppState.
    pub fn build_curve_scene(&self, state: &AppState) -> CurveScene {
        render_scene::build(state)
    }
}
