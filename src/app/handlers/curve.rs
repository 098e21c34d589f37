//! Handler für Kurven-Zuweisung und Vorlagen.

use crate::app::use_cases::conversion;
use crate::app::AppState;
use crate::core::{Curve, CurvePreset};

/// Setzt die Kurve programmatisch (mit Undo-Schritt).
pub fn set_curve(state: &mut AppState, curve: Curve) {
    if !state.is_idle() {
        log::debug!("Kurve setzen ignoriert: Phase {:?}", state.phase);
        return;
    }
    state.record_undo_snapshot();
    conversion::set_curve(state, curve);
}

/// Neue lineare Kurve von (0,0) nach (1,1); hebt die Vorlagen-Auswahl auf.
pub fn new_curve(state: &mut AppState) {
    if !state.is_idle() {
        return;
    }
    state.presets.selected = None;
    set_curve(state, Curve::linear(0.0, 0.0, 1.0, 1.0));
    log::info!("Neue Kurve erstellt");
}

/// Lädt eine Kopie der Vorlage `name`.
pub fn load_preset(state: &mut AppState, name: &str) {
    if !state.is_idle() {
        return;
    }
    let Some(curve) = state.presets.library.get(name).map(|p| p.curve.clone()) else {
        log::warn!("Vorlage '{}' nicht gefunden", name);
        return;
    };
    state.presets.selected = Some(name.to_string());
    set_curve(state, curve);
    log::info!("Vorlage '{}' geladen", name);
}

/// Hebt die Vorlagen-Auswahl auf, die Kurve bleibt.
pub fn clear_preset_selection(state: &mut AppState) {
    state.presets.selected = None;
}

/// Schreibt die aktuelle Kurve in die gewählte Vorlage.
pub fn save_preset(state: &mut AppState) {
    let Some(name) = state.presets.selected.clone() else {
        log::warn!("Keine Vorlage gewählt, nichts gespeichert");
        return;
    };
    if state.presets.library.update_curve(&name, state.curve.clone()) {
        log::info!("Kurve in Vorlage '{}' gespeichert", name);
    } else {
        log::warn!("Vorlage '{}' existiert nicht mehr", name);
        state.presets.selected = None;
    }
}

/// Speichert die aktuelle Kurve als neue Vorlage und wählt sie aus.
pub fn save_preset_as(state: &mut AppState, name: &str, description: &str) -> anyhow::Result<()> {
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Vorlagen-Name darf nicht leer sein");
    }
    let replaced = state
        .presets
        .library
        .insert(CurvePreset::new(name, description, state.curve.clone()));
    state.presets.selected = Some(name.to_string());
    if replaced.is_some() {
        log::info!("Vorlage '{}' überschrieben", name);
    } else {
        log::info!("Vorlage '{}' angelegt", name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_preset_selects_and_converts() {
        let mut state = AppState::new();
        load_preset(&mut state, "Bounce");
        assert_eq!(state.presets.selected.as_deref(), Some("Bounce"));
        assert_eq!(state.curve.len(), 4);
        assert_eq!(state.display_path.segment_count(), 3);
    }

    #[test]
    fn unknown_preset_keeps_state() {
        let mut state = AppState::new();
        let revision = state.curve_revision;
        load_preset(&mut state, "Gibt es nicht");
        assert_eq!(state.curve_revision, revision);
        assert_eq!(state.presets.selected, None);
    }

    #[test]
    fn save_as_then_save_updates_library() {
        let mut state = AppState::new();
        save_preset_as(&mut state, "  Mine ", "eigene").unwrap();
        assert_eq!(state.presets.selected.as_deref(), Some("Mine"));

        set_curve(&mut state, Curve::constant(0.0, 2.0, 0.3));
        save_preset(&mut state);
        let stored = &state.presets.library.get("Mine").unwrap().curve;
        assert_eq!(stored.keys()[1].time, 2.0);
    }

    #[test]
    fn save_as_rejects_empty_name() {
        let mut state = AppState::new();
        assert!(save_preset_as(&mut state, "   ", "").is_err());
    }

    #[test]
    fn new_curve_clears_selection() {
        let mut state = AppState::new();
        load_preset(&mut state, "Constant");
        new_curve(&mut state);
        assert_eq!(state.presets.selected, None);
        assert_eq!(state.curve, Curve::linear(0.0, 0.0, 1.0, 1.0));
    }
}
