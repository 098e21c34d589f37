//! Benannte Kurven-Vorlagen.

use super::keyframe::{Curve, Keyframe};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Eine gespeicherte Kurve mit Name und Beschreibung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePreset {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub curve: Curve,
}

impl CurvePreset {
    pub fn new(name: impl Into<String>, description: impl Into<String>, curve: Curve) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            curve,
        }
    }
}

/// Vorlagen in Einfügereihenfolge, Schlüssel ist der Name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetLibrary {
    presets: IndexMap<String, CurvePreset>,
}

impl PresetLibrary {
    /// Leere Bibliothek.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bibliothek mit den eingebauten Vorlagen.
    pub fn with_builtin() -> Self {
        let mut library = Self::new();
        for preset in builtin_presets() {
            library.insert(preset);
        }
        library
    }

    /// Fügt eine Vorlage ein oder ersetzt eine gleichnamige (Position bleibt).
    pub fn insert(&mut self, preset: CurvePreset) -> Option<CurvePreset> {
        self.presets.insert(preset.name.clone(), preset)
    }

    pub fn get(&self, name: &str) -> Option<&CurvePreset> {
        self.presets.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    /// Überschreibt die Kurve einer vorhandenen Vorlage.
    ///
    /// Liefert `false`, wenn es keine Vorlage dieses Namens gibt.
    pub fn update_curve(&mut self, name: &str, curve: Curve) -> bool {
        match self.presets.get_mut(name) {
            Some(preset) => {
                preset.curve = curve;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<CurvePreset> {
        self.presets.shift_remove(name)
    }

    /// Namen in Einfügereihenfolge.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

fn builtin_presets() -> Vec<CurvePreset> {
    vec![
        CurvePreset::new("Linear", "Gerade von (0,0) nach (1,1)", Curve::linear(0.0, 0.0, 1.0, 1.0)),
        CurvePreset::new(
            "Ease In Out",
            "Weicher Start und weiches Ende",
            Curve::ease_in_out(0.0, 0.0, 1.0, 1.0),
        ),
        CurvePreset::new("Constant", "Konstant 0.5", Curve::constant(0.0, 1.0, 0.5)),
        CurvePreset::new(
            "S-Curve",
            "Flacher Start, steiles Ende",
            Curve::new(vec![
                Keyframe::new(0.0, 0.0, 0.0, 0.0),
                Keyframe::new(1.0, 1.0, 2.0, 0.0),
            ]),
        ),
        CurvePreset::new(
            "Bounce",
            "Überschwingen mit Rückfederung",
            Curve::new(vec![
                Keyframe::flat(0.0, 0.0),
                Keyframe::flat(0.3, 0.7),
                Keyframe::flat(0.6, 0.4),
                Keyframe::flat(1.0, 1.0),
            ]),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order_is_stable() {
        let library = PresetLibrary::with_builtin();
        let names: Vec<_> = library.names().collect();
        assert_eq!(names, ["Linear", "Ease In Out", "Constant", "S-Curve", "Bounce"]);
        assert_eq!(library.get("Bounce").map(|p| p.curve.len()), Some(4));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut library = PresetLibrary::with_builtin();
        let old = library.insert(CurvePreset::new("Linear", "neu", Curve::constant(0.0, 1.0, 0.0)));
        assert!(old.is_some());
        assert_eq!(library.names().next(), Some("Linear"));
        assert_eq!(library.get("Linear").map(|p| p.description.as_str()), Some("neu"));
        assert_eq!(library.len(), 5);
    }

    #[test]
    fn test_update_curve_requires_existing_preset() {
        let mut library = PresetLibrary::new();
        assert!(!library.update_curve("Missing", Curve::empty()));
        library.insert(CurvePreset::new("Mine", "", Curve::empty()));
        assert!(library.update_curve("Mine", Curve::linear(0.0, 0.0, 2.0, 1.0)));
        assert_eq!(library.get("Mine").map(|p| p.curve.len()), Some(2));
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let mut library = PresetLibrary::with_builtin();
        library.remove("Constant");
        let names: Vec<_> = library.names().collect();
        assert_eq!(names, ["Linear", "Ease In Out", "S-Curve", "Bounce"]);
    }
}
