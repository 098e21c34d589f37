//! Zentrale Konfiguration für den Kurveneditor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Konvertierung ───────────────────────────────────────────────────

/// Relative Toleranz für "Werte gleich" und "Tangente ≈ 0".
pub const FLAT_VALUE_EPSILON: f32 = 1e-5;
/// Absolute Toleranz für "Tangente ≈ Geradensteigung".
pub const FLAT_TANGENT_EPSILON: f32 = 0.01;
/// Anteil des Zeitintervalls, in dem Steuerpunkte vom Anker entfernt liegen.
pub const CONTROL_POINT_TIME_FRACTION: f32 = 0.2;
/// Henkel mit kleinerem Zeitabstand gelten als senkrecht (Tangente 0).
pub const VERTICAL_HANDLE_EPSILON: f32 = 1e-6;

// ── Picking ─────────────────────────────────────────────────────────

/// Pick-Radius für Anker in Screen-Pixeln.
pub const ANCHOR_PICK_RADIUS_PX: f32 = 12.0;
/// Pick-Radius für Steuerpunkte in Screen-Pixeln.
pub const CONTROL_PICK_RADIUS_PX: f32 = 8.0;
/// Pick-Radius für Punkte außerhalb des Viewports (am Rand geklemmt).
pub const OFFSCREEN_PICK_RADIUS_PX: f32 = 70.0;
/// Punkte weiter als dieser Rand außerhalb des Viewports gelten als offscreen.
pub const OFFSCREEN_MARGIN_PX: f32 = 50.0;
/// Maximaler Abstand (Kurven-Einheiten) für Einfügen auf der Kurve.
pub const SPLIT_MAX_DISTANCE: f32 = 0.1;
/// Maximaler Abstand (Kurven-Einheiten) für Hover-Vorschau auf der Kurve.
pub const CURVE_HOVER_DISTANCE: f32 = 0.05;

// ── Abtastung ───────────────────────────────────────────────────────

/// Intervalle der Hermite-Abtastung über den gesamten Zeitbereich.
pub const HERMITE_SAMPLE_COUNT: usize = 50;
/// Intervalle pro Bézier-Segment.
pub const BEZIER_SAMPLES_PER_SEGMENT: usize = 20;

// ── Bearbeitung ─────────────────────────────────────────────────────

/// Mindest-Zeitabstand zwischen benachbarten Ankern beim Ziehen.
pub const MIN_ANCHOR_SPACING: f32 = 0.001;
/// Untergrenze für `min_anchor_spacing`, unabhängig von der Konfiguration.
pub const MIN_ANCHOR_SPACING_FLOOR: f32 = 1e-6;
/// Maximale Undo-Tiefe.
pub const UNDO_DEPTH: usize = 200;

// ── Ansicht ─────────────────────────────────────────────────────────

/// Sichtbarer Kurvenbereich (Zeit, Wert) ab dem Ursprung.
pub const CURVE_RANGE: [f32; 2] = [1.0, 1.0];
/// Viewport-Größe in Pixeln.
pub const VIEWPORT_SIZE: [f32; 2] = [400.0, 300.0];

/// Wie `curve_to_path` den Abstand Anker → Steuerpunkt bestimmt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandleDistancePolicy {
    /// Fester Anteil des Zeitintervalls (`dt · control_point_time_fraction`)
    #[default]
    TimeFraction,
    /// Im Keyframe gespeicherten Henkel-Abstand nutzen, sonst `TimeFraction`
    PreferStored,
}

/// Wann nach einer Bearbeitung konvertiert wird.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversionMode {
    /// Sofort im selben Aufruf
    #[default]
    Immediate,
    /// Beim nächsten `FrameTick`; bis dahin ist die Eingabe gesperrt
    NextFrame,
}

/// Toleranzen und Heuristiken der Pfad↔Kurve-Konvertierung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Relative Toleranz für Wertgleichheit und Null-Tangenten
    pub flat_value_epsilon: f32,
    /// Absolute Toleranz für Tangente ≈ Geradensteigung
    pub flat_tangent_epsilon: f32,
    /// K in `tangentWeight = dt · K`
    pub control_point_time_fraction: f32,
    /// Unterhalb dieses Zeitabstands ist ein Henkel senkrecht
    pub vertical_handle_epsilon: f32,
    pub handle_distance: HandleDistancePolicy,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            flat_value_epsilon: FLAT_VALUE_EPSILON,
            flat_tangent_epsilon: FLAT_TANGENT_EPSILON,
            control_point_time_fraction: CONTROL_POINT_TIME_FRACTION,
            vertical_handle_epsilon: VERTICAL_HANDLE_EPSILON,
            handle_distance: HandleDistancePolicy::TimeFraction,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `runtime_curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Konvertierung ───────────────────────────────────────────
    /// Sofortige oder verzögerte Konvertierung
    #[serde(default)]
    pub conversion_mode: ConversionMode,

    // ── Picking ─────────────────────────────────────────────────
    /// Pick-Radius für Anker (Pixel)
    pub anchor_pick_radius_px: f32,
    /// Pick-Radius für Steuerpunkte (Pixel)
    pub control_pick_radius_px: f32,
    /// Pick-Radius für Punkte außerhalb des Viewports (Pixel)
    #[serde(default = "default_offscreen_pick_radius_px")]
    pub offscreen_pick_radius_px: f32,
    /// Maximaler Klick-Abstand zur Kurve beim Einfügen (Kurven-Einheiten)
    pub split_max_distance: f32,
    /// Maximaler Abstand zur Kurve für die Hover-Vorschau (Kurven-Einheiten)
    #[serde(default = "default_curve_hover_distance")]
    pub curve_hover_distance: f32,

    // ── Abtastung ───────────────────────────────────────────────
    /// Hermite-Intervalle über den gesamten Zeitbereich
    pub hermite_sample_count: usize,
    /// Bézier-Intervalle pro Segment
    pub bezier_samples_per_segment: usize,

    // ── Bearbeitung ─────────────────────────────────────────────
    /// Mindest-Zeitabstand zwischen Ankern beim Ziehen
    pub min_anchor_spacing: f32,
    /// Steuerpunkte automatisch glätten
    #[serde(default)]
    pub auto_set_control_points: bool,
    /// Maximale Anzahl Undo-Schritte
    pub undo_depth: usize,

    // ── Ansicht ─────────────────────────────────────────────────
    /// Sichtbarer Bereich (Zeit, Wert) ab dem Ursprung
    pub curve_range: [f32; 2],
    /// Viewport-Größe in Pixeln
    pub viewport_size: [f32; 2],
    /// Steuerpunkte anzeigen
    #[serde(default = "default_true")]
    pub show_control_points: bool,

    // TOML-Tabelle, daher am Ende
    /// Toleranzen und Henkel-Heuristik
    #[serde(default)]
    pub conversion: ConversionConfig,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            conversion_mode: ConversionMode::Immediate,

            anchor_pick_radius_px: ANCHOR_PICK_RADIUS_PX,
            control_pick_radius_px: CONTROL_PICK_RADIUS_PX,
            offscreen_pick_radius_px: OFFSCREEN_PICK_RADIUS_PX,
            split_max_distance: SPLIT_MAX_DISTANCE,
            curve_hover_distance: CURVE_HOVER_DISTANCE,

            hermite_sample_count: HERMITE_SAMPLE_COUNT,
            bezier_samples_per_segment: BEZIER_SAMPLES_PER_SEGMENT,

            min_anchor_spacing: MIN_ANCHOR_SPACING,
            auto_set_control_points: false,
            undo_depth: UNDO_DEPTH,

            curve_range: CURVE_RANGE,
            viewport_size: VIEWPORT_SIZE,
            show_control_points: true,
            conversion: ConversionConfig::default(),
        }
    }
}

/// Serde-Default für `offscreen_pick_radius_px` (Abwärtskompatibilität).
fn default_offscreen_pick_radius_px() -> f32 {
    OFFSCREEN_PICK_RADIUS_PX
}

/// Serde-Default für `curve_hover_distance` (Abwärtskompatibilität).
fn default_curve_hover_distance() -> f32 {
    CURVE_HOVER_DISTANCE
}

fn default_true() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("runtime_curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("runtime_curve_editor.toml")
    }

    /// Wirksamer Mindestabstand zwischen Anker-Zeiten.
    ///
    /// Null, negative oder nicht-endliche Werte aus der Datei würden gleiche
    /// oder vertauschte Anker-Zeiten zulassen.
    pub fn anchor_spacing(&self) -> f32 {
        if self.min_anchor_spacing.is_finite() {
            self.min_anchor_spacing.max(MIN_ANCHOR_SPACING_FLOOR)
        } else {
            MIN_ANCHOR_SPACING
        }
    }

    /// Pick-Radius (Pixel) abhängig vom Punkttyp.
    pub fn pick_radius_px(&self, is_anchor: bool) -> f32 {
        if is_anchor {
            self.anchor_pick_radius_px
        } else {
            self.control_pick_radius_px
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_spacing_has_positive_floor() {
        let mut opts = EditorOptions::default();
        assert_eq!(opts.anchor_spacing(), MIN_ANCHOR_SPACING);

        for invalid in [0.0, -0.5] {
            opts.min_anchor_spacing = invalid;
            assert_eq!(opts.anchor_spacing(), MIN_ANCHOR_SPACING_FLOOR);
        }
        opts.min_anchor_spacing = f32::NAN;
        assert_eq!(opts.anchor_spacing(), MIN_ANCHOR_SPACING);
    }

    #[test]
    fn test_defaults_match_constants() {
        let opts = EditorOptions::default();
        assert_eq!(opts.conversion.flat_value_epsilon, FLAT_VALUE_EPSILON);
        assert_eq!(opts.conversion.flat_tangent_epsilon, FLAT_TANGENT_EPSILON);
        assert_eq!(opts.conversion.handle_distance, HandleDistancePolicy::TimeFraction);
        assert_eq!(opts.conversion_mode, ConversionMode::Immediate);
        assert_eq!(opts.pick_radius_px(true), ANCHOR_PICK_RADIUS_PX);
        assert_eq!(opts.pick_radius_px(false), CONTROL_PICK_RADIUS_PX);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut opts = EditorOptions::default();
        opts.conversion.handle_distance = HandleDistancePolicy::PreferStored;
        opts.conversion_mode = ConversionMode::NextFrame;
        opts.curve_range = [2.0, 5.0];

        let text = toml::to_string_pretty(&opts).unwrap();
        let back: EditorOptions = toml::from_str(&text).unwrap();
        assert_eq!(back, opts);
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let mut opts = EditorOptions::default();
        opts.split_max_distance = 0.25;
        let text = toml::to_string_pretty(&opts).unwrap();
        // Ältere Datei ohne Konvertierungs-Abschnitt
        let stripped: String = text
            .split("[conversion]")
            .next()
            .unwrap()
            .lines()
            .filter(|l| !l.starts_with("conversion_mode") && !l.starts_with("offscreen_pick"))
            .collect::<Vec<_>>()
            .join("\n");

        let back: EditorOptions = toml::from_str(&stripped).unwrap();
        assert_eq!(back.split_max_distance, 0.25);
        assert_eq!(back.conversion, ConversionConfig::default());
        assert_eq!(back.offscreen_pick_radius_px, OFFSCREEN_PICK_RADIUS_PX);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let opts = EditorOptions::load_from_file(std::path::Path::new(
            "/nonexistent/runtime_curve_editor.toml",
        ));
        assert_eq!(opts, EditorOptions::default());
    }
}
