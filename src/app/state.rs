//! Application State: zentrale Datenhaltung.

use super::history::{EditHistory, Snapshot};
use super::CommandLog;
use crate::core::{curve_to_path, Curve, CurveView, Path, PresetLibrary};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Interaktionsphase des Editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionPhase {
    /// Keine laufende Interaktion, Bearbeitungen erlaubt
    #[default]
    Idle,
    /// Ein Pfadpunkt wird gezogen; keine Konvertierung
    Dragging { point_index: usize },
    /// Konvertierung für den nächsten Frame vorgemerkt; Eingabe gesperrt
    Converting,
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Sichtbarer Kurvenbereich (Zeit, Wert)
    pub curve_range: Vec2,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: Vec2,
    /// Steuerpunkte anzeigen und pickbar machen
    pub show_control_points: bool,
}

impl ViewState {
    /// Erstellt den View-Zustand aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            curve_range: Vec2::from(options.curve_range),
            viewport_size: Vec2::from(options.viewport_size),
            show_control_points: options.show_control_points,
        }
    }

    /// Transformation Kurve ↔ Viewport für den aktuellen Zustand.
    pub fn curve_view(&self) -> CurveView {
        CurveView::new(self.curve_range, self.viewport_size)
    }
}

/// Hover-Feedback für die Darstellung
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverState {
    /// Pfadpunkt unter dem Zeiger
    pub point_index: Option<usize>,
    /// Nächste Kurvenposition (Einfüge-Vorschau), nur ohne Punkt-Hover
    pub curve_position: Option<Vec2>,
}

/// Vorlagen-Bibliothek und aktuelle Auswahl
#[derive(Debug, Clone)]
pub struct PresetState {
    pub library: PresetLibrary,
    /// Name der geladenen Vorlage (None = keine)
    pub selected: Option<String>,
}

impl PresetState {
    pub fn new() -> Self {
        Self {
            library: PresetLibrary::with_builtin(),
            selected: None,
        }
    }
}

impl Default for PresetState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Maßgebliche Kurve
    pub curve: Curve,
    /// Aus der Kurve abgeleiteter, bearbeitbarer Pfad
    pub display_path: Path,
    /// Aktuelle Interaktionsphase
    pub phase: InteractionPhase,
    /// Pfad → Kurve steht für den nächsten Frame aus
    pub pending_conversion: bool,
    /// Wird bei jedem Ersetzen der Kurve erhöht
    pub curve_revision: u64,
    /// View-State
    pub view: ViewState,
    /// Hover-State
    pub hover: HoverState,
    /// Vorlagen
    pub presets: PresetState,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Zustand vor Drag-Beginn, wird erst beim Loslassen in die History übernommen
    pub drag_origin: Option<Snapshot>,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen neuen App-State mit linearer Startkurve.
    pub fn with_options(options: EditorOptions) -> Self {
        let curve = Curve::linear(0.0, 0.0, 1.0, 1.0);
        let mut display_path = curve_to_path(&curve, &options.conversion);
        display_path.arm_auto_set_control_points(options.auto_set_control_points);
        Self {
            curve,
            display_path,
            phase: InteractionPhase::Idle,
            pending_conversion: false,
            curve_revision: 0,
            view: ViewState::from_options(&options),
            hover: HoverState::default(),
            presets: PresetState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.undo_depth),
            drag_origin: None,
            options,
        }
    }

    /// Ersetzt die maßgebliche Kurve und erhöht die Revision.
    pub fn replace_curve(&mut self, curve: Curve) {
        self.curve = curve;
        self.curve_revision += 1;
    }

    /// True wenn Bearbeitungen angenommen werden.
    pub fn is_idle(&self) -> bool {
        self.phase == InteractionPhase::Idle
    }

    /// Index des gezogenen Punkts, falls ein Drag läuft.
    pub fn dragged_point(&self) -> Option<usize> {
        match self.phase {
            InteractionPhase::Dragging { point_index } => Some(point_index),
            _ => None,
        }
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
