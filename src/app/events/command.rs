use crate::core::Curve;
use crate::shared::EditorOptions;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Drag eines Pfadpunkts beginnen
    BeginDrag { point_index: usize },
    /// Gezogenen Punkt auf Kurven-Position setzen
    MoveDraggedPoint { position: Vec2 },
    /// Drag beenden und Pfad → Kurve konvertieren
    EndDrag,
    /// Hover-Zustand setzen
    SetHover {
        point_index: Option<usize>,
        curve_position: Option<Vec2>,
    },

    /// Segment an Position teilen
    SplitSegment { position: Vec2, segment_index: usize },
    /// Anker samt Steuerpunkten löschen
    DeleteAnchor { anchor_index: usize },
    /// Segment bis zur Position anhängen
    AppendAnchor { position: Vec2 },

    /// Kurve ersetzen und Anzeige-Pfad neu ableiten
    SetCurve { curve: Curve },
    /// Lineare Standardkurve, Vorlagen-Auswahl aufheben
    NewCurve,
    /// Vorlage laden
    LoadPreset { name: String },
    /// Vorlagen-Auswahl aufheben
    ClearPresetSelection,
    /// Kurve in gewählte Vorlage schreiben
    SavePreset,
    /// Kurve als neue Vorlage speichern
    SavePresetAs { name: String, description: String },

    /// Undo
    Undo,
    /// Redo
    Redo,

    /// Vorgemerkte Konvertierung ausführen
    RunPendingConversion,

    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Sichtbaren Kurvenbereich setzen
    SetCurveRange { range: [f32; 2] },
    /// Steuerpunkt-Sichtbarkeit umschalten
    ToggleControlPoints,

    /// Optionen anwenden
    ApplyOptions { options: EditorOptions },
    /// Optionen speichern
    SaveOptions,
}
