use crate::core::Curve;
use crate::shared::EditorOptions;
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Zeiger gedrückt (Drag-Start auf dem nächsten Punkt)
    PointerPressed { screen_pos: Vec2 },
    /// Zeiger mit gedrückter Taste bewegt
    PointerDragged { screen_pos: Vec2 },
    /// Zeiger losgelassen
    PointerReleased,
    /// Zeiger ohne Taste bewegt (Hover-Feedback)
    PointerMoved { screen_pos: Vec2 },
    /// Zeiger hat den Viewport verlassen
    PointerLeft,
    /// Anker auf der Kurve einfügen (Shift-Klick)
    InsertAnchorRequested { screen_pos: Vec2 },
    /// Anker unter dem Zeiger löschen (Rechtsklick)
    DeleteAnchorRequested { screen_pos: Vec2 },
    /// Neuen Anker hinter dem letzten anhängen
    AppendAnchorRequested { screen_pos: Vec2 },

    /// Kurve programmatisch setzen
    SetCurveRequested { curve: Curve },
    /// Neue lineare Kurve
    NewCurveRequested,
    /// Vorlage im Auswahlfeld gewählt (None = keine)
    PresetSelected { name: Option<String> },
    /// Aktuelle Kurve in die gewählte Vorlage speichern
    SavePresetRequested,
    /// Aktuelle Kurve als neue Vorlage speichern
    SavePresetAsRequested { name: String, description: String },

    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,

    /// Neuer Frame (führt vorgemerkte Konvertierung aus)
    FrameTick,

    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Sichtbarer Kurvenbereich geändert
    CurveRangeChanged { range: [f32; 2] },
    /// Steuerpunkte ein-/ausblenden
    ToggleControlPointsRequested,

    /// Optionen wurden geändert (sofort anwenden)
    OptionsChanged { options: EditorOptions },
    /// Optionen in die TOML-Datei schreiben
    SaveOptionsRequested,
}
