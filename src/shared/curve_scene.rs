//! Darstellungs-Szene als expliziter Übergabevertrag zwischen App und Zeichner.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein externer Zeichner sie konsumiert.

use crate::core::CurveView;
use glam::Vec2;
use serde::Serialize;

/// Woraus die Kurvenlinie abgetastet wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CurveSampling {
    /// Bézier-Pfad (während Drag oder ausstehender Konvertierung)
    Bezier,
    /// Keyframe-Kurve per Hermite-Interpolation
    Hermite,
}

/// Ein Pfadpunkt mit Zustandsflags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenePoint {
    pub index: usize,
    /// Position in Kurven-Koordinaten
    pub position: Vec2,
    pub is_anchor: bool,
    pub hovered: bool,
    pub dragged: bool,
}

/// Read-only Daten für einen Frame.
#[derive(Debug, Clone, Serialize)]
pub struct CurveScene {
    /// Abgetastete Kurvenlinie in Kurven-Koordinaten
    pub polyline: Vec<Vec2>,
    pub sampling: CurveSampling,
    /// Anker und (falls sichtbar) Steuerpunkte
    pub points: Vec<ScenePoint>,
    /// Henkel-Linien Anker → Steuerpunkt
    pub handle_lines: Vec<(Vec2, Vec2)>,
    /// Vorschau-Position für Einfügen auf der Kurve
    pub hovered_curve_position: Option<Vec2>,
    /// Konvertierung läuft: Darstellung ausgegraut, Eingabe gesperrt
    pub greyed_out: bool,
    #[serde(skip)]
    pub view: CurveView,
}

impl CurveScene {
    /// Anzahl der Anker in der Szene.
    pub fn anchor_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_anchor).count()
    }

    /// Kurvenlinie in Viewport-Pixeln.
    pub fn polyline_screen(&self) -> Vec<Vec2> {
        self.polyline
            .iter()
            .map(|&p| self.view.curve_to_screen(p))
            .collect()
    }
}
