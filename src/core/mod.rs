//! Core-Domänentypen: Bézier-Pfad, Keyframe-Kurve, Konvertierung, Vorlagen.

pub mod bezier;
pub mod codec;
pub mod curve_view;
/// Keyframe-Kurve
///
/// - Keyframe: Zeit, Wert, Ein-/Ausgangstangente (+ optionale Henkel-Abstände)
/// - Curve: streng zeitlich sortierte Keyframes mit Hermite-Auswertung
pub mod keyframe;
pub mod path;
pub mod preset;

pub use bezier::{approx_length, cubic_bezier, cubic_bezier_segment, quadratic_bezier};
pub use codec::{
    approx_eq, control_from_tangent, curve_to_path, is_flat_segment, path_to_curve,
    tangent_from_control,
};
pub use curve_view::CurveView;
pub use keyframe::{Curve, CurveError, Keyframe};
pub use path::{Path, PathError};
pub use preset::{CurvePreset, PresetLibrary};
