//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `core`, `app` und einem externen Zeichner
//! geteilt werden, um direkte Abhängigkeiten zu vermeiden.

mod curve_scene;
pub mod options;
pub mod spline_geometry;

pub use curve_scene::{CurveSampling, CurveScene, ScenePoint};
pub use options::EditorOptions;
pub use options::{ConversionConfig, ConversionMode, HandleDistancePolicy};
