//! Laufzeit-Kurveneditor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, InteractionPhase};
pub use core::{curve_to_path, path_to_curve, Curve, CurveError, Keyframe, Path, PathError};
pub use core::{CurvePreset, CurveView, PresetLibrary};
pub use shared::{ConversionConfig, ConversionMode, CurveScene, EditorOptions, HandleDistancePolicy};
