//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Kurve, Anzeige-Pfad,
/// Interaktionsphase, Ansicht, Vorlagen).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::{AppController, CurveListener, ListenerId};
pub use events::{AppCommand, AppIntent};
pub use history::{EditHistory, Snapshot};
pub use render_scene::build as build_curve_scene;
pub use state::{AppState, HoverState, InteractionPhase, PresetState, ViewState};
