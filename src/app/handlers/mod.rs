//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod conversion;
pub mod curve;
pub mod drag;
pub mod history;
pub mod options;
pub mod structure;
pub mod view;
