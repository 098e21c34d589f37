//! Handler für die verzögerte Pfad→Kurve-Konvertierung.

use crate::app::use_cases::conversion;
use crate::app::AppState;

/// Führt die für diesen Frame vorgemerkte Konvertierung aus.
pub fn run_pending(state: &mut AppState) {
    if conversion::run_pending_conversion(state) {
        log::debug!("Vorgemerkte Konvertierung ausgeführt");
    }
}
