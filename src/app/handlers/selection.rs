//! Handler für Selektions-Operationen.
//!
//! Selektionsänderungen erzeugen keinen Undo-Schritt; die Selektion wird
//! nur als Teil der Snapshots mutierender Operationen mitgeführt.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ObjectId;

/// Ersetzt oder erweitert die Selektion.
pub fn set_selection(state: &mut AppState, ids: &[ObjectId], additive: bool) {
    use_cases::selection::set_selection(state, ids, additive);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

/// Selektiert alle Objekte der Szene.
pub fn select_all(state: &mut AppState) {
    use_cases::selection::select_all(state);
}
