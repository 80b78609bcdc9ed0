//! Use-Case: Selektion per ID-Liste setzen.

use crate::app::AppState;
use crate::core::ObjectId;

/// Ersetzt (`additive = false`) oder erweitert die Selektion.
///
/// Unbekannte IDs werden verworfen; Selektionsänderungen erzeugen keinen Undo-Schritt.
pub fn set_selection(state: &mut AppState, ids: &[ObjectId], additive: bool) {
    let AppState {
        objects, selection, ..
    } = state;
    selection.set(ids, additive, objects);

    log::debug!(
        "Selektion: {} Objekt(e){}",
        selection.len(),
        if additive { " (additiv)" } else { "" }
    );
}
