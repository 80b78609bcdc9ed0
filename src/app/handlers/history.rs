//! Handler für Undo/Redo der Objektsammlung und Selektion.

use crate::app::history::Snapshot;
use crate::app::AppState;

/// Stellt den Zustand vor dem letzten Undo-Schritt wieder her.
pub fn undo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    let Some(previous) = state.history.pop_undo_with_current(current) else {
        log::debug!("Undo ignoriert: Verlauf leer");
        return;
    };

    previous.apply_to(state);
    log::info!(
        "Undo: {} Objekte, {} selektiert (noch {} Schritte)",
        state.objects.len(),
        state.selection.len(),
        state.history.undo_depth()
    );
}

/// Wendet den zuletzt rückgängig gemachten Schritt erneut an.
pub fn redo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    let Some(next) = state.history.pop_redo_with_current(current) else {
        log::debug!("Redo ignoriert: nichts rückgängig gemacht");
        return;
    };

    next.apply_to(state);
    log::info!(
        "Redo: {} Objekte, {} selektiert (noch {} Schritte)",
        state.objects.len(),
        state.selection.len(),
        state.history.redo_depth()
    );
}
