//! Gemeinsame Hilfsfunktionen für Selektionslogik.

use crate::app::AppState;
use crate::core::ObjectId;
use indexmap::IndexSet;
use std::sync::Arc;

/// Löscht die aktuelle Selektion explizit.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}

/// Selektiert alle Objekte in Einfügereihenfolge.
pub fn select_all(state: &mut AppState) {
    let all: IndexSet<ObjectId> = state.objects.ids().collect();
    if *state.selection.selected_ids != all {
        state.selection.selected_ids = Arc::new(all);
    }
    log::info!("Alle {} Objekte selektiert", state.selection.len());
}
