//! Use-Case: Objekt in die Szene einfügen.

use crate::app::AppState;
use crate::core::SceneObject;

/// Fügt ein Objekt hinzu. Mit `push_history` wird vorher ein Undo-Snapshot aufgenommen.
///
/// Eine bereits vergebene ID lässt die Szene unverändert (kein Snapshot).
pub fn add_object(state: &mut AppState, object: SceneObject, push_history: bool) -> bool {
    if state.objects.contains(object.id) {
        log::warn!("Objekt {} existiert bereits, Einfügen verworfen", object.id);
        return false;
    }

    // Snapshot VOR Mutation
    if push_history {
        state.record_undo_snapshot();
    }

    let id = object.id;
    let label = object.display_name().to_string();
    state.objects_mut().insert(object);

    log::info!("{} {} hinzugefügt", label, id);
    true
}
