//! Use-Case: Teil-Patch auf ein bestehendes Objekt anwenden.

use crate::app::AppState;
use crate::core::{ObjectId, ObjectPatch};

/// Wendet `patch` auf das Objekt `id` an.
///
/// Unbekannte IDs sind ein stiller No-op (kein Snapshot, keine Mutation).
/// Gibt `true` zurück, wenn sich das Objekt geändert hat.
pub fn update_object(
    state: &mut AppState,
    id: ObjectId,
    patch: &ObjectPatch,
    push_history: bool,
) -> bool {
    let Some(current) = state.objects.get(id) else {
        log::debug!("Update ignoriert: Objekt {} existiert nicht", id);
        return false;
    };

    // Probelauf auf einer Kopie: unveränderte Patches erzeugen weder Snapshot noch Clone der Sammlung
    let mut patched = current.clone();
    if !patch.apply_to(&mut patched) {
        log::debug!("Update ohne Wirkung für Objekt {}", id);
        return false;
    }

    if push_history {
        state.record_undo_snapshot();
    }

    if let Some(object) = state.objects_mut().get_mut(id) {
        *object = patched;
    }
    log::debug!("Objekt {} aktualisiert", id);
    true
}
