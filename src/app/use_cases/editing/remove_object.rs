//! Use-Case: Objekte entfernen und Selektion bereinigen.

use crate::app::AppState;
use crate::core::ObjectId;

/// Entfernt das Objekt `id` und nimmt es im selben Schritt aus der Selektion.
///
/// Unbekannte IDs sind ein stiller No-op.
pub fn remove_object(state: &mut AppState, id: ObjectId, push_history: bool) -> bool {
    if !state.objects.contains(id) {
        log::debug!("Entfernen ignoriert: Objekt {} existiert nicht", id);
        return false;
    }

    if push_history {
        state.record_undo_snapshot();
    }

    state.objects_mut().remove(id);
    state.selection.remove(id);
    log::info!("Objekt {} entfernt", id);
    true
}

/// Entfernt alle selektierten Objekte als einen einzigen Undo-Schritt.
pub fn remove_selected_objects(state: &mut AppState) -> usize {
    if state.selection.is_empty() {
        log::debug!("Löschen ignoriert: keine Selektion");
        return 0;
    }

    let ids: Vec<ObjectId> = state.selection.selected_ids.iter().copied().collect();
    state.record_undo_snapshot();

    let removed = ids
        .into_iter()
        .filter(|id| remove_object(state, *id, false))
        .count();

    log::info!("{} selektierte Objekte gelöscht", removed);
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{create_cube, CubeParams};

    fn state_with_cubes(count: u128) -> AppState {
        let mut state = AppState::new();
        for i in 1..=count {
            state.objects_mut().insert(create_cube(CubeParams {
                id: Some(ObjectId::from_u128(i)),
                ..CubeParams::default()
            }));
        }
        state
    }

    fn select(state: &mut AppState, ids: &[u128]) {
        let ids: Vec<_> = ids.iter().map(|i| ObjectId::from_u128(*i)).collect();
        state.selection.set(&ids, false, &state.objects);
    }

    #[test]
    fn removing_selected_object_prunes_selection() {
        let mut state = state_with_cubes(2);
        select(&mut state, &[1, 2]);

        assert!(remove_object(&mut state, ObjectId::from_u128(1), true));

        assert_eq!(state.object_count(), 1);
        assert!(!state.selection.contains(ObjectId::from_u128(1)));
        assert_eq!(state.selection.len(), 1);
    }

    #[test]
    fn removing_unknown_id_is_noop() {
        let mut state = state_with_cubes(1);
        assert!(!remove_object(&mut state, ObjectId::from_u128(5), true));
        assert!(!state.can_undo());
    }

    #[test]
    fn remove_selected_is_single_undo_step() {
        let mut state = state_with_cubes(3);
        select(&mut state, &[1, 3]);

        assert_eq!(remove_selected_objects(&mut state), 2);

        assert_eq!(state.object_count(), 1);
        assert!(state.selection.is_empty());
        assert_eq!(state.history.undo_depth(), 1);
    }
}
