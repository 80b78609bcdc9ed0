//! Handler für Objekt-Editing, Raster und Editor-Werkzeug.

use crate::app::state::EditorTool;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{ObjectId, ObjectPatch, SceneObject};
use crate::shared::SnapSettings;

/// Aktiviert ein Editor-Werkzeug und verwirft einen offenen Wand-Startpunkt.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    if state.editor.wall_tool.cancel() {
        log::debug!("Offene Wand-Eingabe durch Werkzeugwechsel verworfen");
    }
    if state.editor.active_tool == tool {
        return;
    }
    state.editor.active_tool = tool;
    log::info!("Editor-Werkzeug: {:?}", tool);
}

/// Fügt ein Objekt hinzu.
pub fn add_object(state: &mut AppState, object: SceneObject, push_history: bool) {
    use_cases::editing::add_object(state, object, push_history);
}

/// Wendet einen Teil-Patch auf ein Objekt an.
pub fn update_object(state: &mut AppState, id: ObjectId, patch: &ObjectPatch, push_history: bool) {
    use_cases::editing::update_object(state, id, patch, push_history);
}

/// Entfernt ein Objekt.
pub fn remove_object(state: &mut AppState, id: ObjectId, push_history: bool) {
    use_cases::editing::remove_object(state, id, push_history);
}

/// Löscht alle aktuell selektierten Objekte.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::remove_selected_objects(state);
}

/// Nimmt einen Undo-Snapshot auf (Start einer Transform-Geste).
pub fn push_history_snapshot(state: &mut AppState) {
    state.record_undo_snapshot();
    log::debug!("Undo-Snapshot aufgenommen");
}

/// Schließt eine Transform-Geste ab; der Undo-Schritt liegt bereits seit Gestenbeginn vor.
pub fn end_transform_gesture(state: &AppState) {
    log::debug!(
        "Transform-Geste beendet ({} Undo-Schritte)",
        state.history.undo_depth()
    );
}

/// Übernimmt neue Raster-Einstellungen.
pub fn set_snap_settings(state: &mut AppState, snap: SnapSettings) {
    state.editor.snap = snap;
    log::info!(
        "Raster: {} (Verschieben {} m, Drehen {}°, Skalieren {})",
        if snap.enabled { "an" } else { "aus" },
        snap.translate,
        snap.rotate_deg,
        snap.scale
    );
}
