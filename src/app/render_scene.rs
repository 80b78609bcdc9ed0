//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        objects: state.objects.clone(),
        selected_ids: state.selection.selected_ids.clone(),
        gizmo_mode: state.editor.active_tool.gizmo_mode(),
        snap: state.editor.snap,
    }
}
