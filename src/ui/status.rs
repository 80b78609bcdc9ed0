//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, EditorTool};

/// Anzeigename des aktiven Werkzeugs.
fn tool_name(tool: EditorTool) -> &'static str {
    match tool {
        EditorTool::Select => "Select",
        EditorTool::Move => "Move",
        EditorTool::Rotate => "Rotate",
        EditorTool::Scale => "Scale",
        EditorTool::AddWall => "Wand",
    }
}

/// Statuszeile: Objekte, Selektion, Werkzeug, History.
pub fn status_line(state: &AppState) -> String {
    let mut line = format!(
        "Objekte: {} | Selektiert: {} | Werkzeug: {}",
        state.object_count(),
        state.selection.len(),
        tool_name(state.editor.active_tool)
    );
    if state.editor.wall_tool.is_drawing() {
        line.push_str(" (Endpunkt offen)");
    }
    line.push_str(&format!(
        " | Undo: {} / Redo: {}",
        state.history.undo_depth(),
        state.history.redo_depth()
    ));
    line
}

/// Rendert die Status-Bar.
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(status_line(state));

            let snap = state.editor.snap;
            if snap.enabled {
                ui.separator();
                ui.label(format!("Raster: {} m / {}°", snap.translate, snap.rotate_deg));
            }
        });
    });
}
