//! Toolbar für Objekt-Erzeugung, Werkzeugauswahl, Undo/Redo und Raster.

use crate::app::{AppIntent, AppState, EditorTool};

/// Werkzeuge in Toolbar-Reihenfolge mit Beschriftung (Taste in Klammern).
const TOOL_BUTTONS: [(EditorTool, &str); 5] = [
    (EditorTool::Select, "Select (1)"),
    (EditorTool::Move, "Move (2)"),
    (EditorTool::Rotate, "Rotate (3)"),
    (EditorTool::Scale, "Scale (4)"),
    (EditorTool::AddWall, "Wand (5)"),
];

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.editor.active_tool;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("➕ Cube").clicked() {
                events.push(AppIntent::AddCubeRequested);
            }

            ui.separator();
            ui.label("Werkzeug:");

            for (tool, label) in TOOL_BUTTONS {
                if ui.selectable_label(active == tool, label).clicked() {
                    events.push(AppIntent::SetEditorToolRequested { tool });
                }
            }

            ui.separator();

            if ui
                .add_enabled(state.can_undo(), egui::Button::new("↶ Undo"))
                .clicked()
            {
                events.push(AppIntent::UndoRequested);
            }
            if ui
                .add_enabled(state.can_redo(), egui::Button::new("↷ Redo"))
                .clicked()
            {
                events.push(AppIntent::RedoRequested);
            }

            // Delete-Button (nur wenn Selektion vorhanden)
            if ui
                .add_enabled(
                    !state.selection.is_empty(),
                    egui::Button::new("🗑 Delete (Del)"),
                )
                .clicked()
            {
                events.push(AppIntent::DeleteSelectedRequested);
            }

            ui.separator();
            render_snap_controls(ui, state, &mut events);

            // Wand-Werkzeug Status
            if active == EditorTool::AddWall {
                ui.separator();
                if state.editor.wall_tool.is_drawing() {
                    ui.label("Endpunkt klicken (Esc bricht ab)");
                } else {
                    ui.label("Startpunkt klicken");
                }
            }
        });
    });

    events
}

fn render_snap_controls(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let mut snap = state.editor.snap;
    let mut changed = ui.checkbox(&mut snap.enabled, "Raster").changed();

    ui.add_enabled_ui(snap.enabled, |ui| {
        changed |= ui
            .add(
                egui::DragValue::new(&mut snap.translate)
                    .range(0.01..=10.0)
                    .speed(0.01)
                    .suffix(" m"),
            )
            .changed();
        changed |= ui
            .add(
                egui::DragValue::new(&mut snap.rotate_deg)
                    .range(1.0..=90.0)
                    .speed(1.0)
                    .suffix("°"),
            )
            .changed();
    });

    if changed {
        events.push(AppIntent::SnapSettingsChanged { snap });
    }
}
