//! Globale Tastenkürzel des Editors.

use crate::app::{AppIntent, EditorTool};

/// Werkzeug-Tasten ohne Modifier.
const TOOL_KEYS: [(egui::Key, EditorTool); 5] = [
    (egui::Key::Num1, EditorTool::Select),
    (egui::Key::Num2, EditorTool::Move),
    (egui::Key::Num3, EditorTool::Rotate),
    (egui::Key::Num4, EditorTool::Scale),
    (egui::Key::Num5, EditorTool::AddWall),
];

/// Liest die Shortcuts des aktuellen Frames und übersetzt sie in Intents.
///
/// Escape bricht zuerst eine offene Wand ab, leert dann die Selektion und
/// wechselt zuletzt zurück zum Select-Werkzeug.
pub fn collect_keyboard_intents(
    ui: &egui::Ui,
    has_selection: bool,
    active_tool: EditorTool,
    wall_tool_is_drawing: bool,
) -> Vec<AppIntent> {
    ui.input(|input| {
        let mut intents = Vec::new();
        let command = input.modifiers.command;
        let pressed = |key| input.key_pressed(key);

        if command {
            let z = pressed(egui::Key::Z);
            if z && !input.modifiers.shift {
                intents.push(AppIntent::UndoRequested);
            } else if pressed(egui::Key::Y) || z {
                intents.push(AppIntent::RedoRequested);
            }
            if pressed(egui::Key::A) {
                intents.push(AppIntent::SelectAllRequested);
            }
        }

        if pressed(egui::Key::Escape) {
            let cancel_wall = active_tool == EditorTool::AddWall && wall_tool_is_drawing;
            if cancel_wall {
                intents.push(AppIntent::WallToolCancelled);
            } else if has_selection {
                intents.push(AppIntent::ClearSelectionRequested);
            } else if active_tool != EditorTool::Select {
                intents.push(AppIntent::SetEditorToolRequested {
                    tool: EditorTool::Select,
                });
            }
        }

        if has_selection && (pressed(egui::Key::Delete) || pressed(egui::Key::Backspace)) {
            intents.push(AppIntent::DeleteSelectedRequested);
        }

        if !command {
            intents.extend(
                TOOL_KEYS
                    .iter()
                    .filter(|(key, _)| pressed(*key))
                    .map(|(_, tool)| AppIntent::SetEditorToolRequested { tool: *tool }),
            );
        }

        intents
    })
}
