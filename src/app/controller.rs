//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Debug, Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command);
        }
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(&mut self, state: &mut AppState, command: AppCommand) {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Editing ===
            AppCommand::SetEditorTool { tool } => handlers::editing::set_editor_tool(state, tool),
            AppCommand::AddObject {
                object,
                push_history,
            } => handlers::editing::add_object(state, object, push_history),
            AppCommand::UpdateObject {
                id,
                patch,
                push_history,
            } => handlers::editing::update_object(state, id, &patch, push_history),
            AppCommand::RemoveObject { id, push_history } => {
                handlers::editing::remove_object(state, id, push_history)
            }
            AppCommand::RemoveSelectedObjects => handlers::editing::delete_selected(state),
            AppCommand::PushHistorySnapshot => handlers::editing::push_history_snapshot(state),
            AppCommand::EndTransformGesture => handlers::editing::end_transform_gesture(state),
            AppCommand::SetSnapSettings { snap } => {
                handlers::editing::set_snap_settings(state, snap)
            }

            // === Selektion ===
            AppCommand::SetSelection { ids, additive } => {
                handlers::selection::set_selection(state, &ids, additive)
            }
            AppCommand::SelectAll => handlers::selection::select_all(state),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Wand-Werkzeug ===
            AppCommand::WallToolClick { point } => handlers::wall_tool::click(state, point),
            AppCommand::WallToolCancel => handlers::wall_tool::cancel(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
        }
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
