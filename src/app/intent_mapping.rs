//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::EditorTool;
use super::{AppCommand, AppIntent, AppState};
use crate::core::{create_cube, CubeDims, CubeParams};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SetEditorToolRequested { tool } => vec![AppCommand::SetEditorTool { tool }],
        AppIntent::AddCubeRequested => {
            let size = state.options.cube_size;
            let object = create_cube(CubeParams {
                dims: Some(CubeDims::new(size, size, size)),
                ..CubeParams::default()
            });
            let id = object.id;
            vec![
                AppCommand::AddObject {
                    object,
                    push_history: true,
                },
                AppCommand::SetSelection {
                    ids: vec![id],
                    additive: false,
                },
            ]
        }
        AppIntent::ObjectPicked { id: Some(id), additive } => vec![AppCommand::SetSelection {
            ids: vec![id],
            additive,
        }],
        AppIntent::ObjectPicked {
            id: None,
            additive: false,
        } => vec![AppCommand::ClearSelection],
        // Additiver Klick ins Leere behält die Selektion
        AppIntent::ObjectPicked {
            id: None,
            additive: true,
        } => vec![],
        AppIntent::GroundClicked { point } => {
            if state.editor.active_tool == EditorTool::AddWall {
                vec![AppCommand::WallToolClick { point }]
            } else {
                vec![]
            }
        }
        AppIntent::WallToolCancelled => vec![AppCommand::WallToolCancel],
        AppIntent::DeleteSelectedRequested => {
            if state.selection.is_empty() {
                vec![]
            } else {
                vec![AppCommand::RemoveSelectedObjects]
            }
        }
        AppIntent::SelectAllRequested => vec![AppCommand::SelectAll],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::ObjectPropertyCommitted { id, patch } => vec![AppCommand::UpdateObject {
            id,
            patch,
            push_history: true,
        }],
        AppIntent::TransformGestureStarted => vec![AppCommand::PushHistorySnapshot],
        AppIntent::TransformGestureUpdated { id, patch } => vec![AppCommand::UpdateObject {
            id,
            patch,
            push_history: false,
        }],
        AppIntent::TransformGestureEnded => vec![AppCommand::EndTransformGesture],
        AppIntent::SnapSettingsChanged { snap } => vec![AppCommand::SetSnapSettings { snap }],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
    }
}
