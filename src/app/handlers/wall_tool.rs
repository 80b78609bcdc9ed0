//! Handler für das Zwei-Klick-Wand-Werkzeug.

use crate::app::state::EditorTool;
use crate::app::tools::WallClick;
use crate::app::{use_cases, AppState};
use crate::core::{create_wall_from_two_points, WallParams};
use glam::Vec3;

/// Verarbeitet einen Bodenklick im Wand-Werkzeug.
///
/// Der zweite Klick erzeugt die Wand (mit Undo-Schritt), selektiert sie und
/// schaltet zurück auf das Select-Werkzeug.
pub fn click(state: &mut AppState, point: Vec3) {
    if state.editor.active_tool != EditorTool::AddWall {
        log::debug!("Wand-Klick ignoriert: Werkzeug {:?} aktiv", state.editor.active_tool);
        return;
    }

    let step = state.editor.snap.translate_step();
    match state.editor.wall_tool.click(point, step) {
        WallClick::StartPlaced(start) => {
            log::info!(
                "Wand-Start bei ({:.2}, {:.2}) gesetzt",
                start.x,
                start.z
            );
        }
        WallClick::Invalid => {
            log::debug!("Wand-Klick ignoriert: Bodenpunkt {:?} nicht endlich", point);
        }
        WallClick::TooShort => {
            log::debug!("Wand-Klick ignoriert: Endpunkt liegt auf dem Startpunkt");
        }
        WallClick::Completed { start, end } => {
            let wall = create_wall_from_two_points(
                start,
                end,
                WallParams {
                    thickness: Some(state.options.wall_thickness),
                    height: Some(state.options.wall_height),
                    ..WallParams::default()
                },
            );
            let id = wall.id;
            if use_cases::editing::add_object(state, wall, true) {
                use_cases::selection::set_selection(state, &[id], false);
            }
            state.editor.active_tool = EditorTool::Select;
            log::info!(
                "Wand von ({:.2}, {:.2}) nach ({:.2}, {:.2}) erstellt",
                start.x,
                start.z,
                end.x,
                end.z
            );
        }
    }
}

/// Verwirft einen gesetzten Wand-Startpunkt.
pub fn cancel(state: &mut AppState) {
    if state.editor.wall_tool.cancel() {
        log::info!("Wand-Eingabe abgebrochen");
    } else {
        log::debug!("Wand-Abbruch: kein Startpunkt gesetzt");
    }
}
