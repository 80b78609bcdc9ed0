use crate::app::tools::WallDrawTool;
use crate::shared::{GizmoMode, SnapSettings};
use serde::{Deserialize, Serialize};

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorTool {
    /// Standard: Objekte selektieren
    #[default]
    Select,
    /// Selektiertes Objekt per Gizmo verschieben
    Move,
    /// Selektiertes Objekt per Gizmo drehen
    Rotate,
    /// Selektiertes Objekt per Gizmo skalieren
    Scale,
    /// Wand per zwei Bodenklicks zeichnen
    AddWall,
}

impl EditorTool {
    /// Gizmo-Modus, den das Werkzeug benötigt.
    pub fn gizmo_mode(self) -> Option<GizmoMode> {
        match self {
            EditorTool::Move => Some(GizmoMode::Translate),
            EditorTool::Rotate => Some(GizmoMode::Rotate),
            EditorTool::Scale => Some(GizmoMode::Scale),
            EditorTool::Select | EditorTool::AddWall => None,
        }
    }
}

/// Zustand des aktuellen Editor-Werkzeugs
#[derive(Debug, Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Wand-Werkzeug (wartet ggf. auf zweiten Klick)
    pub wall_tool: WallDrawTool,
    /// Aktuelle Raster-Einstellungen
    pub snap: SnapSettings,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Select-Tool aktiv).
    pub fn new(snap: SnapSettings) -> Self {
        Self {
            active_tool: EditorTool::Select,
            wall_tool: WallDrawTool::new(),
            snap,
        }
    }
}
