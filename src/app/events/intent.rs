use crate::app::state::EditorTool;
use crate::core::{ObjectId, ObjectPatch};
use crate::shared::SnapSettings;
use serde::{Deserialize, Serialize};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Serde-fähig, damit Sitzungen als JSON-Skript wiederholt werden können.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum AppIntent {
    /// Editor-Werkzeug wechseln (Toolbar, Tasten 1–5)
    SetEditorToolRequested { tool: EditorTool },
    /// Neuen Cube im Ursprung platzieren
    AddCubeRequested,
    /// Klick im Viewport: getroffenes Objekt (None = leerer Bereich)
    ObjectPicked {
        id: Option<ObjectId>,
        #[serde(default)]
        additive: bool,
    },
    /// Klick auf die Bodenebene (Weltkoordinaten)
    GroundClicked { point: glam::Vec3 },
    /// Laufende Wand-Eingabe abbrechen
    WallToolCancelled,
    /// Selektierte Objekte löschen
    DeleteSelectedRequested,
    /// Alle Objekte selektieren
    SelectAllRequested,
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Diskrete Eigenschaftsänderung (Zahlenfeld bestätigt) mit Undo-Schritt
    ObjectPropertyCommitted { id: ObjectId, patch: ObjectPatch },

    /// Transform-Geste Start: Undo-Snapshot aufnehmen (Gizmo-Drag, Slider-Drag)
    TransformGestureStarted,
    /// Transform-Geste Update: Zwischenwert ohne Undo-Schritt übernehmen
    TransformGestureUpdated { id: ObjectId, patch: ObjectPatch },
    /// Transform-Geste Ende: Pointer losgelassen oder Fokus verloren
    TransformGestureEnded,

    /// Raster-Einstellungen geändert
    SnapSettingsChanged { snap: SnapSettings },
    /// Undo anfordern
    UndoRequested,
    /// Redo anfordern
    RedoRequested,
}
