use crate::app::state::EditorTool;
use crate::core::{ObjectId, ObjectPatch, SceneObject};
use crate::shared::SnapSettings;
use glam::Vec3;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Editor-Werkzeug wechseln
    SetEditorTool { tool: EditorTool },
    /// Objekt einfügen (optional mit Undo-Snapshot vor der Mutation)
    AddObject {
        object: SceneObject,
        push_history: bool,
    },
    /// Teil-Patch auf ein Objekt anwenden; unbekannte ID = No-op
    UpdateObject {
        id: ObjectId,
        patch: ObjectPatch,
        push_history: bool,
    },
    /// Objekt entfernen (inkl. Selektion)
    RemoveObject { id: ObjectId, push_history: bool },
    /// Alle selektierten Objekte in einem Undo-Schritt entfernen
    RemoveSelectedObjects,
    /// Selektion ersetzen oder erweitern
    SetSelection { ids: Vec<ObjectId>, additive: bool },
    /// Alle Objekte selektieren
    SelectAll,
    /// Selektion aufheben
    ClearSelection,
    /// Expliziter Undo-Snapshot (Gesten-Start)
    PushHistorySnapshot,
    /// Transform-Geste abgeschlossen
    EndTransformGesture,
    /// Bodenklick für das Wand-Werkzeug
    WallToolClick { point: Vec3 },
    /// Wand-Eingabe abbrechen
    WallToolCancel,
    /// Raster-Einstellungen setzen
    SetSnapSettings { snap: SnapSettings },
    /// Letzten Schritt rückgängig machen
    Undo,
    /// Rückgängig gemachten Schritt wiederholen
    Redo,
}
