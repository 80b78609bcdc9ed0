use super::{EditorToolState, SelectionState};
use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::SceneObjects;
use crate::shared::EditorOptions;
use std::sync::Arc;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle Szenen-Objekte (Arc: Snapshots teilen die Sammlung bis zur nächsten Mutation)
    pub objects: Arc<SceneObjects>,
    /// Selection-State
    pub selection: SelectionState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            objects: Arc::new(SceneObjects::new()),
            selection: SelectionState::new(),
            editor: EditorToolState::new(options.snap),
            command_log: CommandLog::new(),
            history: EditHistory::new(options.history_max_depth),
            options,
        }
    }

    /// Mutable Objektsammlung (CoW: klont nur, wenn ein Snapshot sie noch teilt).
    #[inline]
    pub fn objects_mut(&mut self) -> &mut SceneObjects {
        Arc::make_mut(&mut self.objects)
    }

    /// Anzahl der Szenen-Objekte.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Legt den aktuellen Zustand als Undo-Schritt ab (vor einer Mutation aufrufen).
    pub fn record_undo_snapshot(&mut self) {
        let snapshot = Snapshot::from_state(self);
        self.history.record_snapshot(snapshot);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
