//! Scene-Store: Aggregat aus AppState und Controller mit Änderungs-Abonnements.
//!
//! Jeder Intent bzw. Command wird vollständig ausgeführt, danach vergleicht der
//! Store einen günstigen Fingerabdruck des Zustands und sendet bei Änderungen
//! genau ein `StoreEvent` an alle lebenden Abonnenten.

use super::state::EditorTool;
use super::{AppCommand, AppController, AppIntent, AppState};
use crate::core::{ObjectId, ObjectPatch, SceneObject, SceneObjects};
use crate::shared::{EditorOptions, RenderScene, SnapSettings};
use indexmap::IndexSet;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Weak};

/// Welche Teile des Zustands sich durch einen Schritt geändert haben.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// Objektsammlung (Einfügen, Entfernen, Patch, Undo/Redo)
    pub objects: bool,
    /// Selektion
    pub selection: bool,
    /// Aktives Werkzeug oder offener Wand-Startpunkt
    pub tool: bool,
    /// Raster-Einstellungen
    pub snap: bool,
    /// Undo/Redo-Stacks
    pub history: bool,
}

impl ChangeSet {
    /// Gibt `true` zurück, wenn sich nichts geändert hat.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Vereinigt zwei Änderungsmengen.
    pub fn merge(&mut self, other: ChangeSet) {
        self.objects |= other.objects;
        self.selection |= other.selection;
        self.tool |= other.tool;
        self.snap |= other.snap;
        self.history |= other.history;
    }

    /// Betrifft die Änderung den Render-Sync (Objekte, Gizmo-Ziel oder -Modus)?
    pub fn affects_render(&self) -> bool {
        self.objects || self.selection || self.tool || self.snap
    }
}

/// Benachrichtigung an Abonnenten nach einem zustandsändernden Schritt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreEvent {
    /// Laufende Nummer des Zustands nach dem Schritt
    pub revision: u64,
    /// Geänderte Zustandsteile
    pub changes: ChangeSet,
}

/// Empfangsseite eines Store-Abonnements.
///
/// Wird das Abonnement fallen gelassen, entfernt der Store den Sender beim nächsten Publish.
#[derive(Debug)]
pub struct Subscription {
    receiver: Receiver<StoreEvent>,
}

impl Subscription {
    /// Nächstes wartendes Event (nicht blockierend).
    pub fn try_recv(&self) -> Option<StoreEvent> {
        self.receiver.try_recv().ok()
    }

    /// Alle wartenden Events in Sende-Reihenfolge.
    pub fn drain(&self) -> Vec<StoreEvent> {
        self.receiver.try_iter().collect()
    }

    /// Fasst alle wartenden Events zu einer Änderungsmenge zusammen.
    pub fn pending_changes(&self) -> Option<ChangeSet> {
        self.receiver.try_iter().fold(None, |acc, event| {
            let mut merged = acc.unwrap_or_default();
            merged.merge(event.changes);
            Some(merged)
        })
    }
}

/// Günstiger Vergleichswert des Zustands vor und nach einem Schritt.
///
/// Die Objektsammlung wird über Allokation (Weak hält sie reserviert) und
/// Mutations-Revision erkannt, nicht über einen Inhaltsvergleich.
struct Fingerprint {
    objects: Weak<SceneObjects>,
    objects_revision: u64,
    selection: Arc<IndexSet<ObjectId>>,
    tool: EditorTool,
    wall_start: Option<glam::Vec3>,
    snap: SnapSettings,
    history_revision: u64,
}

impl Fingerprint {
    fn of(state: &AppState) -> Self {
        Self {
            objects: Arc::downgrade(&state.objects),
            objects_revision: state.objects.revision(),
            selection: state.selection.selected_ids.clone(),
            tool: state.editor.active_tool,
            wall_start: state.editor.wall_tool.start(),
            snap: state.editor.snap,
            history_revision: state.history.revision(),
        }
    }

    fn diff(&self, state: &AppState) -> ChangeSet {
        let same_objects = std::ptr::eq(self.objects.as_ptr(), Arc::as_ptr(&state.objects))
            && self.objects_revision == state.objects.revision();
        let same_selection = Arc::ptr_eq(&self.selection, &state.selection.selected_ids)
            || *self.selection == *state.selection.selected_ids;

        ChangeSet {
            objects: !same_objects,
            selection: !same_selection,
            tool: self.tool != state.editor.active_tool
                || self.wall_start != state.editor.wall_tool.start(),
            snap: self.snap != state.editor.snap,
            history: self.history_revision != state.history.revision(),
        }
    }
}

/// Besitzt den gesamten Editor-Zustand; einziger Schreibzugang für UI und Render-Sync.
#[derive(Default)]
pub struct SceneStore {
    state: AppState,
    controller: AppController,
    subscribers: Vec<Sender<StoreEvent>>,
    revision: u64,
}

impl SceneStore {
    /// Erstellt einen leeren Store mit den übergebenen Optionen.
    pub fn new(options: EditorOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            subscribers: Vec::new(),
            revision: 0,
        }
    }

    /// Read-only Zugriff auf den aktuellen Zustand.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Laufende Zustandsnummer (erhöht sich nur bei tatsächlichen Änderungen).
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registriert einen neuen Abonnenten.
    pub fn subscribe(&mut self) -> Subscription {
        let (sender, receiver) = mpsc::channel();
        self.subscribers.push(sender);
        Subscription { receiver }
    }

    /// Anzahl registrierter Abonnenten (inkl. noch nicht bereinigter).
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Verarbeitet einen UI-Intent als einen Schritt.
    pub fn dispatch(&mut self, intent: AppIntent) -> ChangeSet {
        self.step(|controller, state| controller.handle_intent(state, intent))
    }

    /// Führt einen einzelnen Command als einen Schritt aus.
    pub fn execute(&mut self, command: AppCommand) -> ChangeSet {
        self.step(|controller, state| controller.handle_command(state, command))
    }

    /// Aktiviert ein Editor-Werkzeug.
    pub fn set_active_tool(&mut self, tool: EditorTool) -> ChangeSet {
        self.execute(AppCommand::SetEditorTool { tool })
    }

    /// Fügt ein Objekt hinzu (Standard: mit Undo-Schritt).
    pub fn add_object(&mut self, object: SceneObject, push_history: bool) -> ChangeSet {
        self.execute(AppCommand::AddObject {
            object,
            push_history,
        })
    }

    /// Wendet einen Teil-Patch an (Standard: ohne Undo-Schritt). Unbekannte IDs: No-op.
    pub fn update_object(
        &mut self,
        id: ObjectId,
        patch: ObjectPatch,
        push_history: bool,
    ) -> ChangeSet {
        self.execute(AppCommand::UpdateObject {
            id,
            patch,
            push_history,
        })
    }

    /// Entfernt ein Objekt samt Selektionseintrag (Standard: mit Undo-Schritt).
    pub fn remove_object(&mut self, id: ObjectId, push_history: bool) -> ChangeSet {
        self.execute(AppCommand::RemoveObject { id, push_history })
    }

    /// Ersetzt oder erweitert die Selektion.
    pub fn set_selection(&mut self, ids: &[ObjectId], additive: bool) -> ChangeSet {
        self.execute(AppCommand::SetSelection {
            ids: ids.to_vec(),
            additive,
        })
    }

    /// Nimmt explizit einen Undo-Snapshot auf.
    pub fn push_history_snapshot(&mut self) -> ChangeSet {
        self.execute(AppCommand::PushHistorySnapshot)
    }

    /// Macht den letzten Schritt rückgängig.
    pub fn undo(&mut self) -> ChangeSet {
        self.execute(AppCommand::Undo)
    }

    /// Wiederholt den zuletzt rückgängig gemachten Schritt.
    pub fn redo(&mut self) -> ChangeSet {
        self.execute(AppCommand::Redo)
    }

    /// Baut die Render-Szene aus dem aktuellen Zustand.
    pub fn render_scene(&self) -> RenderScene {
        self.controller.build_render_scene(&self.state)
    }

    fn step(&mut self, run: impl FnOnce(&mut AppController, &mut AppState)) -> ChangeSet {
        let before = Fingerprint::of(&self.state);
        run(&mut self.controller, &mut self.state);
        let changes = before.diff(&self.state);

        if !changes.is_empty() {
            self.revision += 1;
            self.publish(StoreEvent {
                revision: self.revision,
                changes,
            });
        }
        changes
    }

    fn publish(&mut self, event: StoreEvent) {
        let before = self.subscribers.len();
        self.subscribers.retain(|sender| sender.send(event).is_ok());

        let dropped = before - self.subscribers.len();
        if dropped > 0 {
            log::debug!("{} getrennte Abonnenten entfernt", dropped);
        }
        log::trace!("Store-Revision {}: {:?}", event.revision, event.changes);
    }
}
