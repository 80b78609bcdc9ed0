use super::{AppState, SelectionState};
use crate::core::SceneObjects;
use std::sync::Arc;

/// Gespeicherter Editor-Zustand: Objektsammlung plus Selektion.
///
/// Die Sammlung wird nur per `Arc` geteilt. Mutierende Use-Cases gehen über
/// `Arc::make_mut()`, daher bleibt ein abgelegter Snapshot unverändert.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub objects: Arc<SceneObjects>,
    pub selection: SelectionState,
}

impl Snapshot {
    /// Hält den aktuellen Zustand fest, ohne Objekte zu kopieren.
    pub fn from_state(state: &AppState) -> Self {
        Self {
            objects: Arc::clone(&state.objects),
            selection: state.selection.clone(),
        }
    }

    /// Ersetzt Objekte und Selektion im Zustand durch den Snapshot.
    pub fn apply_to(self, state: &mut AppState) {
        let Snapshot { objects, selection } = self;
        state.objects = objects;
        state.selection = selection;
    }
}

/// Undo- und Redo-Stack aus Snapshots.
///
/// Ohne `max_depth` wachsen beide Stacks unbegrenzt, sonst fällt der älteste Eintrag heraus.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: Option<usize>,
    revision: u64,
}

impl EditHistory {
    /// Leerer Verlauf; `Some(0)` wird wie `None` behandelt.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.filter(|depth| *depth > 0),
            revision: 0,
        }
    }

    /// Legt einen vor der Mutation erstellten Snapshot ab und verwirft den Redo-Stack.
    pub fn record_snapshot(&mut self, snapshot: Snapshot) {
        self.push_undo(snapshot);
        self.redo_stack.clear();
        self.revision += 1;
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Anzahl möglicher Undo-Schritte.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Anzahl möglicher Redo-Schritte.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Holt den letzten Undo-Snapshot; `current` wandert auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo_stack.pop()?;
        Self::push_capped(&mut self.redo_stack, current, self.max_depth);
        self.revision += 1;
        Some(previous)
    }

    /// Holt den letzten Redo-Snapshot; `current` wandert auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.push_undo(current);
        self.revision += 1;
        Some(next)
    }

    /// Änderungszähler beider Stacks (monoton steigend).
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        Self::push_capped(&mut self.undo_stack, snapshot, self.max_depth);
    }

    fn push_capped(stack: &mut Vec<Snapshot>, snapshot: Snapshot, max_depth: Option<usize>) {
        if let Some(max) = max_depth {
            if stack.len() >= max {
                stack.remove(0);
            }
        }
        stack.push(snapshot);
    }
}
