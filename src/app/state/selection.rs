use crate::core::{ObjectId, SceneObjects};
use indexmap::IndexSet;
use std::sync::Arc;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Geordnete Menge der selektierten Objekt-IDs (Arc für O(1)-Clone in Snapshot und RenderScene)
    pub selected_ids: Arc<IndexSet<ObjectId>>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_ids: Arc::new(IndexSet::new()),
        }
    }

    /// Gibt eine mutable Referenz auf das Set zurück (CoW: klont nur wenn nötig).
    ///
    /// Alle Mutationen der Selektion gehen über diese Methode, damit Snapshots
    /// und `RenderScene` die Selektion per Arc-Klon teilen können.
    #[inline]
    pub fn ids_mut(&mut self) -> &mut IndexSet<ObjectId> {
        Arc::make_mut(&mut self.selected_ids)
    }

    /// Setzt die Selektion. `additive = false` ersetzt, `additive = true` vereinigt.
    ///
    /// IDs ohne zugehöriges Objekt werden verworfen.
    pub fn set(&mut self, ids: &[ObjectId], additive: bool, objects: &SceneObjects) {
        let valid = ids.iter().copied().filter(|id| objects.contains(*id));
        if additive {
            let ids = self.ids_mut();
            ids.extend(valid);
        } else {
            let next: IndexSet<ObjectId> = valid.collect();
            if *self.selected_ids != next {
                self.selected_ids = Arc::new(next);
            }
        }
    }

    /// Entfernt eine ID aus der Selektion.
    pub fn remove(&mut self, id: ObjectId) -> bool {
        if !self.selected_ids.contains(&id) {
            return false;
        }
        self.ids_mut().shift_remove(&id)
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        if !self.selected_ids.is_empty() {
            self.ids_mut().clear();
        }
    }

    /// Erstes selektiertes Objekt.
    pub fn primary(&self) -> Option<ObjectId> {
        self.selected_ids.first().copied()
    }

    /// Prüft ob die ID selektiert ist.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.selected_ids.contains(&id)
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }

    /// Anzahl der selektierten Objekte.
    pub fn len(&self) -> usize {
        self.selected_ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{create_cube, CubeParams};

    fn objects(count: u128) -> SceneObjects {
        (1..=count)
            .map(|i| {
                create_cube(CubeParams {
                    id: Some(ObjectId::from_u128(i)),
                    ..CubeParams::default()
                })
            })
            .collect()
    }

    fn id(i: u128) -> ObjectId {
        ObjectId::from_u128(i)
    }

    #[test]
    fn replace_deduplicates_and_keeps_order() {
        let objects = objects(3);
        let mut sel = SelectionState::new();
        sel.set(&[id(3), id(1), id(3)], false, &objects);

        let ids: Vec<_> = sel.selected_ids.iter().copied().collect();
        assert_eq!(ids, vec![id(3), id(1)]);
        assert_eq!(sel.primary(), Some(id(3)));
    }

    #[test]
    fn additive_unions_with_existing() {
        let objects = objects(3);
        let mut sel = SelectionState::new();
        sel.set(&[id(1)], false, &objects);
        sel.set(&[id(2), id(1)], true, &objects);

        assert_eq!(sel.len(), 2);
        assert_eq!(sel.primary(), Some(id(1)));
    }

    #[test]
    fn empty_replace_clears() {
        let objects = objects(2);
        let mut sel = SelectionState::new();
        sel.set(&[id(1), id(2)], false, &objects);
        sel.set(&[], false, &objects);
        assert!(sel.is_empty());
    }

    #[test]
    fn unknown_ids_are_dropped() {
        let objects = objects(1);
        let mut sel = SelectionState::new();
        sel.set(&[id(1), id(42)], false, &objects);
        assert_eq!(sel.len(), 1);
        assert!(!sel.contains(id(42)));
    }

    #[test]
    fn clone_shares_until_mutation() {
        let objects = objects(2);
        let mut sel = SelectionState::new();
        sel.set(&[id(1)], false, &objects);

        let snapshot = sel.clone();
        assert!(Arc::ptr_eq(&snapshot.selected_ids, &sel.selected_ids));

        sel.set(&[id(2)], true, &objects);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(sel.len(), 2);
    }
}
