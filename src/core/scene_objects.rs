//! ID-indexierte, einfügegeordnete Objektsammlung der Szene.

use super::object::{ObjectId, SceneObject};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Container für alle Szenen-Objekte.
///
/// Jede mutierende Methode erhöht `revision`, damit Beobachter In-Place-Änderungen
/// erkennen, ohne die Sammlung zu vergleichen. Die Revision ist nicht Teil der Gleichheit.
#[derive(Debug, Clone, Default)]
pub struct SceneObjects {
    objects: IndexMap<ObjectId, SceneObject>,
    revision: u64,
}

impl SceneObjects {
    /// Erstellt eine leere Sammlung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt ein Objekt hinzu. Bei bereits vergebener ID bleibt die Sammlung unverändert.
    pub fn insert(&mut self, object: SceneObject) -> bool {
        if self.objects.contains_key(&object.id) {
            return false;
        }
        self.objects.insert(object.id, object);
        self.revision += 1;
        true
    }

    /// Entfernt ein Objekt unter Beibehaltung der Reihenfolge der übrigen.
    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let removed = self.objects.shift_remove(&id);
        if removed.is_some() {
            self.revision += 1;
        }
        removed
    }

    /// Liefert ein Objekt per ID.
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// Mutable Referenz auf ein Objekt (zählt als Mutation).
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        let object = self.objects.get_mut(&id)?;
        self.revision += 1;
        Some(object)
    }

    /// Prüft ob ein Objekt mit der ID existiert.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    /// Anzahl der Objekte.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Gibt `true` zurück, wenn keine Objekte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iteriert in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values()
    }

    /// Alle IDs in Einfügereihenfolge.
    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects.keys().copied()
    }

    /// Mutations-Zähler (monoton steigend).
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl PartialEq for SceneObjects {
    fn eq(&self, other: &Self) -> bool {
        self.objects == other.objects
    }
}

impl Serialize for SceneObjects {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.objects.values())
    }
}

impl FromIterator<SceneObject> for SceneObjects {
    fn from_iter<I: IntoIterator<Item = SceneObject>>(iter: I) -> Self {
        let mut objects = Self::new();
        for object in iter {
            objects.insert(object);
        }
        objects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::factories::{create_cube, CubeParams};

    fn cube(id: u128) -> SceneObject {
        create_cube(CubeParams {
            id: Some(ObjectId::from_u128(id)),
            ..CubeParams::default()
        })
    }

    #[test]
    fn insert_rejects_duplicate_ids() {
        let mut objects = SceneObjects::new();
        assert!(objects.insert(cube(1)));

        let mut other = cube(1);
        other.name = Some("Duplikat".into());
        assert!(!objects.insert(other));

        assert_eq!(objects.len(), 1);
        assert_eq!(
            objects.get(ObjectId::from_u128(1)).unwrap().name.as_deref(),
            Some("Cube")
        );
    }

    #[test]
    fn remove_keeps_insertion_order() {
        let mut objects: SceneObjects = (1..=4).map(cube).collect();
        objects.remove(ObjectId::from_u128(2));

        let ids: Vec<_> = objects.ids().collect();
        assert_eq!(
            ids,
            vec![
                ObjectId::from_u128(1),
                ObjectId::from_u128(3),
                ObjectId::from_u128(4)
            ]
        );
    }

    #[test]
    fn revision_tracks_mutations_only() {
        let mut objects = SceneObjects::new();
        let r0 = objects.revision();

        objects.insert(cube(1));
        let r1 = objects.revision();
        assert!(r1 > r0);

        assert!(objects.remove(ObjectId::from_u128(99)).is_none());
        assert!(objects.get_mut(ObjectId::from_u128(99)).is_none());
        assert_eq!(objects.revision(), r1);

        objects.get_mut(ObjectId::from_u128(1)).unwrap().name = None;
        assert!(objects.revision() > r1);
    }

    #[test]
    fn equality_ignores_revision() {
        let a: SceneObjects = (1..=2).map(cube).collect();
        let mut b = a.clone();
        let _ = b.get_mut(ObjectId::from_u128(1));
        assert_eq!(a, b);
    }
}
