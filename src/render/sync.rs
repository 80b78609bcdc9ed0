//! Render-Sync: spiegelt die Objektsammlung des Stores in Backend-Handles.
//!
//! Abgleich per ID (entsorgen, erzeugen, aktualisieren), Gizmo-Anbindung an das
//! erste selektierte Objekt und Rückkanal Gizmo → Store über Transform-Gesten.

use super::backend::{update_handle, RenderBackend, RenderHandle};
use super::gizmo::{GizmoBinding, GizmoController};
use crate::app::{AppIntent, SceneStore, Subscription};
use crate::core::{ObjectId, ObjectPatch, SceneObjects};
use crate::shared::RenderScene;
use std::collections::HashMap;

/// Ergebnis eines Abgleichs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Neu erzeugte Handles
    pub created: usize,
    /// Aktualisierte bestehende Handles
    pub updated: usize,
    /// Davon mit neu gebauter Geometrie
    pub rebuilt: usize,
    /// Entsorgte Handles
    pub disposed: usize,
}

impl SyncReport {
    /// Gibt `true` zurück, wenn kein Handle angefasst wurde.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Besitzt alle Render-Handles und hält sie deckungsgleich mit dem Store.
pub struct SceneSync<B: RenderBackend> {
    backend: B,
    handles: HashMap<ObjectId, B::Handle>,
    gizmo: GizmoController,
    subscription: Subscription,
    epsilon: f32,
}

impl<B: RenderBackend> SceneSync<B> {
    /// Abonniert den Store und führt den initialen Abgleich durch.
    pub fn new(backend: B, store: &mut SceneStore) -> Self {
        let mut sync = Self {
            backend,
            handles: HashMap::new(),
            gizmo: GizmoController::default(),
            subscription: store.subscribe(),
            epsilon: store.state().options.geometry_epsilon,
        };

        let scene = store.render_scene();
        let report = sync.reconcile(&scene.objects);
        sync.refresh_gizmo(&scene);
        log::info!("Render-Sync gestartet: {} Handles", report.created);
        sync
    }

    /// Verarbeitet alle wartenden Store-Events (einmal pro Frame aufrufen).
    ///
    /// Verschwindet das gerade gezogene Objekt, wird der Drag beendet.
    pub fn pump(&mut self, store: &mut SceneStore) -> SyncReport {
        let Some(changes) = self.subscription.pending_changes() else {
            return SyncReport::default();
        };

        let scene = store.render_scene();
        let report = if changes.objects {
            self.reconcile(&scene.objects)
        } else {
            SyncReport::default()
        };

        if let Some(id) = self.gizmo.dragging() {
            if !self.handles.contains_key(&id) {
                log::debug!("Gezogenes Objekt {} verschwunden, Drag beendet", id);
                self.end_gizmo_drag(store);
            }
        }

        if changes.affects_render() {
            self.refresh_gizmo(&scene);
        }
        report
    }

    /// Gleicht die Handles per ID mit der Objektsammlung ab.
    pub fn reconcile(&mut self, objects: &SceneObjects) -> SyncReport {
        let mut report = SyncReport::default();

        let stale: Vec<ObjectId> = self
            .handles
            .keys()
            .copied()
            .filter(|id| !objects.contains(*id))
            .collect();
        for id in stale {
            let Some(handle) = self.handles.remove(&id) else {
                continue;
            };
            if self.gizmo.target() == Some(id) {
                self.backend.detach_gizmo();
                self.gizmo.set_binding(None);
            }
            self.backend.dispose_handle(handle);
            report.disposed += 1;
        }

        for object in objects.iter() {
            match self.handles.get_mut(&object.id) {
                Some(handle) => {
                    if update_handle(&mut self.backend, handle, object, self.epsilon) {
                        report.rebuilt += 1;
                    }
                    report.updated += 1;
                }
                None => {
                    let handle = self.backend.create_handle(object);
                    self.handles.insert(object.id, handle);
                    report.created += 1;
                }
            }
        }

        log::debug!(
            "Abgleich: {} neu, {} aktualisiert ({} Geometrie), {} entsorgt",
            report.created,
            report.updated,
            report.rebuilt,
            report.disposed
        );
        report
    }

    /// Hängt das Gizmo an, löst es oder hängt es um. Gibt `true` bei Änderung zurück.
    pub fn refresh_gizmo(&mut self, scene: &RenderScene) -> bool {
        let desired = GizmoBinding::desired(scene, |id| self.handles.contains_key(&id));
        let current = self.gizmo.binding();
        if desired == current {
            return false;
        }

        if current.is_some() {
            self.backend.detach_gizmo();
        }
        if let Some(binding) = desired {
            if let Some(handle) = self.handles.get(&binding.target) {
                self.backend.attach_gizmo(handle, binding.mode, &binding.snap);
            }
        }
        self.gizmo.set_binding(desired);
        true
    }

    /// Pointer auf dem Gizmo gedrückt: ein Undo-Snapshot für die ganze Geste.
    ///
    /// Ohne angehängtes Gizmo oder bei laufendem Drag wird nichts getan.
    pub fn begin_gizmo_drag(&mut self, store: &mut SceneStore) -> bool {
        let Some(id) = self.gizmo.begin_drag() else {
            log::debug!("Gizmo-Drag ignoriert: kein Gizmo angehängt oder Drag läuft");
            return false;
        };
        store.dispatch(AppIntent::TransformGestureStarted);
        log::debug!("Gizmo-Drag auf {} gestartet", id);
        true
    }

    /// Überträgt die aktuelle Handle-Transformation des gezogenen Objekts in den Store.
    pub fn gizmo_drag_frame(&mut self, store: &mut SceneStore) -> bool {
        let Some(id) = self.gizmo.dragging() else {
            return false;
        };
        let Some(handle) = self.handles.get(&id) else {
            log::debug!("Gizmo-Frame ignoriert: kein Handle für {}", id);
            return false;
        };

        store.dispatch(AppIntent::TransformGestureUpdated {
            id,
            patch: ObjectPatch::from_transform(handle.transform()),
        });
        true
    }

    /// Pointer losgelassen oder Fokus verloren.
    pub fn end_gizmo_drag(&mut self, store: &mut SceneStore) -> bool {
        let Some(id) = self.gizmo.end_drag() else {
            return false;
        };
        store.dispatch(AppIntent::TransformGestureEnded);
        log::debug!("Gizmo-Drag auf {} beendet", id);
        true
    }

    /// Kamera-Orbit ist während eines Gizmo-Drags gesperrt.
    pub fn camera_orbit_enabled(&self) -> bool {
        self.gizmo.dragging().is_none()
    }

    /// Gizmo-Zustand (Anbindung, laufender Drag).
    pub fn gizmo(&self) -> &GizmoController {
        &self.gizmo
    }

    /// Handle eines Objekts.
    pub fn handle(&self, id: ObjectId) -> Option<&B::Handle> {
        self.handles.get(&id)
    }

    /// Mutables Handle (das Backend-Gizmo verändert Transformationen direkt).
    pub fn handle_mut(&mut self, id: ObjectId) -> Option<&mut B::Handle> {
        self.handles.get_mut(&id)
    }

    /// Anzahl der gespiegelten Objekte.
    pub fn handle_count(&self) -> usize {
        self.handles.len()
    }

    /// Zugriff auf das Backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutabler Zugriff auf das Backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::EditorTool;
    use crate::core::{create_cube, CubeParams, SceneObject};
    use crate::render::HeadlessBackend;
    use crate::shared::EditorOptions;

    fn cube(id: u128) -> SceneObject {
        create_cube(CubeParams {
            id: Some(ObjectId::from_u128(id)),
            ..CubeParams::default()
        })
    }

    #[test]
    fn initial_sync_mirrors_existing_objects() {
        let mut store = SceneStore::new(EditorOptions::default());
        store.add_object(cube(1), false);
        store.add_object(cube(2), false);

        let sync = SceneSync::new(HeadlessBackend::new(), &mut store);

        assert_eq!(sync.handle_count(), 2);
        assert_eq!(sync.backend().stats().created, 2);
    }

    #[test]
    fn pump_without_events_touches_nothing() {
        let mut store = SceneStore::default();
        let mut sync = SceneSync::new(HeadlessBackend::new(), &mut store);
        assert!(sync.pump(&mut store).is_empty());
    }

    #[test]
    fn selection_only_change_skips_reconcile() {
        let mut store = SceneStore::default();
        store.add_object(cube(1), false);
        let mut sync = SceneSync::new(HeadlessBackend::new(), &mut store);

        store.set_selection(&[ObjectId::from_u128(1)], false);
        let report = sync.pump(&mut store);

        assert!(report.is_empty());
    }

    #[test]
    fn removing_gizmo_target_detaches_before_dispose() {
        let mut store = SceneStore::default();
        store.add_object(cube(1), false);
        store.set_selection(&[ObjectId::from_u128(1)], false);
        store.set_active_tool(EditorTool::Move);
        let mut sync = SceneSync::new(HeadlessBackend::new(), &mut store);
        assert!(sync.backend().gizmo().is_some());

        store.remove_object(ObjectId::from_u128(1), true);
        let report = sync.pump(&mut store);

        assert_eq!(report.disposed, 1);
        assert!(sync.backend().gizmo().is_none());
        assert_eq!(sync.gizmo().binding(), None);
        assert_eq!(sync.backend().stats().gizmo_detached, 1);
    }
}
