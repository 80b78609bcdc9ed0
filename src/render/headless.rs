//! In-Memory-Backend ohne GPU: zählt Handle-Operationen und merkt sich das Gizmo.
//!
//! Dient Tests, Benchmarks und dem Replay-Binary als Render-Technologie.

use super::backend::{RenderBackend, RenderHandle};
use crate::core::{ObjectId, SceneObject, Transform};
use crate::shared::{GizmoMode, SnapSettings};
use glam::Vec3;

/// Handle des Headless-Backends.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessHandle {
    id: ObjectId,
    transform: Transform,
    box_size: Vec3,
}

impl RenderHandle for HeadlessHandle {
    fn object_id(&self) -> ObjectId {
        self.id
    }

    fn transform(&self) -> Transform {
        self.transform
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    fn box_size(&self) -> Vec3 {
        self.box_size
    }
}

/// Zähler der ausgeführten Backend-Operationen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackendStats {
    pub created: usize,
    pub rebuilt: usize,
    pub disposed: usize,
    pub gizmo_attached: usize,
    pub gizmo_detached: usize,
}

/// Aktuell angehängtes Gizmo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttachedGizmo {
    pub target: ObjectId,
    pub mode: GizmoMode,
    pub snap: SnapSettings,
}

/// Render-Backend ohne Szenengraph.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    stats: BackendStats,
    live_handles: usize,
    gizmo: Option<AttachedGizmo>,
}

impl HeadlessBackend {
    /// Erstellt ein leeres Backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bisherige Operationszähler.
    pub fn stats(&self) -> BackendStats {
        self.stats
    }

    /// Anzahl erzeugter und noch nicht entsorgter Handles.
    pub fn live_handles(&self) -> usize {
        self.live_handles
    }

    /// Aktuell angehängtes Gizmo.
    pub fn gizmo(&self) -> Option<AttachedGizmo> {
        self.gizmo
    }
}

impl RenderBackend for HeadlessBackend {
    type Handle = HeadlessHandle;

    fn create_handle(&mut self, object: &SceneObject) -> HeadlessHandle {
        self.stats.created += 1;
        self.live_handles += 1;
        log::trace!("Handle für {} erzeugt", object.id);
        HeadlessHandle {
            id: object.id,
            transform: object.transform,
            box_size: object.box_size(),
        }
    }

    fn rebuild_geometry(&mut self, handle: &mut HeadlessHandle, size: Vec3) {
        self.stats.rebuilt += 1;
        log::trace!("Geometrie für {} neu gebaut: {:?}", handle.id, size);
        handle.box_size = size;
    }

    fn dispose_handle(&mut self, handle: HeadlessHandle) {
        self.stats.disposed += 1;
        self.live_handles = self.live_handles.saturating_sub(1);
        log::trace!("Handle für {} entsorgt", handle.id);
    }

    fn attach_gizmo(&mut self, handle: &HeadlessHandle, mode: GizmoMode, snap: &SnapSettings) {
        self.stats.gizmo_attached += 1;
        self.gizmo = Some(AttachedGizmo {
            target: handle.id,
            mode,
            snap: *snap,
        });
        log::trace!("Gizmo ({:?}) an {} gehängt", mode, handle.id);
    }

    fn detach_gizmo(&mut self) {
        if self.gizmo.take().is_some() {
            self.stats.gizmo_detached += 1;
            log::trace!("Gizmo gelöst");
        }
    }
}
