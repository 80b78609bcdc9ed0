//! Vertrag zwischen Render-Sync und konkreter 3D-Technologie.

use crate::core::{ObjectId, SceneObject, Transform};
use crate::shared::{GizmoMode, SnapSettings};
use glam::Vec3;

/// Render-seitiges Gegenstück eines Szenen-Objekts (Mesh, Knoten o.ä.).
pub trait RenderHandle {
    /// ID des gespiegelten Objekts
    fn object_id(&self) -> ObjectId;

    /// Aktuelle Transformation (vom Gizmo ggf. direkt verändert)
    fn transform(&self) -> Transform;

    /// Transformation setzen
    fn set_transform(&mut self, transform: Transform);

    /// Aktuelle Box-Abmessungen der Geometrie
    fn box_size(&self) -> Vec3;
}

/// Render-Backend, das Handles erzeugt, umbaut und entsorgt sowie das Gizmo führt.
pub trait RenderBackend {
    /// Handle-Typ des Backends
    type Handle: RenderHandle;

    /// Erzeugt ein Handle mit Geometrie und Transformation des Objekts.
    fn create_handle(&mut self, object: &SceneObject) -> Self::Handle;

    /// Ersetzt die Geometrie eines Handles durch eine Box der Größe `size`.
    fn rebuild_geometry(&mut self, handle: &mut Self::Handle, size: Vec3);

    /// Entfernt das Handle aus dem Szenengraphen und gibt Ressourcen frei.
    fn dispose_handle(&mut self, handle: Self::Handle);

    /// Hängt das Transform-Gizmo an ein Handle.
    fn attach_gizmo(&mut self, handle: &Self::Handle, mode: GizmoMode, snap: &SnapSettings);

    /// Löst das Transform-Gizmo.
    fn detach_gizmo(&mut self);
}

/// Bringt ein bestehendes Handle auf den Stand des Objekts.
///
/// Die Geometrie wird nur neu gebaut, wenn eine Box-Kante um mehr als `epsilon`
/// abweicht; die Transformation wird immer übernommen. Gibt `true` zurück,
/// wenn die Geometrie neu gebaut wurde.
pub fn update_handle<B: RenderBackend>(
    backend: &mut B,
    handle: &mut B::Handle,
    object: &SceneObject,
    epsilon: f32,
) -> bool {
    let size = object.box_size();
    let rebuild = !handle.box_size().abs_diff_eq(size, epsilon);
    if rebuild {
        backend.rebuild_geometry(handle, size);
    }
    handle.set_transform(object.transform);
    rebuild
}
