//! Gizmo-Zustand des Render-Sync: Anbindung und laufender Drag.

use crate::core::ObjectId;
use crate::shared::{GizmoMode, RenderScene, SnapSettings};

/// Woran das Gizmo hängt und wie es rastet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoBinding {
    /// Ziel-Objekt (erstes selektiertes Objekt)
    pub target: ObjectId,
    /// Manipulationsmodus
    pub mode: GizmoMode,
    /// Raster beim Anhängen
    pub snap: SnapSettings,
}

impl GizmoBinding {
    /// Gewünschte Anbindung für eine Render-Szene.
    ///
    /// Nur wenn das Werkzeug einen Gizmo-Modus hat, etwas selektiert ist und
    /// für das erste selektierte Objekt ein Handle existiert.
    pub fn desired(scene: &RenderScene, has_handle: impl Fn(ObjectId) -> bool) -> Option<Self> {
        let mode = scene.gizmo_mode?;
        let target = scene.primary_selection().filter(|id| has_handle(*id))?;
        Some(Self {
            target,
            mode,
            snap: scene.snap,
        })
    }
}

/// Gizmo-Zustand: aktuelle Anbindung und ggf. gezogenes Objekt.
#[derive(Debug, Default)]
pub struct GizmoController {
    binding: Option<GizmoBinding>,
    dragging: Option<ObjectId>,
}

impl GizmoController {
    /// Aktuelle Anbindung.
    pub fn binding(&self) -> Option<GizmoBinding> {
        self.binding
    }

    /// Ziel des Gizmos, falls angehängt.
    pub fn target(&self) -> Option<ObjectId> {
        self.binding.map(|binding| binding.target)
    }

    /// Objekt, das gerade gezogen wird.
    pub fn dragging(&self) -> Option<ObjectId> {
        self.dragging
    }

    pub(crate) fn set_binding(&mut self, binding: Option<GizmoBinding>) {
        self.binding = binding;
    }

    /// Startet einen Drag auf dem angehängten Ziel.
    pub(crate) fn begin_drag(&mut self) -> Option<ObjectId> {
        if self.dragging.is_some() {
            return None;
        }
        self.dragging = self.target();
        self.dragging
    }

    pub(crate) fn end_drag(&mut self) -> Option<ObjectId> {
        self.dragging.take()
    }
}
