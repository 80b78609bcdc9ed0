//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::SnapSettings;
use crate::core::{ObjectId, SceneObjects};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Manipulationsmodus des Transform-Gizmos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GizmoMode {
    Translate,
    Rotate,
    Scale,
}

/// Read-only Daten für einen Sync-/Render-Durchlauf.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Aktuelle Objektsammlung (Arc für O(1)-Clone pro Frame)
    pub objects: Arc<SceneObjects>,
    /// IDs der selektierten Objekte in Selektionsreihenfolge
    pub selected_ids: Arc<IndexSet<ObjectId>>,
    /// Gizmo-Modus des aktiven Werkzeugs (None = kein Gizmo)
    pub gizmo_mode: Option<GizmoMode>,
    /// Raster-Einstellungen für das Gizmo
    pub snap: SnapSettings,
}

impl RenderScene {
    /// Erstes selektiertes Objekt (Gizmo-Ziel).
    pub fn primary_selection(&self) -> Option<ObjectId> {
        self.selected_ids.first().copied()
    }
}
