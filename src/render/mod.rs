//! Render-Sync-Adapter zwischen Scene-Store und einem 3D-Szenengraphen.
//!
//! Die Render-Technologie steckt hinter `RenderBackend`; `HeadlessBackend`
//! ist die mitgelieferte In-Memory-Implementierung.

mod backend;
mod gizmo;
mod headless;
mod sync;

pub use crate::shared::{GizmoMode, RenderScene};
pub use backend::{update_handle, RenderBackend, RenderHandle};
pub use gizmo::{GizmoBinding, GizmoController};
pub use headless::{AttachedGizmo, BackendStats, HeadlessBackend, HeadlessHandle};
pub use sync::{SceneSync, SyncReport};
