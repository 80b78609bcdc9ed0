//! Scene Editor Library.
//! Kern eines 3D-Szenen-Editors: Objektmodell, Undo/Redo, Selektion,
//! Scene-Store mit Abonnements und Render-Synchronisation.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, ChangeSet, EditorTool, EditorToolState,
    SceneStore, StoreEvent, Subscription,
};
pub use core::{
    create_cube, create_wall_from_two_points, snap_to_grid, CubeParams, ObjectId, ObjectKind,
    ObjectPatch, SceneObject, SceneObjects, Transform, WallParams,
};
pub use shared::{EditorOptions, GizmoMode, RenderScene, SnapSettings};
