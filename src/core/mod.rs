//! Core-Domänentypen: Szenen-Objekte, Konstruktoren, Objektsammlung, Geometrie-Helfer.

pub mod factories;
/// Reine Geometrie-Funktionen ohne Zustand
pub mod geometry;
pub mod object;
pub mod scene_objects;

pub use factories::{
    create_cube, create_wall_from_two_points, CubeParams, WallParams, DEFAULT_WALL_HEIGHT,
    DEFAULT_WALL_THICKNESS,
};
pub use geometry::{
    deg_to_rad, is_finite_vec3, rad_to_deg, sanitize_dimension, snap_to_grid, snap_vec3, GRID_STEP,
    MIN_DIMENSION,
};
pub use object::{
    CubeDims, DimsPatch, ObjectId, ObjectKind, ObjectPatch, SceneObject, Transform, WallDims,
};
pub use scene_objects::SceneObjects;
