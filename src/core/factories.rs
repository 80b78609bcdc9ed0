//! Konstruktoren für platzierbare Objekte (reine Funktionen).

use super::geometry::sanitize_dimension;
use super::object::{CubeDims, ObjectId, ObjectKind, SceneObject, Transform, WallDims};
use glam::Vec3;

/// Standard-Wandstärke in Metern.
pub const DEFAULT_WALL_THICKNESS: f32 = 0.1;
/// Standard-Wandhöhe in Metern.
pub const DEFAULT_WALL_HEIGHT: f32 = 2.4;

/// Optionale Parameter für `create_cube`. Nicht gesetzte Felder erhalten Standardwerte.
#[derive(Debug, Clone, Default)]
pub struct CubeParams {
    pub id: Option<ObjectId>,
    pub name: Option<String>,
    pub dims: Option<CubeDims>,
    pub position: Option<Vec3>,
    pub rotation: Option<Vec3>,
    pub scale: Option<Vec3>,
}

/// Optionale Parameter für `create_wall_from_two_points`.
#[derive(Debug, Clone, Default)]
pub struct WallParams {
    pub id: Option<ObjectId>,
    pub name: Option<String>,
    pub thickness: Option<f32>,
    pub height: Option<f32>,
}

/// Erstellt einen Quader. Ohne explizite Position steht er mit der Unterseite auf y = 0.
pub fn create_cube(params: CubeParams) -> SceneObject {
    let dims = params.dims.unwrap_or(CubeDims {
        width: 1.0,
        height: 1.0,
        depth: 1.0,
    });
    let dims = CubeDims::new(dims.width, dims.height, dims.depth);

    SceneObject {
        id: params.id.unwrap_or_default(),
        name: Some(params.name.unwrap_or_else(|| "Cube".to_string())),
        transform: Transform {
            position: params
                .position
                .unwrap_or(Vec3::new(0.0, dims.height / 2.0, 0.0)),
            rotation: params.rotation.unwrap_or(Vec3::ZERO),
            scale: params.scale.unwrap_or(Vec3::ONE),
        },
        kind: ObjectKind::Cube { dims },
    }
}

/// Erstellt eine Wand zwischen zwei Bodenpunkten (X/Z, Y wird ignoriert).
///
/// `rotation.y = atan2(dx, dz)` dreht die lokale Z-Achse (Wandlänge) auf die
/// Verbindungslinie; die Position ist der Mittelpunkt auf halber Wandhöhe.
pub fn create_wall_from_two_points(p1: Vec3, p2: Vec3, params: WallParams) -> SceneObject {
    let thickness = sanitize_dimension(params.thickness.unwrap_or(DEFAULT_WALL_THICKNESS));
    let height = sanitize_dimension(params.height.unwrap_or(DEFAULT_WALL_HEIGHT));

    let dx = p2.x - p1.x;
    let dz = p2.z - p1.z;
    let length = (dx * dx + dz * dz).sqrt();
    let angle = dx.atan2(dz);

    SceneObject {
        id: params.id.unwrap_or_default(),
        name: Some(params.name.unwrap_or_else(|| "Wall".to_string())),
        transform: Transform {
            position: Vec3::new((p1.x + p2.x) / 2.0, height / 2.0, (p1.z + p2.z) / 2.0),
            rotation: Vec3::new(0.0, angle, 0.0),
            scale: Vec3::ONE,
        },
        kind: ObjectKind::Wall {
            wall: WallDims::new(thickness, height, length),
        },
    }
}
