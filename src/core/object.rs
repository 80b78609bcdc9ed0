//! Szenen-Objekte: IDs, Transformationen, Varianten (Cube/Wall) und Teil-Patches.

use super::geometry::{is_finite_vec3, sanitize_dimension};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Eindeutige, unveränderliche Objekt-ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(Uuid);

impl ObjectId {
    /// Erzeugt eine frische, zufällige ID (UUID v4).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Deterministische ID, z.B. für Tests und Replays.
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Position, Rotation (Radiant, Euler XYZ) und Skalierung eines Objekts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Komponentenweiser Vergleich mit Toleranz.
    pub fn abs_diff_eq(&self, other: &Transform, epsilon: f32) -> bool {
        self.position.abs_diff_eq(other.position, epsilon)
            && self.rotation.abs_diff_eq(other.rotation, epsilon)
            && self.scale.abs_diff_eq(other.scale, epsilon)
    }
}

/// Abmessungen eines Quaders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeDims {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl CubeDims {
    /// Erstellt bereinigte Abmessungen (jede Kante ≥ `MIN_DIMENSION`).
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width: sanitize_dimension(width),
            height: sanitize_dimension(height),
            depth: sanitize_dimension(depth),
        }
    }
}

/// Abmessungen einer Wand. Die Länge verläuft entlang der lokalen Z-Achse der Geometrie.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallDims {
    pub thickness: f32,
    pub height: f32,
    pub length: f32,
}

impl WallDims {
    /// Erstellt bereinigte Abmessungen (jede Kante ≥ `MIN_DIMENSION`).
    pub fn new(thickness: f32, height: f32, length: f32) -> Self {
        Self {
            thickness: sanitize_dimension(thickness),
            height: sanitize_dimension(height),
            length: sanitize_dimension(length),
        }
    }
}

/// Objekt-Variante mit formgebenden Abmessungen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectKind {
    Cube { dims: CubeDims },
    Wall { wall: WallDims },
}

/// Platzierbares Objekt der Szene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: ObjectId,
    #[serde(default)]
    pub name: Option<String>,
    pub transform: Transform,
    pub kind: ObjectKind,
}

impl SceneObject {
    /// Ausdehnung der Render-Geometrie (Box-Kanten in lokalen Achsen X/Y/Z).
    pub fn box_size(&self) -> Vec3 {
        match self.kind {
            ObjectKind::Cube { dims } => Vec3::new(dims.width, dims.height, dims.depth),
            ObjectKind::Wall { wall } => Vec3::new(wall.thickness, wall.height, wall.length),
        }
    }

    /// Kurzbezeichnung der Variante für UI und Logs.
    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            ObjectKind::Cube { .. } => "Cube",
            ObjectKind::Wall { .. } => "Wall",
        }
    }

    /// Anzeigename: expliziter Name oder Variantenbezeichnung.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.kind_label())
    }
}

/// Teil-Patch für Abmessungen. Nicht passende Felder werden ignoriert
/// (`width`/`depth` nur Cube, `thickness`/`length` nur Wall, `height` beide).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimsPatch {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub depth: Option<f32>,
    pub thickness: Option<f32>,
    pub length: Option<f32>,
}

/// Feldweiser Teil-Patch für `update_object`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectPatch {
    pub name: Option<String>,
    pub position: Option<Vec3>,
    pub rotation: Option<Vec3>,
    pub scale: Option<Vec3>,
    pub dims: Option<DimsPatch>,
}

impl ObjectPatch {
    /// Patch mit vollständiger Transformation (Gizmo-Rückkanal).
    pub fn from_transform(transform: Transform) -> Self {
        Self {
            position: Some(transform.position),
            rotation: Some(transform.rotation),
            scale: Some(transform.scale),
            ..Self::default()
        }
    }

    /// Nur Position.
    pub fn position(position: Vec3) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// Gibt `true` zurück, wenn der Patch kein Feld setzt.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Wendet den Patch auf ein Objekt an.
    ///
    /// Nicht-endliche Vektoren werden verworfen, Abmessungen auf
    /// `MIN_DIMENSION` geklemmt. Gibt `true` zurück, wenn sich etwas geändert hat.
    pub fn apply_to(&self, object: &mut SceneObject) -> bool {
        let before = object.clone();

        if let Some(name) = &self.name {
            object.name = Some(name.clone());
        }
        if let Some(position) = self.position.filter(|v| is_finite_vec3(*v)) {
            object.transform.position = position;
        }
        if let Some(rotation) = self.rotation.filter(|v| is_finite_vec3(*v)) {
            object.transform.rotation = rotation;
        }
        if let Some(scale) = self.scale.filter(|v| is_finite_vec3(*v)) {
            object.transform.scale = scale;
        }
        if let Some(dims) = self.dims {
            apply_dims(&mut object.kind, dims);
        }

        *object != before
    }
}

fn apply_dims(kind: &mut ObjectKind, patch: DimsPatch) {
    match kind {
        ObjectKind::Cube { dims } => {
            if let Some(v) = patch.width {
                dims.width = sanitize_dimension(v);
            }
            if let Some(v) = patch.height {
                dims.height = sanitize_dimension(v);
            }
            if let Some(v) = patch.depth {
                dims.depth = sanitize_dimension(v);
            }
        }
        ObjectKind::Wall { wall } => {
            if let Some(v) = patch.thickness {
                wall.thickness = sanitize_dimension(v);
            }
            if let Some(v) = patch.height {
                wall.height = sanitize_dimension(v);
            }
            if let Some(v) = patch.length {
                wall.length = sanitize_dimension(v);
            }
        }
    }
}
