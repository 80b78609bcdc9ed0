//! Reine Geometrie-Hilfsfunktionen: Grid-Snapping, Winkelumrechnung, Maß-Bereinigung.

use glam::Vec3;

/// Standard-Rasterweite in Metern.
pub const GRID_STEP: f32 = 0.1;
/// Kleinste zulässige Objekt-Abmessung in Metern.
pub const MIN_DIMENSION: f32 = 0.01;

/// Rundet `value` auf das nächste Vielfache von `step`.
///
/// Bei `step <= 0` oder nicht-endlichem `step` bzw. `value` wird der Wert
/// unverändert zurückgegeben. Halbe Schritte runden weg von Null.
pub fn snap_to_grid(value: f32, step: f32) -> f32 {
    if !value.is_finite() || !step.is_finite() || step <= 0.0 {
        return value;
    }
    (value / step).round() * step
}

/// Snappt alle drei Komponenten eines Vektors.
pub fn snap_vec3(v: Vec3, step: f32) -> Vec3 {
    Vec3::new(
        snap_to_grid(v.x, step),
        snap_to_grid(v.y, step),
        snap_to_grid(v.z, step),
    )
}

/// Grad → Bogenmaß.
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * std::f32::consts::PI / 180.0
}

/// Bogenmaß → Grad.
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * 180.0 / std::f32::consts::PI
}

/// Klemmt eine Abmessung auf `MIN_DIMENSION` (auch NaN/∞).
pub fn sanitize_dimension(value: f32) -> f32 {
    if value.is_finite() && value >= MIN_DIMENSION {
        value
    } else {
        MIN_DIMENSION
    }
}

/// Gibt `true` zurück, wenn alle Komponenten endlich sind.
pub fn is_finite_vec3(v: Vec3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}
