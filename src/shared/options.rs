//! Zentrale Konfiguration für den Szenen-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{DEFAULT_WALL_HEIGHT, DEFAULT_WALL_THICKNESS, GRID_STEP};
use serde::{Deserialize, Serialize};

// ── Snapping ────────────────────────────────────────────────────────

/// Standard-Rotationsraster in Grad.
pub const SNAP_ROTATE_DEG: f32 = 15.0;
/// Standard-Skalierungsraster.
pub const SNAP_SCALE_STEP: f32 = 0.1;

// ── Objekte ─────────────────────────────────────────────────────────

/// Kantenlänge neu erzeugter Cubes in Metern.
pub const CUBE_SIZE: f32 = 1.0;

// ── Render-Sync ─────────────────────────────────────────────────────

/// Toleranz, ab der geänderte Abmessungen einen Geometrie-Neuaufbau auslösen.
pub const GEOMETRY_EPSILON: f32 = 1e-6;

/// Raster-Einstellungen für Verschieben, Drehen und Skalieren.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    /// Snapping aktiv
    pub enabled: bool,
    /// Verschiebe-Raster in Metern
    pub translate: f32,
    /// Rotations-Raster in Grad
    pub rotate_deg: f32,
    /// Skalierungs-Raster
    pub scale: f32,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            translate: GRID_STEP,
            rotate_deg: SNAP_ROTATE_DEG,
            scale: SNAP_SCALE_STEP,
        }
    }
}

impl SnapSettings {
    /// Effektives Verschiebe-Raster (`0.0` = kein Snapping).
    pub fn translate_step(&self) -> f32 {
        if self.enabled {
            self.translate
        } else {
            0.0
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `scene_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Kantenlänge neuer Cubes
    #[serde(default = "default_cube_size")]
    pub cube_size: f32,
    /// Stärke neuer Wände
    #[serde(default = "default_wall_thickness")]
    pub wall_thickness: f32,
    /// Höhe neuer Wände
    #[serde(default = "default_wall_height")]
    pub wall_height: f32,
    /// Toleranz für Geometrie-Neuaufbau im Render-Sync
    #[serde(default = "default_geometry_epsilon")]
    pub geometry_epsilon: f32,
    /// Maximale Undo-Tiefe (`None` = unbegrenzt)
    #[serde(default)]
    pub history_max_depth: Option<usize>,
    /// Start-Raster für Gizmo und Wand-Werkzeug
    #[serde(default)]
    pub snap: SnapSettings,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            cube_size: CUBE_SIZE,
            wall_thickness: DEFAULT_WALL_THICKNESS,
            wall_height: DEFAULT_WALL_HEIGHT,
            geometry_epsilon: GEOMETRY_EPSILON,
            history_max_depth: None,
            snap: SnapSettings::default(),
        }
    }
}

fn default_cube_size() -> f32 {
    CUBE_SIZE
}

fn default_wall_thickness() -> f32 {
    DEFAULT_WALL_THICKNESS
}

fn default_wall_height() -> f32 {
    DEFAULT_WALL_HEIGHT
}

fn default_geometry_epsilon() -> f32 {
    GEOMETRY_EPSILON
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("scene_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("scene_editor.toml")
    }
}
