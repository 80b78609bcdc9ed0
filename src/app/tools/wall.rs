//! Zwei-Klick-Zustandsautomat für das Wand-Werkzeug.

use crate::core::{is_finite_vec3, snap_vec3, MIN_DIMENSION};
use glam::Vec3;

/// Ergebnis eines Bodenklicks im Wand-Werkzeug.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WallClick {
    /// Startpunkt gesetzt, wartet auf zweiten Klick
    StartPlaced(Vec3),
    /// Zweiter Punkt zu nah am Start, Klick verworfen
    TooShort,
    /// Bodenpunkt nicht endlich, Klick verworfen
    Invalid,
    /// Wand fertig: Start- und Endpunkt
    Completed { start: Vec3, end: Vec3 },
}

/// Wand-Werkzeug: merkt sich den ersten Bodenpunkt bis zum zweiten Klick.
#[derive(Debug, Clone, Default)]
pub struct WallDrawTool {
    start: Option<Vec3>,
}

impl WallDrawTool {
    /// Erstellt ein Werkzeug ohne Startpunkt.
    pub fn new() -> Self {
        Self { start: None }
    }

    /// Verarbeitet einen Bodenklick. Der Punkt wird mit `snap_step` gerastert
    /// (`0.0` = kein Raster) und auf y = 0 projiziert. Nicht-endliche Punkte
    /// lassen den Zustand unverändert.
    pub fn click(&mut self, ground_point: Vec3, snap_step: f32) -> WallClick {
        let point = snap_vec3(Vec3::new(ground_point.x, 0.0, ground_point.z), snap_step);
        if !is_finite_vec3(point) {
            return WallClick::Invalid;
        }

        match self.start {
            None => {
                self.start = Some(point);
                WallClick::StartPlaced(point)
            }
            Some(start) if start.distance(point) < MIN_DIMENSION => WallClick::TooShort,
            Some(start) => {
                self.start = None;
                WallClick::Completed { start, end: point }
            }
        }
    }

    /// Verwirft einen gesetzten Startpunkt.
    pub fn cancel(&mut self) -> bool {
        self.start.take().is_some()
    }

    /// Gibt `true` zurück, solange auf den zweiten Klick gewartet wird.
    pub fn is_drawing(&self) -> bool {
        self.start.is_some()
    }

    /// Gesetzter Startpunkt (für Vorschau-Overlays).
    pub fn start(&self) -> Option<Vec3> {
        self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn two_clicks_complete_a_wall() {
        let mut tool = WallDrawTool::new();
        assert_eq!(
            tool.click(Vec3::new(0.04, 1.0, 0.0), 0.1),
            WallClick::StartPlaced(Vec3::ZERO)
        );
        assert!(tool.is_drawing());

        let WallClick::Completed { start, end } = tool.click(Vec3::new(2.03, 0.0, 0.0), 0.1)
        else {
            panic!("Wand sollte fertig sein");
        };
        assert_eq!(start, Vec3::ZERO);
        assert_relative_eq!(end.x, 2.0, epsilon = 1e-6);
        assert!(!tool.is_drawing());
    }

    #[test]
    fn second_click_on_start_is_ignored() {
        let mut tool = WallDrawTool::new();
        tool.click(Vec3::new(1.0, 0.0, 1.0), 0.5);
        assert_eq!(tool.click(Vec3::new(1.1, 0.0, 0.9), 0.5), WallClick::TooShort);
        assert!(tool.is_drawing());
    }

    #[test]
    fn non_finite_points_are_rejected_in_both_phases() {
        let mut tool = WallDrawTool::new();
        assert_eq!(
            tool.click(Vec3::new(f32::NAN, 0.0, 1.0), 0.1),
            WallClick::Invalid
        );
        assert!(!tool.is_drawing());

        tool.click(Vec3::ZERO, 0.1);
        assert_eq!(
            tool.click(Vec3::new(f32::INFINITY, 0.0, 1.0), 0.1),
            WallClick::Invalid
        );
        assert_eq!(tool.start(), Some(Vec3::ZERO));
    }

    #[test]
    fn zero_step_keeps_raw_point() {
        let mut tool = WallDrawTool::new();
        tool.click(Vec3::new(0.123, 0.0, 0.456), 0.0);
        assert_eq!(tool.start(), Some(Vec3::new(0.123, 0.0, 0.456)));
    }

    #[test]
    fn cancel_resets_start() {
        let mut tool = WallDrawTool::new();
        assert!(!tool.cancel());
        tool.click(Vec3::ONE, 0.1);
        assert!(tool.cancel());
        assert!(!tool.is_drawing());
    }
}
