//! Linien-Modi für die Platzierung von Objekten entlang von Geraden, Kurven und Kreisen.
//!
//! Jeder Modus implementiert den `LineModeTool`-Trait. Der aktive Modus wird als
//! `ActiveMode`-Enum gehalten; beim Wechsel wandert der Startpunkt mit.
//! Modi erzeugen reine Daten (`PointData`, `OverlayGeometry`), die Platzierung
//! erfolgt zentral im Controller.

/// Aktiver Modus als Enum mit statischem Dispatch.
mod active;
/// Kreis um einen Mittelpunkt.
pub mod circle;
/// Gemeinsamer Kontrollpunkt-Zustand, Abstands-Hilfen und Overlay-Geometrie.
pub mod common;
/// Einfache Kurve über Start, Ellbogen und Ende.
pub mod curve;
/// LineModeTool-Trait: Schnittstelle für alle Linien-Modi.
mod line_mode;
/// Gerade Linie zwischen zwei Punkten.
pub mod straight_line;

pub use active::ActiveMode;
pub use circle::CircleMode;
pub use curve::SimpleCurveMode;
pub use line_mode::LineModeTool;
pub use straight_line::StraightLineMode;

use crate::core::math::yaw_rotation;
use crate::core::Bounds1;
use crate::shared::{SpacingMode, DEFAULT_SPACING};
use glam::Quat;

// ── Typen ────────────────────────────────────────────────────────

/// Eingaben der Punktberechnung, gebündelt für alle Modi.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointParams {
    pub spacing_mode: SpacingMode,
    /// Effektiver Abstand (im Zaun-Modus: Länge des Objekts)
    pub spacing: f32,
    /// Maximaler Versatz entlang der Linie
    pub random_spacing: f32,
    /// Maximaler seitlicher Versatz
    pub random_offset: f32,
    /// Feste Rotation in Grad (außerhalb des Zaun-Modus)
    pub rotation: i32,
    /// Ausdehnung des Objekts entlang seiner lokalen Z-Achse
    pub z_bounds: Bounds1,
}

impl Default for PointParams {
    fn default() -> Self {
        Self {
            spacing_mode: SpacingMode::Manual,
            spacing: DEFAULT_SPACING,
            random_spacing: 0.0,
            random_offset: 0.0,
            rotation: 0,
            z_bounds: Bounds1::default(),
        }
    }
}

impl PointParams {
    pub fn is_fence(&self) -> bool {
        self.spacing_mode == SpacingMode::FenceMode
    }

    /// Abstand positiv und endlich?
    pub fn spacing_is_valid(&self) -> bool {
        self.spacing.is_finite() && self.spacing > 0.0
    }

    /// Feste Gier-Rotation aus `rotation` (Grad).
    pub fn fixed_rotation(&self) -> Quat {
        yaw_rotation((self.rotation as f32).to_radians())
    }
}

/// Greifbarer Kontrollpunkt eines Modus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragHandle {
    /// Startpunkt bzw. Kreismittelpunkt
    Start,
    /// Ellbogen der einfachen Kurve
    Elbow,
    /// Endpunkt
    End,
}
