//! Werkzeug-Einstellungen des Controllers (Abstand, Zaun, Zufall, Rotation).
//!
//! Jede Änderung setzt das Dirty-Flag; der Controller liest und löscht es
//! beim nächsten Frame und berechnet die Vorschau neu.

use super::tools::PointParams;
use crate::core::Bounds1;
use crate::shared::options::{MIN_SPACING_MARGIN, SPACING_PRECISION, SPACING_STEP};
use crate::shared::{LineToolOptions, SpacingMode};

/// Aktuelle Einstellungen des Linien-Werkzeugs.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSettings {
    spacing: f32,
    spacing_mode: SpacingMode,
    random_rotation: bool,
    rotation: i32,
    random_spacing: f32,
    random_offset: f32,
    z_bounds: Bounds1,
    dirty: bool,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self::from_options(&LineToolOptions::default())
    }
}

impl ToolSettings {
    /// Übernimmt die gespeicherten Start-Optionen.
    pub fn from_options(options: &LineToolOptions) -> Self {
        let mut settings = Self {
            spacing: options.spacing,
            spacing_mode: options.spacing_mode,
            random_rotation: options.random_rotation,
            rotation: options.rotation,
            random_spacing: options.random_spacing.max(0.0),
            random_offset: options.random_offset.max(0.0),
            z_bounds: Bounds1::default(),
            dirty: true,
        };
        settings.set_spacing(options.spacing);
        settings
    }

    // ── Getter ───────────────────────────────────────────────────

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn spacing_mode(&self) -> SpacingMode {
        self.spacing_mode
    }

    pub fn fence_mode(&self) -> bool {
        self.spacing_mode == SpacingMode::FenceMode
    }

    pub fn random_rotation(&self) -> bool {
        self.random_rotation
    }

    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    pub fn random_spacing(&self) -> f32 {
        self.random_spacing
    }

    pub fn random_offset(&self) -> f32 {
        self.random_offset
    }

    pub fn z_bounds(&self) -> Bounds1 {
        self.z_bounds
    }

    /// Kleinster erlaubter Abstand: größte Ausdehnung plus Sicherheitsabstand.
    pub fn min_spacing(&self) -> f32 {
        self.z_bounds.max_extent() + MIN_SPACING_MARGIN
    }

    /// Abstand für die Punktberechnung: im Zaun-Modus die Objektlänge.
    pub fn effective_spacing(&self) -> f32 {
        if self.fence_mode() {
            self.z_bounds.length()
        } else {
            self.spacing
        }
    }

    /// Bündelt die Eingaben für `LineModeTool::calculate_points`.
    pub fn point_params(&self) -> PointParams {
        PointParams {
            spacing_mode: self.spacing_mode,
            spacing: self.effective_spacing(),
            random_spacing: self.random_spacing,
            random_offset: self.random_offset,
            rotation: self.rotation,
            z_bounds: self.z_bounds,
        }
    }

    // ── Mutatoren ────────────────────────────────────────────────

    /// Setzt den Abstand, mindestens [`Self::min_spacing`], gerundet auf 0.1.
    ///
    /// Nicht-endliche Werte werden ignoriert.
    pub fn set_spacing(&mut self, value: f32) {
        if !value.is_finite() {
            log::warn!("Ungültiger Abstand ignoriert: {}", value);
            return;
        }
        let scale = SPACING_PRECISION.recip();
        self.spacing = (value.max(self.min_spacing()) * scale).round() / scale;
        self.dirty = true;
    }

    pub fn spacing_up(&mut self) {
        self.set_spacing(self.spacing + SPACING_STEP);
    }

    pub fn spacing_down(&mut self) {
        self.set_spacing(self.spacing - SPACING_STEP);
    }

    /// Neue Objekt-Ausdehnung; der Abstand wird neu begrenzt.
    pub fn set_z_bounds(&mut self, z_bounds: Bounds1) {
        self.z_bounds = z_bounds;
        self.set_spacing(self.spacing);
    }

    /// Schaltet zwischen Zaun- und manuellem Modus.
    pub fn set_fence_mode(&mut self, enabled: bool) {
        self.set_spacing_mode(if enabled {
            SpacingMode::FenceMode
        } else {
            SpacingMode::Manual
        });
    }

    pub fn set_spacing_mode(&mut self, mode: SpacingMode) {
        self.spacing_mode = mode;
        self.dirty = true;
    }

    pub fn set_random_rotation(&mut self, enabled: bool) {
        self.random_rotation = enabled;
        self.dirty = true;
    }

    pub fn set_rotation(&mut self, degrees: i32) {
        self.rotation = degrees;
        self.dirty = true;
    }

    pub fn set_random_spacing(&mut self, value: f32) {
        self.random_spacing = value.max(0.0);
        self.dirty = true;
    }

    pub fn set_random_offset(&mut self, value: f32) {
        self.random_offset = value.max(0.0);
        self.dirty = true;
    }

    // ── Dirty-Flag ───────────────────────────────────────────────

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Liest das Dirty-Flag und setzt es zurück.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Aktuelle Einstellungen als speicherbare Optionen.
    pub fn to_options(&self, mode: crate::shared::LineMode) -> LineToolOptions {
        LineToolOptions {
            mode,
            spacing_mode: self.spacing_mode,
            spacing: self.spacing,
            random_rotation: self.random_rotation,
            rotation: self.rotation,
            random_spacing: self.random_spacing,
            random_offset: self.random_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_spacing_rounded_and_clamped() {
        let mut settings = ToolSettings::default();
        settings.set_spacing(12.345);
        assert_abs_diff_eq!(settings.spacing(), 12.3, epsilon = 1e-4);

        settings.set_z_bounds(Bounds1::new(-2.0, 3.0));
        settings.set_spacing(1.0);
        assert_abs_diff_eq!(settings.spacing(), 3.1, epsilon = 1e-4);
    }

    #[test]
    fn test_new_extent_clamps_existing_spacing() {
        let mut settings = ToolSettings::default();
        settings.set_spacing(2.0);
        settings.set_z_bounds(Bounds1::new(-4.0, 1.0));
        assert_abs_diff_eq!(settings.spacing(), 4.1, epsilon = 1e-4);
    }

    #[test]
    fn test_spacing_up_down() {
        let mut settings = ToolSettings::default();
        settings.set_spacing(10.0);
        settings.spacing_up();
        assert_abs_diff_eq!(settings.spacing(), 11.0, epsilon = 1e-4);
        settings.spacing_down();
        settings.spacing_down();
        assert_abs_diff_eq!(settings.spacing(), 9.0, epsilon = 1e-4);
    }

    #[test]
    fn test_effective_spacing_in_fence_mode() {
        let mut settings = ToolSettings::default();
        settings.set_z_bounds(Bounds1::new(-1.5, 2.5));
        settings.set_spacing(10.0);
        assert_eq!(settings.effective_spacing(), 10.0);

        settings.set_fence_mode(true);
        assert!(settings.fence_mode());
        assert_abs_diff_eq!(settings.effective_spacing(), 4.0, epsilon = 1e-6);
        assert_abs_diff_eq!(settings.point_params().spacing, 4.0, epsilon = 1e-6);

        settings.set_fence_mode(false);
        assert_eq!(settings.spacing_mode(), SpacingMode::Manual);
    }

    #[test]
    fn test_dirty_flag_take() {
        let mut settings = ToolSettings::default();
        assert!(settings.take_dirty());
        assert!(!settings.take_dirty());

        settings.set_random_offset(-3.0);
        assert_eq!(settings.random_offset(), 0.0);
        assert!(settings.take_dirty());

        settings.set_spacing(f32::NAN);
        assert!(!settings.is_dirty());
    }

    #[test]
    fn test_options_round_trip() {
        let options = LineToolOptions {
            spacing: 7.0,
            rotation: 45,
            random_rotation: true,
            ..LineToolOptions::default()
        };
        let settings = ToolSettings::from_options(&options);
        assert_eq!(settings.to_options(options.mode), options);
    }
}
