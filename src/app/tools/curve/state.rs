//! State-Definitionen und Konstruktor für den Einfache-Kurve-Modus.

use super::super::common::ModeBase;
use crate::core::math::xz;
use crate::core::{fit_curve, Bezier4x3, Segment3};
use glam::Vec3;

/// Einfache Kurve über einen Ellbogen-Punkt
#[derive(Debug, Clone, Default)]
pub struct SimpleCurveMode {
    pub(crate) base: ModeBase,
    /// Wurde ein Ellbogen gesetzt?
    pub(crate) valid_elbow: bool,
    pub(crate) elbow_point: Vec3,
    /// Ellbogen der zuletzt platzierten Kurve (für tangentenstetige Fortsetzung)
    pub(crate) valid_previous_elbow: bool,
    pub(crate) previous_elbow_point: Vec3,
}

impl SimpleCurveMode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Übernimmt den Startpunkt eines anderen Modus.
    pub fn from_base(base: &ModeBase) -> Self {
        Self {
            base: ModeBase::carry_over(base),
            ..Self::default()
        }
    }

    /// Kurve von Start über Ellbogen nach `end`.
    pub(crate) fn curve_to(&self, end: Vec3) -> Bezier4x3 {
        fit_curve(
            Segment3::new(self.base.start_pos, self.elbow_point),
            Segment3::new(end, self.elbow_point),
        )
    }

    /// Position für einen neuen Ellbogen-Klick.
    ///
    /// Mit vorherigem Ellbogen wird `position` (XZ) auf die Gerade durch den
    /// vorherigen Ellbogen und den Start projiziert. Fällt diese Gerade zu einem
    /// Punkt zusammen, bleibt `position` unverändert.
    pub(crate) fn constrained_elbow(&self, position: Vec3) -> Vec3 {
        if !self.valid_previous_elbow {
            return position;
        }
        let start = xz(self.base.start_pos);
        let direction = (start - xz(self.previous_elbow_point)).normalize_or_zero();
        if direction == glam::Vec2::ZERO {
            return position;
        }
        let along = (xz(position) - start).dot(direction);
        let projected = start + direction * along;
        Vec3::new(projected.x, position.y, projected.y)
    }
}
