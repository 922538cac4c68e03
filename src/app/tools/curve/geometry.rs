//! Punktberechnung entlang der Bézier-Kurve (Bogenlänge in XZ).

use super::super::common::{full_length_count, Jitter};
use super::super::PointParams;
use crate::core::arc_length::{arc_length_xz, speed_xz, step, step_reverse};
use crate::core::math::{heading_yaw, lateral_normal, yaw_rotation};
use crate::core::{Bezier4x3, PointData, TerrainSampler};
use crate::shared::options::FENCE_TOLERANCE;
use crate::shared::{SpacingMode, MAX_POINTS_PER_LINE};

/// Berechnet die Platzierungspunkte entlang `curve`.
///
/// Kurven mit verschwindender Bogenlänge und ungültige Abstände ergeben eine
/// leere Liste. Die Schrittschleifen brechen ab, sobald `t` nicht mehr wächst.
pub fn compute_curve_points(
    curve: &Bezier4x3,
    params: &PointParams,
    terrain: &dyn TerrainSampler,
) -> Vec<PointData> {
    let total = arc_length_xz(curve, 0.0, 1.0);
    if !total.is_finite() || total < f32::EPSILON || !params.spacing_is_valid() {
        return Vec::new();
    }

    let mut sampler = CurveSampler {
        curve,
        terrain,
        jitter: Jitter::new(params, total),
        params,
        points: Vec::new(),
    };
    match params.spacing_mode {
        SpacingMode::FenceMode => sampler.fence(),
        SpacingMode::FullLength => sampler.full_length(total),
        SpacingMode::Manual => sampler.manual(),
    }
    sampler.points
}

struct CurveSampler<'a> {
    curve: &'a Bezier4x3,
    terrain: &'a dyn TerrainSampler,
    params: &'a PointParams,
    jitter: Jitter,
    points: Vec<PointData>,
}

impl CurveSampler<'_> {
    fn is_full(&self) -> bool {
        self.points.len() >= MAX_POINTS_PER_LINE
    }

    /// Punkt bei `t`, mit Zufalls-Versatz entlang (über Bogenlänge) und quer zur Kurve.
    fn push(&mut self, t: f32) {
        let along = self.jitter.along();
        let t = if along != 0.0 {
            step(self.curve, t, along)
        } else {
            t
        };
        let tangent = self.curve.tangent(t);
        let mut position = self.curve.position(t);

        let lateral = self.jitter.lateral();
        if lateral != 0.0 {
            position += lateral_normal(tangent) * lateral;
        }
        position.y = self.terrain.sample_height(position.x, position.z);

        let rotation = if self.params.is_fence() {
            yaw_rotation(heading_yaw(tangent))
        } else {
            self.params.fixed_rotation()
        };
        self.points.push(PointData::new(position, rotation));
    }

    fn manual(&mut self) {
        let mut t = 0.0;
        while t < 1.0 && !self.is_full() {
            self.push(t);
            let next = step(self.curve, t, self.params.spacing);
            if next.is_nan() || next <= t {
                break;
            }
            t = next;
        }
    }

    /// Abstand auf `total / n` angepasst; erster und letzter Punkt liegen auf den Enden.
    fn full_length(&mut self, total: f32) {
        let Some(count) = full_length_count(total, self.params.spacing) else {
            return;
        };
        let adjusted = total / count as f32;
        let mut t = 0.0;
        for _ in 0..count.min(MAX_POINTS_PER_LINE - 1) {
            self.push(t);
            t = step(self.curve, t, adjusted);
        }
        self.push(1.0);
    }

    /// Zaun: erstes Objekt bündig am Start, letztes bündig am Ende.
    fn fence(&mut self) {
        let z_bounds = self.params.z_bounds;
        let mut t = step(self.curve, 0.0, -z_bounds.min);
        let end_t = step_reverse(self.curve, z_bounds.max);
        let tolerance = FENCE_TOLERANCE / speed_xz(self.curve, end_t).max(f32::EPSILON);
        while t <= end_t + tolerance && !self.is_full() {
            self.push(t);
            let next = step(self.curve, t, self.params.spacing);
            if next.is_nan() || next <= t {
                break;
            }
            t = next;
        }
    }
}
