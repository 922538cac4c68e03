//! Punktberechnung entlang einer geraden Linie.

use super::super::common::{full_length_count, Jitter};
use super::super::PointParams;
use crate::core::math::{heading_yaw, lateral_normal, yaw_rotation};
use crate::core::{PointData, TerrainSampler};
use crate::shared::options::FENCE_TOLERANCE;
use crate::shared::{SpacingMode, MAX_POINTS_PER_LINE};
use glam::{Quat, Vec3};

/// Berechnet die Platzierungspunkte von `start` bis `current`.
///
/// Länge ist die volle 3D-Distanz; Höhen werden danach aus dem Terrain gelesen.
/// Entartete Linien oder ungültige Abstände ergeben eine leere Liste.
pub fn compute_line_points(
    start: Vec3,
    current: Vec3,
    params: &PointParams,
    terrain: &dyn TerrainSampler,
) -> Vec<PointData> {
    let difference = current - start;
    let length = difference.length();
    if !length.is_finite() || length < f32::EPSILON || !params.spacing_is_valid() {
        return Vec::new();
    }

    let line = Line {
        start,
        direction: difference / length,
        length,
        terrain,
    };
    match params.spacing_mode {
        SpacingMode::FenceMode => line.fence_points(params),
        SpacingMode::FullLength => line.full_length_points(params),
        SpacingMode::Manual => line.manual_points(params),
    }
}

struct Line<'a> {
    start: Vec3,
    direction: Vec3,
    length: f32,
    terrain: &'a dyn TerrainSampler,
}

impl Line<'_> {
    fn at_distance(&self, distance: f32) -> Vec3 {
        self.start + self.direction * distance
    }

    fn grounded(&self, mut position: Vec3) -> Vec3 {
        position.y = self.terrain.sample_height(position.x, position.z);
        position
    }

    /// Punkt mit Zufalls-Versatz entlang und quer zur Linie.
    fn jittered(&self, distance: f32, jitter: &mut Jitter) -> Vec3 {
        let along = jitter.along();
        let lateral = jitter.lateral();
        let normal = lateral_normal(self.direction);
        self.grounded(self.at_distance(distance + along) + normal * lateral)
    }

    fn manual_points(&self, params: &PointParams) -> Vec<PointData> {
        let rotation = params.fixed_rotation();
        let mut jitter = Jitter::new(params, self.length);
        let mut points = Vec::new();
        let mut distance = 0.0;
        while distance < self.length && points.len() < MAX_POINTS_PER_LINE {
            points.push(PointData::new(
                self.jittered(distance, &mut jitter),
                rotation,
            ));
            distance += params.spacing;
        }
        points
    }

    fn full_length_points(&self, params: &PointParams) -> Vec<PointData> {
        let Some(count) = full_length_count(self.length, params.spacing) else {
            return Vec::new();
        };
        let count = count.min(MAX_POINTS_PER_LINE - 1);
        let rotation = params.fixed_rotation();
        let mut jitter = Jitter::new(params, self.length);
        let step = self.length / count as f32;
        let mut points: Vec<PointData> = (0..count)
            .map(|i| PointData::new(self.jittered(i as f32 * step, &mut jitter), rotation))
            .collect();
        points.push(PointData::new(
            self.jittered(self.length, &mut jitter),
            rotation,
        ));
        points
    }

    /// Zaun: Objekte stoßen bündig aneinander, ausgerichtet entlang der Linie.
    fn fence_points(&self, params: &PointParams) -> Vec<PointData> {
        let rotation: Quat = yaw_rotation(heading_yaw(self.direction));
        let end = self.length - params.z_bounds.max;
        let mut points = Vec::new();
        let mut distance = -params.z_bounds.min;
        while distance <= end + FENCE_TOLERANCE && points.len() < MAX_POINTS_PER_LINE {
            points.push(PointData::new(
                self.grounded(self.at_distance(distance)),
                rotation,
            ));
            distance += params.spacing;
        }
        points
    }
}
