//! Punktberechnung auf dem Kreisumfang.

use super::super::common::Jitter;
use super::super::PointParams;
use crate::core::math::yaw_rotation;
use crate::core::{PointData, TerrainSampler};
use crate::shared::{SpacingMode, MAX_POINTS_PER_LINE};
use glam::Vec3;
use std::f32::consts::TAU;

/// Verteilt Objekte auf dem Kreis um `center` durch `current`.
///
/// Radius ist die volle 3D-Distanz. Anzahl: FullLength rundet
/// `Umfang / spacing`, sonst wird abgerundet. Weniger als ein Objekt ergibt
/// eine leere Liste.
pub fn compute_circle_points(
    center: Vec3,
    current: Vec3,
    params: &PointParams,
    terrain: &dyn TerrainSampler,
) -> Vec<PointData> {
    let difference = current - center;
    let radius = difference.length();
    if !radius.is_finite() || radius < f32::EPSILON || !params.spacing_is_valid() {
        return Vec::new();
    }

    let circumference = TAU * radius;
    let ratio = circumference / params.spacing;
    let count = match params.spacing_mode {
        SpacingMode::FullLength => ratio.round(),
        _ => ratio.floor(),
    };
    if !count.is_finite() || count < 1.0 {
        return Vec::new();
    }
    let count = (count as usize).min(MAX_POINTS_PER_LINE);

    let start_angle = difference.z.atan2(difference.x);
    let angle_step = TAU / count as f32;
    let base_yaw = if params.is_fence() {
        0.0
    } else {
        (params.rotation as f32).to_radians()
    };
    let mut jitter = Jitter::new(params, circumference);

    (0..count)
        .map(|i| {
            let bearing = start_angle + i as f32 * angle_step;
            let angle = bearing + jitter.along() * TAU / circumference;
            let distance = radius + jitter.lateral();
            let mut position =
                center + Vec3::new(angle.cos() * distance, 0.0, angle.sin() * distance);
            position.y = terrain.sample_height(position.x, position.z);
            // Ausrichtung folgt der unverrauschten Peilung
            PointData::new(position, yaw_rotation(base_yaw - bearing))
        })
        .collect()
}
