//! LineModeTool-Implementierung für den Kreis-Modus.

use super::super::common::{base::nearest_handle, ModeBase, OverlayGeometry};
use super::super::{DragHandle, LineModeTool, PointParams};
use super::geometry::compute_circle_points;
use super::state::CircleMode;
use crate::core::{PointData, TerrainSampler};
use glam::Vec3;

impl LineModeTool for CircleMode {
    fn base(&self) -> &ModeBase {
        &self.base
    }

    fn handle_click(&mut self, position: Vec3) -> bool {
        self.base.handle_click(position)
    }

    /// Mittelpunkt bleibt stehen.
    fn items_placed(&mut self, _position: Vec3) {}

    fn reset(&mut self) {
        self.base.reset();
    }

    fn calculate_points(
        &mut self,
        current: Vec3,
        params: &PointParams,
        terrain: &dyn TerrainSampler,
    ) -> Vec<PointData> {
        if !self.base.valid_start {
            return Vec::new();
        }
        self.base.end_pos = Some(current);
        compute_circle_points(self.base.start_pos, current, params, terrain)
    }

    fn overlay(&self, current: Vec3) -> OverlayGeometry {
        self.base.overlay(current)
    }

    fn point_overlays(&self) -> Vec<Vec3> {
        self.base.handles().into_iter().map(|(_, pos)| pos).collect()
    }

    fn check_drag_hit(&self, position: Vec3) -> Option<DragHandle> {
        nearest_handle(self.base.handles(), position)
    }

    fn handle_drag(&mut self, handle: DragHandle, position: Vec3) {
        self.base.handle_drag(handle, position);
    }
}
