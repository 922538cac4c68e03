//! LineModeTool-Implementierung für den Einfache-Kurve-Modus.

use super::super::common::overlay::angle_indicator;
use super::super::common::{base::nearest_handle, ModeBase, OverlayGeometry};
use super::super::straight_line::compute_line_points;
use super::super::{DragHandle, LineModeTool, PointParams};
use super::drag::{drag_targets, on_drag_update};
use super::geometry::compute_curve_points;
use super::state::SimpleCurveMode;
use crate::core::{PointData, Segment3, TerrainSampler};
use crate::shared::options::{ANGLE_INDICATOR_LENGTH, ANGLE_INDICATOR_WIDTH};
use glam::Vec3;

impl LineModeTool for SimpleCurveMode {
    fn base(&self) -> &ModeBase {
        &self.base
    }

    fn has_all_points(&self) -> bool {
        self.base.valid_start && self.valid_elbow
    }

    /// Start → Ellbogen → Platzierung.
    fn handle_click(&mut self, position: Vec3) -> bool {
        if !self.base.valid_start {
            return self.base.handle_click(position);
        }
        if !self.valid_elbow {
            self.elbow_point = self.constrained_elbow(position);
            self.valid_elbow = true;
            log::debug!("Ellbogen gesetzt: {:?}", self.elbow_point);
            return false;
        }
        self.base.end_pos = Some(position);
        true
    }

    fn items_placed(&mut self, position: Vec3) {
        self.previous_elbow_point = self.elbow_point;
        self.valid_previous_elbow = self.valid_elbow;
        self.valid_elbow = false;
        self.base.items_placed(position);
    }

    /// Erst der Ellbogen, beim nächsten Aufruf der Start samt Vorgänger-Ellbogen.
    fn reset(&mut self) {
        if self.valid_elbow {
            self.valid_elbow = false;
            return;
        }
        self.base.reset();
        self.valid_previous_elbow = false;
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
        if !self.valid_elbow {
            return compute_line_points(self.base.start_pos, current, params, terrain);
        }
        compute_curve_points(&self.curve_to(current), params, terrain)
    }

    fn overlay(&self, current: Vec3) -> OverlayGeometry {
        if !(self.base.valid_start && self.valid_elbow) {
            return self.base.overlay(current);
        }

        let line1 = Segment3::new(self.base.start_pos, self.elbow_point);
        let line2 = Segment3::new(self.elbow_point, current);
        let mut overlay = OverlayGeometry::default();
        overlay.add_dashed_line(line1.a, line1.b);
        overlay.add_dashed_line(line2.a, line2.b);
        overlay.angle = angle_indicator(line1, line2, ANGLE_INDICATOR_WIDTH, ANGLE_INDICATOR_LENGTH);
        overlay
    }

    fn point_overlays(&self) -> Vec<Vec3> {
        drag_targets(self).into_iter().map(|(_, pos)| pos).collect()
    }

    fn check_drag_hit(&self, position: Vec3) -> Option<DragHandle> {
        nearest_handle(drag_targets(self), position)
    }

    fn handle_drag(&mut self, handle: DragHandle, position: Vec3) {
        on_drag_update(self, handle, position);
    }
}
