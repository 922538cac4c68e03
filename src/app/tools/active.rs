//! Aktiver Linien-Modus als Enum mit statischem Dispatch.

use super::common::{ModeBase, OverlayGeometry};
use super::{
    CircleMode, DragHandle, LineModeTool, PointParams, SimpleCurveMode, StraightLineMode,
};
use crate::core::{PointData, TerrainSampler};
use crate::shared::LineMode;
use glam::Vec3;

/// Ruft dieselbe Methode auf der jeweiligen Variante auf.
macro_rules! dispatch {
    ($self:expr, $mode:ident => $call:expr) => {
        match $self {
            ActiveMode::Straight($mode) => $call,
            ActiveMode::SimpleCurve($mode) => $call,
            ActiveMode::Circle($mode) => $call,
        }
    };
}

/// Einer der drei Linien-Modi.
#[derive(Debug, Clone)]
pub enum ActiveMode {
    Straight(StraightLineMode),
    SimpleCurve(SimpleCurveMode),
    Circle(CircleMode),
}

impl Default for ActiveMode {
    fn default() -> Self {
        Self::new(LineMode::default())
    }
}

impl ActiveMode {
    /// Neuer Modus ohne Kontrollpunkte.
    pub fn new(mode: LineMode) -> Self {
        Self::from_base(mode, &ModeBase::new())
    }

    fn from_base(mode: LineMode, base: &ModeBase) -> Self {
        match mode {
            LineMode::Straight => Self::Straight(StraightLineMode::from_base(base)),
            LineMode::SimpleCurve => Self::SimpleCurve(SimpleCurveMode::from_base(base)),
            LineMode::Circle => Self::Circle(CircleMode::from_base(base)),
        }
    }

    pub fn line_mode(&self) -> LineMode {
        match self {
            Self::Straight(_) => LineMode::Straight,
            Self::SimpleCurve(_) => LineMode::SimpleCurve,
            Self::Circle(_) => LineMode::Circle,
        }
    }

    /// Wechselt den Modus; nur der Startpunkt wird übernommen.
    pub fn switch_to(&self, mode: LineMode) -> Self {
        Self::from_base(mode, self.base())
    }
}

impl LineModeTool for ActiveMode {
    fn base(&self) -> &ModeBase {
        dispatch!(self, m => m.base())
    }

    fn has_start(&self) -> bool {
        dispatch!(self, m => m.has_start())
    }

    fn has_all_points(&self) -> bool {
        dispatch!(self, m => m.has_all_points())
    }

    fn handle_click(&mut self, position: Vec3) -> bool {
        dispatch!(self, m => m.handle_click(position))
    }

    fn items_placed(&mut self, position: Vec3) {
        dispatch!(self, m => m.items_placed(position));
    }

    fn reset(&mut self) {
        dispatch!(self, m => m.reset());
    }

    fn calculate_points(
        &mut self,
        current: Vec3,
        params: &PointParams,
        terrain: &dyn TerrainSampler,
    ) -> Vec<PointData> {
        dispatch!(self, m => m.calculate_points(current, params, terrain))
    }

    fn overlay(&self, current: Vec3) -> OverlayGeometry {
        dispatch!(self, m => m.overlay(current))
    }

    fn point_overlays(&self) -> Vec<Vec3> {
        dispatch!(self, m => m.point_overlays())
    }

    fn check_drag_hit(&self, position: Vec3) -> Option<DragHandle> {
        dispatch!(self, m => m.check_drag_hit(position))
    }

    fn handle_drag(&mut self, handle: DragHandle, position: Vec3) {
        dispatch!(self, m => m.handle_drag(handle, position));
    }
}
