//! Drag-Logik für den Einfache-Kurve-Modus.

use super::super::DragHandle;
use super::state::SimpleCurveMode;
use glam::Vec3;

/// Gibt alle greifbaren Punkte mit ihrem Handle zurück.
pub(crate) fn drag_targets(mode: &SimpleCurveMode) -> Vec<(DragHandle, Vec3)> {
    let mut targets = mode.base.handles();
    if mode.base.valid_start && mode.valid_elbow {
        targets.push((DragHandle::Elbow, mode.elbow_point));
    }
    targets
}

/// Verschiebt den gegriffenen Punkt.
///
/// Ein gezogener Ellbogen bleibt frei (keine Projektion auf die Vorgänger-Tangente).
pub(crate) fn on_drag_update(mode: &mut SimpleCurveMode, handle: DragHandle, position: Vec3) {
    match handle {
        DragHandle::Elbow if mode.valid_elbow => mode.elbow_point = position,
        DragHandle::Elbow => {}
        other => mode.base.handle_drag(other, position),
    }
}
