//! Kontrollpunkt-Zustand, den alle Modi teilen.

use super::super::DragHandle;
use super::overlay::OverlayGeometry;
use crate::core::math::distance_xz;
use crate::shared::DRAG_HIT_RADIUS;
use glam::Vec3;

/// Startpunkt und letzter Endpunkt einer Linie.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ModeBase {
    /// Wurde ein Startpunkt gesetzt?
    pub valid_start: bool,
    /// Startpunkt (bei Kreis: Mittelpunkt)
    pub start_pos: Vec3,
    /// Zuletzt berechnete Cursor- bzw. End-Position
    pub end_pos: Option<Vec3>,
}

impl ModeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Übernahme beim Moduswechsel: nur der Startpunkt wandert mit.
    pub fn carry_over(previous: &ModeBase) -> Self {
        Self {
            valid_start: previous.valid_start,
            start_pos: previous.start_pos,
            end_pos: None,
        }
    }

    /// Erster Klick setzt den Start, jeder weitere löst die Platzierung aus.
    pub fn handle_click(&mut self, position: Vec3) -> bool {
        if !self.valid_start {
            self.valid_start = true;
            self.start_pos = position;
            return false;
        }
        self.end_pos = Some(position);
        true
    }

    /// Neue Linie beginnt am bisherigen Endpunkt.
    pub fn items_placed(&mut self, position: Vec3) {
        self.start_pos = position;
    }

    pub fn reset(&mut self) {
        self.valid_start = false;
        self.end_pos = None;
    }

    /// Gestrichelte Linie vom Start zum Cursor.
    pub fn overlay(&self, current: Vec3) -> OverlayGeometry {
        let mut overlay = OverlayGeometry::default();
        if self.valid_start {
            overlay.add_dashed_line(self.start_pos, current);
        }
        overlay
    }

    /// Greifbare Punkte: Start und Ende, sofern vorhanden.
    pub fn handles(&self) -> Vec<(DragHandle, Vec3)> {
        let mut handles = Vec::with_capacity(2);
        if self.valid_start {
            handles.push((DragHandle::Start, self.start_pos));
            if let Some(end) = self.end_pos {
                handles.push((DragHandle::End, end));
            }
        }
        handles
    }

    /// Verschiebt Start oder Ende; andere Handles werden ignoriert.
    pub fn handle_drag(&mut self, handle: DragHandle, position: Vec3) {
        match handle {
            DragHandle::Start => self.start_pos = position,
            DragHandle::End => self.end_pos = Some(position),
            DragHandle::Elbow => {}
        }
    }
}

/// Wählt das nächstgelegene Handle innerhalb von [`DRAG_HIT_RADIUS`] (XZ).
pub fn nearest_handle(
    handles: impl IntoIterator<Item = (DragHandle, Vec3)>,
    position: Vec3,
) -> Option<DragHandle> {
    handles
        .into_iter()
        .map(|(handle, pos)| (handle, distance_xz(pos, position)))
        .filter(|(_, dist)| *dist <= DRAG_HIT_RADIUS)
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(handle, _)| handle)
}
