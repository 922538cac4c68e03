//! Berechneter Platzierungspunkt.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Ein Platzierungspunkt: Weltposition und Ausrichtung.
///
/// Wird bei jeder Cursor- oder Einstellungsänderung neu erzeugt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointData {
    pub position: Vec3,
    pub rotation: Quat,
}

impl PointData {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }
}
