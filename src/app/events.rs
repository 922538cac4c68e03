//! Frame-Ein- und Ausgaben des Controllers.
//!
//! Der Host liefert pro Frame ein [`FrameInput`] (Raycast-Treffer und
//! Tasten-Flanken) und setzt das [`FrameOutput`] um: Vorschau-Objekte
//! ersetzen, platzierte Objekte anlegen, Overlay zeichnen.

use super::tools::common::OverlayGeometry;
use super::tree_state::TreeGrowth;
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Drag-Phase des Zeigers in diesem Frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragPhase {
    #[default]
    None,
    /// Maustaste gedrückt: Kontrollpunkt unter dem Cursor greifen
    Begin,
    /// Gegriffenen Punkt mitziehen
    Continue,
    /// Maustaste losgelassen
    End,
}

/// Eingaben eines Frames.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameInput {
    /// Raycast-Treffer auf dem Terrain (`None` wenn kein Treffer)
    pub cursor: Option<Vec3>,
    /// Platzieren / nächster Kontrollpunkt
    pub apply: bool,
    /// Wie `apply`, aber nach der Platzierung am Endpunkt weiterbauen
    pub keep_building: bool,
    /// Letzten Kontrollpunkt verwerfen
    pub cancel: bool,
    /// Vorschau an der aktuellen Position einfrieren
    pub fix_preview: bool,
    pub drag: DragPhase,
}

impl FrameInput {
    /// Nur Cursor-Bewegung.
    pub fn hover(position: Vec3) -> Self {
        Self {
            cursor: Some(position),
            ..Self::default()
        }
    }

    pub fn click(position: Vec3) -> Self {
        Self {
            apply: true,
            ..Self::hover(position)
        }
    }

    pub fn keep_building(position: Vec3) -> Self {
        Self {
            keep_building: true,
            ..Self::hover(position)
        }
    }

    pub fn cancel(position: Vec3) -> Self {
        Self {
            cancel: true,
            ..Self::hover(position)
        }
    }

    pub fn fix_preview(position: Vec3) -> Self {
        Self {
            fix_preview: true,
            ..Self::hover(position)
        }
    }

    pub fn drag(position: Vec3, phase: DragPhase) -> Self {
        Self {
            drag: phase,
            ..Self::hover(position)
        }
    }
}

/// Ein zu erzeugendes Objekt (Vorschau, Cursor oder endgültig).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementRequest {
    pub position: Vec3,
    pub rotation: Quat,
    /// Nur bei Bäumen gesetzt
    pub tree: Option<TreeGrowth>,
}

/// Änderung der Vorschau-Objekte.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PreviewUpdate {
    /// Bisherige Vorschau bleibt stehen
    #[default]
    Keep,
    /// Vorschau entfernen
    Clear,
    /// Vorschau durch diese Objekte ersetzen
    Replace(Vec<PlacementRequest>),
}

/// Ausgaben eines Frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameOutput {
    pub preview: PreviewUpdate,
    /// In diesem Frame endgültig platzierte Objekte
    pub placed: Vec<PlacementRequest>,
    /// Einzelnes Cursor-Objekt solange kein Startpunkt existiert
    pub cursor: Option<PlacementRequest>,
    pub overlay: OverlayGeometry,
    /// Greifbare Kontrollpunkte
    pub point_overlays: Vec<Vec3>,
}
