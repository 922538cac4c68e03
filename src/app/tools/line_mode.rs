//! LineModeTool-Trait: gemeinsame Schnittstelle aller Linien-Modi.

use super::common::{ModeBase, OverlayGeometry};
use super::{DragHandle, PointParams};
use crate::core::{PointData, TerrainSampler};
use glam::Vec3;

/// Schnittstelle für Gerade, Kurve und Kreis.
///
/// Modi sind zustandsbehaftet (Klick-Phasen) und erzeugen aus Kontrollpunkten,
/// Cursor-Position und Abstandseinstellungen die Platzierungspunkte.
pub trait LineModeTool {
    /// Gemeinsamer Kontrollpunkt-Zustand (für Übernahme beim Moduswechsel).
    fn base(&self) -> &ModeBase;

    /// Wurde ein gültiger Startpunkt gesetzt?
    fn has_start(&self) -> bool {
        self.base().valid_start
    }

    /// Sind genug Kontrollpunkte für eine Platzierung vorhanden?
    fn has_all_points(&self) -> bool {
        self.base().valid_start
    }

    /// Verarbeitet einen Klick. Gibt `true` zurück wenn jetzt platziert werden soll.
    fn handle_click(&mut self, position: Vec3) -> bool;

    /// Bereitet nach erfolgter Platzierung die nächste Linie vor.
    fn items_placed(&mut self, position: Vec3);

    /// Verwirft den zuletzt gesetzten Kontrollpunkt.
    fn reset(&mut self);

    /// Berechnet die Platzierungspunkte bis zur aktuellen Cursor-Position.
    ///
    /// Ohne Startpunkt oder bei entarteter Geometrie ist die Liste leer.
    /// Merkt sich `current` als Endpunkt (Overlay, Drag).
    fn calculate_points(
        &mut self,
        current: Vec3,
        params: &PointParams,
        terrain: &dyn TerrainSampler,
    ) -> Vec<PointData>;

    /// Hilfslinien, Winkel-Indikator und Tooltips für die aktuelle Cursor-Position.
    fn overlay(&self, current: Vec3) -> OverlayGeometry;

    /// Positionen der greifbaren Kontrollpunkte.
    fn point_overlays(&self) -> Vec<Vec3>;

    /// Sucht den nächstgelegenen Kontrollpunkt im Greif-Radius.
    fn check_drag_hit(&self, position: Vec3) -> Option<DragHandle>;

    /// Verschiebt einen gegriffenen Kontrollpunkt.
    fn handle_drag(&mut self, handle: DragHandle, position: Vec3);
}
