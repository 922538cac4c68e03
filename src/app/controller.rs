//! Linien-Werkzeug-Controller: verarbeitet Frame-Eingaben und erzeugt Vorschau,
//! Platzierungen und Overlay.
//!
//! Ablauf pro Frame (`update`):
//! 1. ohne aktives Werkzeug oder ausgewähltes Objekt: leere Ausgabe
//! 2. Position = eingefrorene Vorschau oder Raycast-Treffer (sonst letzte Position),
//!    Höhe aus dem Terrain
//! 3. Abbrechen → letzten Kontrollpunkt verwerfen, Vorschau entfernen
//! 4. Vorschau einfrieren (nur wenn alle Punkte gesetzt)
//! 5. Klick → Kontrollpunkt setzen bzw. platzieren
//! 6. ohne Startpunkt: nur Cursor-Objekt
//! 7. Overlay
//! 8. Neuberechnung nur bei Dirty-Flag oder geänderter XZ-Position

use super::events::{DragPhase, FrameInput, FrameOutput, PlacementRequest, PreviewUpdate};
use super::settings::ToolSettings;
use super::tools::{ActiveMode, DragHandle, LineModeTool};
use super::tree_state::{resolve_tree_state, TreeAgeProvider, TreeGrowth};
use crate::core::math::yaw_rotation;
use crate::core::{Bounds1, JitterRng, PointData, TerrainSampler};
use crate::shared::{LineMode, LineToolOptions, SpacingMode};
use glam::{Quat, Vec3};

/// Das zu platzierende Objekt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedObject {
    /// Ausdehnung entlang der lokalen Z-Achse
    pub footprint: Bounds1,
    pub is_tree: bool,
}

impl SelectedObject {
    pub fn new(footprint: Bounds1, is_tree: bool) -> Self {
        Self { footprint, is_tree }
    }

    /// Footprint als Vereinigung der Z-Ausdehnungen aller Meshes.
    pub fn from_mesh_extents(extents: impl IntoIterator<Item = Bounds1>, is_tree: bool) -> Self {
        Self::new(Bounds1::from_mesh_extents(extents), is_tree)
    }
}

/// Orchestriert Modus, Einstellungen und Terrain für das Linien-Werkzeug.
pub struct LineToolController {
    mode: ActiveMode,
    settings: ToolSettings,
    terrain: Box<dyn TerrainSampler>,
    tree_ages: Option<Box<dyn TreeAgeProvider>>,
    selected: Option<SelectedObject>,
    active: bool,
    /// Zuletzt berechnete Vorschau-Punkte
    points: Vec<PointData>,
    /// Position der letzten Berechnung
    previous_pos: Option<Vec3>,
    /// Letzter Raycast-Treffer
    last_position: Option<Vec3>,
    /// Eingefrorene Vorschau-Position
    fixed_preview: Option<Vec3>,
    dragging: Option<DragHandle>,
}

impl LineToolController {
    /// Erstellt einen Controller mit Standard-Optionen.
    pub fn new(terrain: Box<dyn TerrainSampler>) -> Self {
        Self::with_options(terrain, &LineToolOptions::default())
    }

    /// Erstellt einen Controller mit gespeicherten Start-Optionen.
    pub fn with_options(terrain: Box<dyn TerrainSampler>, options: &LineToolOptions) -> Self {
        Self {
            mode: ActiveMode::new(options.mode),
            settings: ToolSettings::from_options(options),
            terrain,
            tree_ages: None,
            selected: None,
            active: false,
            points: Vec::new(),
            previous_pos: None,
            last_position: None,
            fixed_preview: None,
            dragging: None,
        }
    }

    /// Setzt den Anbieter für das Alter platzierter Bäume.
    pub fn with_tree_age_provider(mut self, provider: Box<dyn TreeAgeProvider>) -> Self {
        self.tree_ages = Some(provider);
        self
    }

    // ── Lebenszyklus ─────────────────────────────────────────────

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Startet das Werkzeug ohne Kontrollpunkte.
    pub fn activate(&mut self) {
        log::info!("Linien-Werkzeug aktiviert ({:?})", self.mode.line_mode());
        self.active = true;
        self.mode = ActiveMode::new(self.mode.line_mode());
        self.clear_preview_state();
        self.last_position = None;
    }

    /// Beendet das Werkzeug; die Vorschau muss entfernt werden.
    pub fn deactivate(&mut self) -> FrameOutput {
        log::info!("Linien-Werkzeug deaktiviert");
        self.active = false;
        self.mode = ActiveMode::new(self.mode.line_mode());
        self.clear_preview_state();
        FrameOutput {
            preview: PreviewUpdate::Clear,
            ..FrameOutput::default()
        }
    }

    // ── Auswahl und Modus ────────────────────────────────────────

    /// Wählt das zu platzierende Objekt; der Abstand wird an dessen Länge angepasst.
    pub fn select_object(&mut self, object: SelectedObject) {
        log::info!(
            "Objekt ausgewählt: Z {:.2}..{:.2}, Baum: {}",
            object.footprint.min,
            object.footprint.max,
            object.is_tree
        );
        self.selected = Some(object);
        self.settings.set_z_bounds(object.footprint);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.settings.mark_dirty();
    }

    pub fn selected_object(&self) -> Option<SelectedObject> {
        self.selected
    }

    pub fn mode(&self) -> LineMode {
        self.mode.line_mode()
    }

    pub fn active_mode(&self) -> &ActiveMode {
        &self.mode
    }

    /// Wechselt den Linien-Modus; der Startpunkt bleibt erhalten.
    pub fn set_mode(&mut self, mode: LineMode) {
        if mode == self.mode.line_mode() {
            return;
        }
        log::info!("Linien-Modus: {:?} → {:?}", self.mode.line_mode(), mode);
        self.mode = self.mode.switch_to(mode);
        self.dragging = None;
        self.settings.mark_dirty();
    }

    // ── Einstellungen ────────────────────────────────────────────

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    /// Aktuelle Einstellungen als speicherbare Optionen.
    pub fn options(&self) -> LineToolOptions {
        self.settings.to_options(self.mode.line_mode())
    }

    pub fn set_spacing(&mut self, value: f32) {
        self.settings.set_spacing(value);
    }

    pub fn spacing_up(&mut self) {
        self.settings.spacing_up();
    }

    pub fn spacing_down(&mut self) {
        self.settings.spacing_down();
    }

    pub fn set_fence_mode(&mut self, enabled: bool) {
        self.settings.set_fence_mode(enabled);
    }

    pub fn set_spacing_mode(&mut self, mode: SpacingMode) {
        self.settings.set_spacing_mode(mode);
    }

    pub fn set_random_rotation(&mut self, enabled: bool) {
        self.settings.set_random_rotation(enabled);
    }

    pub fn set_random_spacing(&mut self, value: f32) {
        self.settings.set_random_spacing(value);
    }

    pub fn set_random_offset(&mut self, value: f32) {
        self.settings.set_random_offset(value);
    }

    pub fn set_rotation(&mut self, degrees: i32) {
        self.settings.set_rotation(degrees);
    }

    pub fn effective_spacing(&self) -> f32 {
        self.settings.effective_spacing()
    }

    /// Zuletzt berechnete Vorschau-Punkte.
    pub fn points(&self) -> &[PointData] {
        &self.points
    }

    pub fn is_preview_fixed(&self) -> bool {
        self.fixed_preview.is_some()
    }

    // ── Frame-Verarbeitung ───────────────────────────────────────

    /// Verarbeitet die Eingaben eines Frames.
    pub fn update(&mut self, input: &FrameInput) -> FrameOutput {
        let mut output = FrameOutput::default();
        if !self.active {
            return output;
        }
        let Some(selected) = self.selected else {
            return output;
        };

        let hit = input.cursor.map(|cursor| self.grounded(cursor));
        if let Some(hit) = hit {
            self.last_position = Some(hit);
            self.handle_drag_input(input.drag, hit);
        }
        let Some(position) = self.fixed_preview.or(self.last_position) else {
            return output;
        };
        let position = self.grounded(position);

        if input.cancel {
            log::debug!("Abbruch: letzter Kontrollpunkt verworfen");
            self.mode.reset();
            self.clear_preview_state();
            output.preview = PreviewUpdate::Clear;
            return output;
        }

        if input.fix_preview && self.mode.has_all_points() {
            log::debug!("Vorschau eingefroren bei {:?}", position);
            self.fixed_preview = Some(position);
        } else if (input.apply || input.keep_building) && self.dragging.is_none() {
            self.fixed_preview = None;
            self.settings.mark_dirty();
            if self.mode.handle_click(position) {
                output.placed = self.place(position, selected, input.keep_building);
                output.preview = PreviewUpdate::Clear;
                return output;
            }
        }

        if !self.mode.has_start() {
            output.cursor = Some(self.request(
                position,
                self.settings_rotation(),
                selected,
            ));
            return output;
        }

        output.overlay = self.mode.overlay(position);
        output.point_overlays = self.mode.point_overlays();

        let dirty = self.settings.take_dirty();
        let moved = self
            .previous_pos
            .map_or(true, |prev| prev.x != position.x || prev.z != position.z);
        if !dirty && !moved {
            return output;
        }

        self.previous_pos = Some(position);
        self.points = self.mode.calculate_points(
            position,
            &self.settings.point_params(),
            self.terrain.as_ref(),
        );
        log::trace!("Vorschau neu berechnet: {} Punkte", self.points.len());
        output.preview = PreviewUpdate::Replace(
            self.points
                .iter()
                .map(|p| self.request(p.position, p.rotation, selected))
                .collect(),
        );
        output
    }

    /// Endgültige Punkte an der Klick-Position; danach nächste Linie vorbereiten.
    fn place(
        &mut self,
        position: Vec3,
        selected: SelectedObject,
        keep_building: bool,
    ) -> Vec<PlacementRequest> {
        let points = self.mode.calculate_points(
            position,
            &self.settings.point_params(),
            self.terrain.as_ref(),
        );
        let placed: Vec<PlacementRequest> = points
            .iter()
            .map(|p| self.request(p.position, p.rotation, selected))
            .collect();
        log::debug!("{} Objekte platziert", placed.len());

        self.mode.items_placed(position);
        if !keep_building {
            self.mode.reset();
        }
        self.clear_preview_state();
        placed
    }

    fn handle_drag_input(&mut self, phase: DragPhase, position: Vec3) {
        match phase {
            DragPhase::None => {}
            DragPhase::Begin => {
                if self.mode.has_start() {
                    self.dragging = self.mode.check_drag_hit(position);
                    if let Some(handle) = self.dragging {
                        log::debug!("Drag gestartet: {:?}", handle);
                    }
                }
            }
            DragPhase::Continue => {
                if let Some(handle) = self.dragging {
                    self.mode.handle_drag(handle, position);
                    if handle == DragHandle::End && self.fixed_preview.is_some() {
                        self.fixed_preview = Some(position);
                    }
                    self.settings.mark_dirty();
                }
            }
            DragPhase::End => {
                if self.dragging.take().is_some() {
                    self.settings.mark_dirty();
                }
            }
        }
    }

    fn clear_preview_state(&mut self) {
        self.points.clear();
        self.previous_pos = None;
        self.fixed_preview = None;
        self.dragging = None;
        self.settings.mark_dirty();
    }

    fn grounded(&self, mut position: Vec3) -> Vec3 {
        position.y = self.terrain.sample_height(position.x, position.z);
        position
    }

    fn settings_rotation(&self) -> Quat {
        yaw_rotation((self.settings.rotation() as f32).to_radians())
    }

    /// Zufallsrotation (aus der Position geseedet) ersetzt die Punkt-Rotation.
    fn effective_rotation(&self, position: Vec3, rotation: Quat) -> Quat {
        if !self.settings.random_rotation() {
            return rotation;
        }
        let degrees = JitterRng::from_position(position).below(360);
        yaw_rotation((degrees as f32).to_radians())
    }

    fn request(&self, position: Vec3, rotation: Quat, selected: SelectedObject) -> PlacementRequest {
        let tree = selected
            .is_tree
            .then(|| TreeGrowth::new(resolve_tree_state(self.tree_ages.as_deref())));
        PlacementRequest {
            position,
            rotation: self.effective_rotation(position, rotation),
            tree,
        }
    }
}
