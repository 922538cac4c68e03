//! Szenario-Dateien: Optionen, Objekt und eine Folge von Frames, die einen
//! `LineToolController` ohne Host durchlaufen.
//!
//! ```toml
//! terrain_height = 0.0
//!
//! [options]
//! mode = "Straight"
//! spacing = 10.0
//!
//! [object]
//! mesh_extents = [{ min = -1.0, max = 1.0 }]
//!
//! [[frames]]
//! cursor = [0.0, 0.0, 0.0]
//! apply = true
//! ```

use super::controller::{LineToolController, SelectedObject};
use super::events::{FrameInput, PlacementRequest};
use super::tree_state::TreeState;
use crate::core::{Bounds1, FlatTerrain};
use crate::shared::LineToolOptions;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Zu platzierendes Objekt eines Szenarios.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioObject {
    /// Z-Ausdehnungen der einzelnen Meshes
    pub mesh_extents: Vec<Bounds1>,
    pub is_tree: bool,
}

/// Vollständiges Szenario.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Konstante Terrain-Höhe
    pub terrain_height: f32,
    /// Werkzeug-Optionen; fehlen sie, entscheidet der Aufrufer
    pub options: Option<LineToolOptions>,
    pub object: ScenarioObject,
    /// Altersstufe für Bäume (sonst `Adult`)
    pub tree_state: Option<TreeState>,
    pub frames: Vec<FrameInput>,
}

/// Ergebnis eines Szenario-Laufs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScenarioReport {
    pub frames: usize,
    /// Alle platzierten Objekte in Reihenfolge
    pub placements: Vec<PlacementRequest>,
    /// Anzahl der Objekte je Platzierungs-Klick
    pub batches: Vec<usize>,
}

impl Scenario {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Szenario ist kein gültiges TOML")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Szenario nicht lesbar: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Szenario fehlerhaft: {}", path.display()))
    }

    /// Spielt alle Frames auf flachem Terrain ab.
    pub fn run(&self) -> ScenarioReport {
        let terrain = Box::new(FlatTerrain::new(self.terrain_height));
        let options = self.options.clone().unwrap_or_default();
        let mut controller = LineToolController::with_options(terrain, &options);
        if let Some(state) = self.tree_state {
            controller = controller.with_tree_age_provider(Box::new(state));
        }
        controller.activate();
        controller.select_object(SelectedObject::from_mesh_extents(
            self.object.mesh_extents.iter().copied(),
            self.object.is_tree,
        ));

        let mut report = ScenarioReport::default();
        for frame in &self.frames {
            let output = controller.update(frame);
            if !output.placed.is_empty() {
                report.batches.push(output.placed.len());
                report.placements.extend(output.placed);
            }
            report.frames += 1;
        }
        controller.deactivate();
        log::info!(
            "Szenario: {} Frames, {} Objekte platziert",
            report.frames,
            report.placements.len()
        );
        report
    }
}
