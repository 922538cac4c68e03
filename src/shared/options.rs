//! Zentrale Konfiguration für das Linien-Werkzeug.
//!
//! `LineToolOptions` enthält die beim Start geladenen Werkzeug-Einstellungen.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::modes::{LineMode, SpacingMode};
use anyhow::Context;
use serde::{Deserialize, Serialize};

// ── Abstand ─────────────────────────────────────────────────────────

/// Standard-Abstand zwischen platzierten Objekten (Welteinheiten).
pub const DEFAULT_SPACING: f32 = 20.0;
/// Schrittweite der Abstand-Hotkeys (Höhe hoch/runter).
pub const SPACING_STEP: f32 = 1.0;
/// Abstände werden auf dieses Raster gerundet.
pub const SPACING_PRECISION: f32 = 0.1;
/// Zuschlag auf die Objekt-Ausdehnung beim Mindestabstand.
pub const MIN_SPACING_MARGIN: f32 = 0.1;

// ── Bearbeitung ─────────────────────────────────────────────────────

/// Radius (Welteinheiten), innerhalb dessen ein Kontrollpunkt gegriffen wird.
pub const DRAG_HIT_RADIUS: f32 = 8.0;
/// Toleranz für Kanten-Bündigkeit im Zaun-Modus (Welteinheiten).
pub const FENCE_TOLERANCE: f32 = 1e-3;
/// Obergrenze der Punkte pro Linie (schützt vor entarteten Eingaben).
pub const MAX_POINTS_PER_LINE: usize = 100_000;

// ── Overlay ─────────────────────────────────────────────────────────

/// Linienbreite der gestrichelten Hilfslinien.
pub const OVERLAY_LINE_WIDTH: f32 = 1.0;
/// Linienbreite des Winkel-Indikators.
pub const ANGLE_INDICATOR_WIDTH: f32 = 8.0;
/// Maximale Schenkellänge des Winkel-Indikators.
pub const ANGLE_INDICATOR_LENGTH: f32 = 8.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Werkzeug-Einstellungen beim Start.
/// Wird als `line_tool.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineToolOptions {
    /// Linienform beim Aktivieren
    #[serde(default)]
    pub mode: LineMode,
    /// Verteilungsmodus
    #[serde(default)]
    pub spacing_mode: SpacingMode,
    /// Abstand zwischen Objekten
    #[serde(default = "default_spacing")]
    pub spacing: f32,
    /// Zufällige Rotation pro Objekt
    #[serde(default)]
    pub random_rotation: bool,
    /// Feste Rotation in Grad
    #[serde(default)]
    pub rotation: i32,
    /// Maximale zufällige Abweichung des Abstands
    #[serde(default)]
    pub random_spacing: f32,
    /// Maximaler zufälliger Seitenversatz
    #[serde(default)]
    pub random_offset: f32,
}

impl Default for LineToolOptions {
    fn default() -> Self {
        Self {
            mode: LineMode::Straight,
            spacing_mode: SpacingMode::Manual,
            spacing: DEFAULT_SPACING,
            random_rotation: false,
            rotation: 0,
            random_spacing: 0.0,
            random_offset: 0.0,
        }
    }
}

/// Serde-Default für `spacing` (Abwärtskompatibilität).
fn default_spacing() -> f32 {
    DEFAULT_SPACING
}

impl LineToolOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("line-tool"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("line_tool.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let opts: LineToolOptions =
            toml::from_str("mode = \"Circle\"\nrandom_offset = 1.5\n").expect("gültiges TOML");
        assert_eq!(opts.mode, LineMode::Circle);
        assert_eq!(opts.spacing, DEFAULT_SPACING);
        assert_eq!(opts.spacing_mode, SpacingMode::Manual);
        assert_eq!(opts.random_offset, 1.5);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("line_tool_gibt_es_nicht_4711.toml");
        let opts = LineToolOptions::load_from_file(&path);
        assert_eq!(opts, LineToolOptions::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir().join(format!("line_tool_{}.toml", std::process::id()));
        let opts = LineToolOptions {
            mode: LineMode::SimpleCurve,
            spacing_mode: SpacingMode::FenceMode,
            spacing: 7.5,
            rotation: 90,
            ..LineToolOptions::default()
        };
        opts.save_to_file(&path).expect("Speichern erwartet");
        let loaded = LineToolOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, opts);
    }
}
