//! Modus-Auswahl für Linienform und Abstandsverteilung.

use serde::{Deserialize, Serialize};

/// Form der gezeichneten Linie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineMode {
    /// Gerade zwischen zwei Klicks
    #[default]
    Straight,
    /// Kurve über Start, Ellbogen und Ende
    SimpleCurve,
    /// Kreis um den ersten Klick
    Circle,
}

/// Verteilung der Objekte entlang der Linie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpacingMode {
    /// Fester Abstand, optional mit Zufalls-Jitter
    #[default]
    Manual,
    /// Objekte Kante an Kante, Ausrichtung entlang der Linie
    FenceMode,
    /// Abstand so angepasst, dass beide Endpunkte exakt getroffen werden
    FullLength,
}
