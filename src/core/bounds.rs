//! Ausdehnung eines Objekts entlang seiner lokalen Vorwärtsachse (Z).

use serde::{Deserialize, Serialize};

/// Eindimensionale Begrenzung `[min, max]`.
///
/// Für platzierte Objekte: Ausdehnung entlang der lokalen Z-Achse relativ
/// zum Objekt-Ursprung. `min` ist typischerweise negativ.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds1 {
    /// Hinteres Ende (lokales Z)
    pub min: f32,
    /// Vorderes Ende (lokales Z)
    pub max: f32,
}

impl Bounds1 {
    /// Erstellt eine Begrenzung aus expliziten Werten.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Vereinigt die Z-Ausdehnungen aller Meshes eines Objekts.
    ///
    /// Startet bei `[0, 0]`, sodass der Objekt-Ursprung immer enthalten ist.
    pub fn from_mesh_extents(extents: impl IntoIterator<Item = Bounds1>) -> Self {
        extents
            .into_iter()
            .fold(Self::default(), |acc, mesh| Self {
                min: acc.min.min(mesh.min),
                max: acc.max.max(mesh.max),
            })
    }

    /// Gesamtlänge `max − min`.
    pub fn length(&self) -> f32 {
        self.max - self.min
    }

    /// Größter Betrag der beiden Enden (Mindestabstand zwischen Objekten).
    pub fn max_extent(&self) -> f32 {
        self.max.abs().max(self.min.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mesh_extents_includes_origin() {
        let bounds = Bounds1::from_mesh_extents([Bounds1::new(1.0, 3.0), Bounds1::new(2.0, 4.0)]);
        assert_eq!(bounds, Bounds1::new(0.0, 4.0));
    }

    #[test]
    fn test_from_mesh_extents_unions_meshes() {
        let bounds =
            Bounds1::from_mesh_extents([Bounds1::new(-2.0, 1.0), Bounds1::new(-0.5, 2.5)]);
        assert_eq!(bounds, Bounds1::new(-2.0, 2.5));
        assert_eq!(bounds.length(), 4.5);
        assert_eq!(bounds.max_extent(), 2.5);
    }
}
