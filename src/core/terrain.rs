//! Terrain-Höhenabfrage als injizierbarer Kollaborateur.
//!
//! Die Linien-Modi kennen keine Terrain-Datenstruktur; sie fragen pro Punkt
//! über [`TerrainSampler`] die Höhe an der fertigen XZ-Position ab.

/// Höhenabfrage `y = h(x, z)`.
pub trait TerrainSampler {
    /// Liefert die Terrainhöhe an der horizontalen Position `(x, z)`.
    fn sample_height(&self, x: f32, z: f32) -> f32;
}

/// Ebenes Terrain konstanter Höhe.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlatTerrain {
    pub height: f32,
}

impl FlatTerrain {
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl TerrainSampler for FlatTerrain {
    fn sample_height(&self, _x: f32, _z: f32) -> f32 {
        self.height
    }
}

impl<F> TerrainSampler for F
where
    F: Fn(f32, f32) -> f32,
{
    fn sample_height(&self, x: f32, z: f32) -> f32 {
        self(x, z)
    }
}

/// Weltkoordinaten-Begrenzungen eines Höhenrasters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    /// Minimale X-Koordinate
    pub min_x: f32,
    /// Minimale Z-Koordinate
    pub min_z: f32,
    /// Maximale X-Koordinate
    pub max_x: f32,
    /// Maximale Z-Koordinate
    pub max_z: f32,
}

impl WorldBounds {
    /// Erstellt Bounds aus einer Kantenlänge (zentriert bei 0,0)
    pub fn centered(size: f32) -> Self {
        let half = size / 2.0;
        Self {
            min_x: -half,
            min_z: -half,
            max_x: half,
            max_z: half,
        }
    }
}

/// Regelmäßiges Höhenraster (zeilenweise, Z-Zeilen × X-Spalten).
///
/// Abfragen außerhalb der Bounds werden auf den Rand geklemmt.
#[derive(Debug, Clone)]
pub struct HeightGrid {
    heights: Vec<f32>,
    width: usize,
    depth: usize,
    bounds: WorldBounds,
}

impl HeightGrid {
    /// Erstellt ein Raster aus Höhenwerten.
    ///
    /// Gibt `None` zurück wenn die Anzahl der Werte nicht `width * depth`
    /// entspricht oder eine Dimension kleiner als 2 ist.
    pub fn new(heights: Vec<f32>, width: usize, depth: usize, bounds: WorldBounds) -> Option<Self> {
        if width < 2 || depth < 2 || heights.len() != width * depth {
            log::warn!(
                "Höhenraster ungültig: {} Werte für {}x{}",
                heights.len(),
                width,
                depth
            );
            return None;
        }
        Some(Self {
            heights,
            width,
            depth,
            bounds,
        })
    }

    /// Dimensionen (Spalten, Zeilen)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.depth)
    }

    fn cell(&self, x: usize, z: usize) -> f32 {
        self.heights[z * self.width + x]
    }
}

impl TerrainSampler for HeightGrid {
    /// Bilineare Interpolation der vier umgebenden Rasterwerte.
    fn sample_height(&self, x: f32, z: f32) -> f32 {
        let b = &self.bounds;
        let nx = ((x - b.min_x) / (b.max_x - b.min_x)).clamp(0.0, 1.0);
        let nz = ((z - b.min_z) / (b.max_z - b.min_z)).clamp(0.0, 1.0);
        if !nx.is_finite() || !nz.is_finite() {
            return self.cell(0, 0);
        }

        let px = nx * (self.width - 1) as f32;
        let pz = nz * (self.depth - 1) as f32;
        let x0 = (px.floor() as usize).min(self.width - 2);
        let z0 = (pz.floor() as usize).min(self.depth - 2);
        let fx = px - x0 as f32;
        let fz = pz - z0 as f32;

        let near = self.cell(x0, z0) * (1.0 - fx) + self.cell(x0 + 1, z0) * fx;
        let far = self.cell(x0, z0 + 1) * (1.0 - fx) + self.cell(x0 + 1, z0 + 1) * fx;
        near * (1.0 - fz) + far * fz
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn slope_grid() -> HeightGrid {
        // 3x3 Raster über [-10, 10]², Höhe steigt linear mit X (0, 5, 10)
        let heights = vec![0.0, 5.0, 10.0, 0.0, 5.0, 10.0, 0.0, 5.0, 10.0];
        HeightGrid::new(heights, 3, 3, WorldBounds::centered(20.0)).expect("gültiges Raster")
    }

    #[test]
    fn test_world_bounds_centered() {
        let bounds = WorldBounds::centered(4096.0);
        assert_eq!(bounds.min_x, -2048.0);
        assert_eq!(bounds.max_z, 2048.0);
    }

    #[test]
    fn test_height_grid_bilinear() {
        let grid = slope_grid();
        assert_eq!(grid.dimensions(), (3, 3));
        assert_abs_diff_eq!(grid.sample_height(-10.0, 0.0), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(grid.sample_height(0.0, 3.0), 5.0, epsilon = 1e-5);
        assert_abs_diff_eq!(grid.sample_height(5.0, -7.0), 7.5, epsilon = 1e-5);
        assert_abs_diff_eq!(grid.sample_height(10.0, 10.0), 10.0, epsilon = 1e-5);
    }

    #[test]
    fn test_height_grid_clamps_outside() {
        let grid = slope_grid();
        assert_abs_diff_eq!(grid.sample_height(100.0, 0.0), 10.0, epsilon = 1e-5);
        assert_abs_diff_eq!(grid.sample_height(-100.0, -100.0), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_height_grid_rejects_bad_dimensions() {
        assert!(HeightGrid::new(vec![0.0; 5], 2, 3, WorldBounds::centered(10.0)).is_none());
        assert!(HeightGrid::new(vec![0.0; 3], 1, 3, WorldBounds::centered(10.0)).is_none());
    }

    #[test]
    fn test_closure_sampler() {
        let sampler = |x: f32, z: f32| x + z;
        assert_eq!(sampler.sample_height(2.0, 3.0), 5.0);
        assert_eq!(FlatTerrain::new(7.0).sample_height(1.0, 1.0), 7.0);
    }
}
