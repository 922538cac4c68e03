//! Host-unabhängige Geometrie: Bézier-Kurven, Arc-Length, Terrain-Abfrage, Zufall.

pub mod arc_length;
pub mod bezier;
pub mod bounds;
pub mod math;
pub mod point;
pub mod random;
pub mod terrain;

pub use bezier::{fit_curve, fit_curve_with_tangents, Bezier4x3, Segment3};
pub use bounds::Bounds1;
pub use point::PointData;
pub use random::JitterRng;
pub use terrain::{FlatTerrain, HeightGrid, TerrainSampler, WorldBounds};
