//! Linien-Werkzeug: Platzierung von Objekten entlang von Geraden, Kurven und Kreisen.
//! Core-Funktionalität als Library exportiert für Tests, Benchmarks und Hosts.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    ActiveMode, DragHandle, DragPhase, FrameInput, FrameOutput, LineModeTool, LineToolController,
    PlacementRequest, PointParams, PreviewUpdate, Scenario, ScenarioReport, SelectedObject,
    ToolSettings, TreeAgeProvider, TreeState,
};
pub use core::{Bezier4x3, Bounds1, FlatTerrain, HeightGrid, PointData, TerrainSampler, WorldBounds};
pub use shared::{LineMode, LineToolOptions, SpacingMode};
