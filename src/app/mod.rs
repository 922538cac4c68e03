//! Application-Layer: Controller, Einstellungen, Frame-Events und Linien-Modi.

pub mod controller;
pub mod events;
pub mod scenario;
pub mod settings;
pub mod tools;
pub mod tree_state;

pub use controller::{LineToolController, SelectedObject};
pub use events::{DragPhase, FrameInput, FrameOutput, PlacementRequest, PreviewUpdate};
pub use settings::ToolSettings;
pub use tools::{ActiveMode, DragHandle, LineModeTool, PointParams};
pub use tree_state::{TreeAgeProvider, TreeGrowth, TreeState};
pub use scenario::{Scenario, ScenarioReport};
