//! Geteilte Typen und Konstanten für layer-übergreifende Verträge.

mod modes;
pub mod options;

pub use modes::{LineMode, SpacingMode};
pub use options::LineToolOptions;
pub use options::{DEFAULT_SPACING, DRAG_HIT_RADIUS, MAX_POINTS_PER_LINE};
