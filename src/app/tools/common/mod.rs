//! Gemeinsame Bausteine der Linien-Modi.

pub mod base;
pub mod overlay;
pub mod spacing;

pub use base::ModeBase;
pub use overlay::{
    AngleIndicator, AngleKind, DashedLine, OverlayGeometry, OverlayShape, Tooltip, TooltipKind,
};
pub use spacing::{full_length_count, Jitter};
