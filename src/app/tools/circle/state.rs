//! State-Definitionen und Konstruktor für den Kreis-Modus.

use super::super::common::ModeBase;

/// Kreis um `base.start_pos`
#[derive(Debug, Clone, Default)]
pub struct CircleMode {
    pub(crate) base: ModeBase,
}

impl CircleMode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Übernimmt den Startpunkt eines anderen Modus als Mittelpunkt.
    pub fn from_base(base: &ModeBase) -> Self {
        Self {
            base: ModeBase::carry_over(base),
        }
    }
}
