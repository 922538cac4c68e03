//! State-Definitionen und Konstruktor für den Gerade-Linie-Modus.

use super::super::common::ModeBase;

/// Gerade Linie zwischen Start und Cursor
#[derive(Debug, Clone, Default)]
pub struct StraightLineMode {
    pub(crate) base: ModeBase,
}

impl StraightLineMode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Übernimmt den Startpunkt eines anderen Modus.
    pub fn from_base(base: &ModeBase) -> Self {
        Self {
            base: ModeBase::carry_over(base),
        }
    }
}
