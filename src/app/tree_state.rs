//! Optionale Baum-Alters-Fähigkeit.
//!
//! Platzierte Bäume erhalten das Alter, das ein externer Anbieter (z. B. ein
//! Baum-Werkzeug des Hosts) vorgibt; ohne Anbieter immer [`TreeState::Adult`].

use serde::{Deserialize, Serialize};

/// Wachstums-Wert, mit dem platzierte Bäume starten.
pub const PLACED_TREE_GROWTH: u8 = 128;

/// Altersstufe eines Baums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TreeState {
    Teen,
    #[default]
    Adult,
    Elderly,
    Dead,
    Stump,
}

/// Liefert die Altersstufe für den nächsten platzierten Baum.
pub trait TreeAgeProvider {
    fn next_tree_state(&self) -> TreeState;
}

/// Feste Altersstufe.
impl TreeAgeProvider for TreeState {
    fn next_tree_state(&self) -> TreeState {
        *self
    }
}

/// Baum-Daten einer Platzierung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeGrowth {
    pub state: TreeState,
    pub growth: u8,
}

impl TreeGrowth {
    pub fn new(state: TreeState) -> Self {
        Self {
            state,
            growth: PLACED_TREE_GROWTH,
        }
    }
}

/// Altersstufe vom Anbieter oder `Adult`.
pub fn resolve_tree_state(provider: Option<&dyn TreeAgeProvider>) -> TreeState {
    provider.map_or(TreeState::Adult, |p| p.next_tree_state())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adult_without_provider() {
        assert_eq!(resolve_tree_state(None), TreeState::Adult);
    }

    #[test]
    fn test_provider_decides_age() {
        let provider = TreeState::Elderly;
        assert_eq!(resolve_tree_state(Some(&provider)), TreeState::Elderly);
        assert_eq!(TreeGrowth::new(TreeState::Teen).growth, PLACED_TREE_GROWTH);
    }
}
