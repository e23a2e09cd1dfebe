//! Body-part targeting: the player picks where to strike before attacking

use serde::{Deserialize, Serialize};

use crate::core::types::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CycleDirection {
    Up,
    Down,
}

/// Candidate parts of one target with a wrapping cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSelection {
    pub target: EntityId,
    parts: Vec<String>,
    index: usize,
}

impl TargetSelection {
    /// Falls back to the torso when no part is listed
    pub fn new(target: EntityId, parts: Vec<String>) -> Self {
        let parts = if parts.is_empty() {
            vec!["torso".to_string()]
        } else {
            parts
        };
        Self {
            target,
            parts,
            index: 0,
        }
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn selected(&self) -> &str {
        &self.parts[self.index]
    }

    pub fn cycle(&mut self, direction: CycleDirection) {
        let len = self.parts.len();
        self.index = match direction {
            CycleDirection::Up => (self.index + len - 1) % len,
            CycleDirection::Down => (self.index + 1) % len,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> TargetSelection {
        TargetSelection::new(
            EntityId::new(),
            vec!["torso".into(), "head".into(), "brain".into()],
        )
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        let mut sel = selection();
        assert_eq!(sel.selected(), "torso");
        sel.cycle(CycleDirection::Up);
        assert_eq!(sel.selected(), "brain");
        sel.cycle(CycleDirection::Down);
        sel.cycle(CycleDirection::Down);
        assert_eq!(sel.selected(), "head");
    }

    #[test]
    fn test_empty_list_defaults_to_torso() {
        let sel = TargetSelection::new(EntityId::new(), Vec::new());
        assert_eq!(sel.selected(), "torso");
    }
}
