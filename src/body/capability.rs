//! Capability flags and damage kinds

use serde::{Deserialize, Serialize};

/// A physiological function one or more body parts contribute to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    Consciousness,
    Breathing,
    BloodPumping,
    Sight,
    Grasp,
    Moving,
    Eating,
}

impl Capability {
    pub fn all() -> [Capability; 7] {
        [
            Capability::Consciousness,
            Capability::Breathing,
            Capability::BloodPumping,
            Capability::Sight,
            Capability::Grasp,
            Capability::Moving,
            Capability::Eating,
        ]
    }
}

/// Kinds of structural damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageKind {
    Bruise,
    Cut,
    Puncture,
    Fracture,
}

impl DamageKind {
    pub fn all() -> [DamageKind; 4] {
        [
            DamageKind::Bruise,
            DamageKind::Cut,
            DamageKind::Puncture,
            DamageKind::Fracture,
        ]
    }

    /// Pain added per point of structural damage
    pub fn pain_multiplier(self) -> f32 {
        match self {
            DamageKind::Bruise => 0.5,
            DamageKind::Cut => 1.5,
            DamageKind::Puncture => 2.0,
            DamageKind::Fracture => 1.0,
        }
    }

    /// Stable index for per-kind ledgers
    pub(crate) fn index(self) -> usize {
        match self {
            DamageKind::Bruise => 0,
            DamageKind::Cut => 1,
            DamageKind::Puncture => 2,
            DamageKind::Fracture => 3,
        }
    }
}

impl std::fmt::Display for DamageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DamageKind::Bruise => "bruise",
            DamageKind::Cut => "cut",
            DamageKind::Puncture => "puncture",
            DamageKind::Fracture => "fracture",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pain_multipliers() {
        assert_eq!(DamageKind::Bruise.pain_multiplier(), 0.5);
        assert_eq!(DamageKind::Cut.pain_multiplier(), 1.5);
        assert_eq!(DamageKind::Puncture.pain_multiplier(), 2.0);
        assert_eq!(DamageKind::Fracture.pain_multiplier(), 1.0);
    }

    #[test]
    fn test_indices_are_distinct() {
        let mut seen = [false; 4];
        for kind in DamageKind::all() {
            assert!(!seen[kind.index()]);
            seen[kind.index()] = true;
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(DamageKind::Cut.to_string(), "cut");
        assert_eq!(DamageKind::Puncture.to_string(), "puncture");
    }
}
