//! Body parts: nodes of the anatomical tree
//!
//! A part exclusively owns its children. Damage is tracked per kind and is
//! permanent; once a part crosses the destruction threshold it is severed
//! and ignores every later hit.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::body::capability::{Capability, DamageKind};
use crate::body::constants::{
    DESTRUCTION_THRESHOLD, HEALTH_PER_SIZE, STATUS_BADLY_DAMAGED, STATUS_DAMAGED, STATUS_HEALTHY,
};
use crate::body::tissue::{Tissue, TissueSpec};

/// Coarse condition of a single part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartStatus {
    Healthy,
    Damaged,
    BadlyDamaged,
    Critical,
    /// Destroyed, irreversible
    Severed,
}

impl std::fmt::Display for PartStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PartStatus::Healthy => "healthy",
            PartStatus::Damaged => "damaged",
            PartStatus::BadlyDamaged => "badly damaged",
            PartStatus::Critical => "critical",
            PartStatus::Severed => "severed",
        };
        f.write_str(label)
    }
}

/// One anatomical unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyPart {
    pub name: String,
    pub size: f32,
    capabilities: AHashSet<Capability>,
    /// Outermost first
    tissues: Vec<TissueSpec>,
    children: Vec<BodyPart>,
    damage_by_kind: [f32; 4],
    total_damage: f32,
    destroyed: bool,
    pain: f32,
}

impl BodyPart {
    pub fn new(
        name: impl Into<String>,
        size: f32,
        capabilities: &[Capability],
        tissues: &[Tissue],
    ) -> Self {
        Self {
            name: name.into(),
            size,
            capabilities: capabilities.iter().copied().collect(),
            tissues: tissues.iter().map(|t| t.spec()).collect(),
            children: Vec::new(),
            damage_by_kind: [0.0; 4],
            total_damage: 0.0,
            destroyed: false,
            pain: 0.0,
        }
    }

    /// Replace the tissue stack with explicit specs (custom armor values)
    pub fn with_tissue_specs(mut self, tissues: Vec<TissueSpec>) -> Self {
        self.tissues = tissues;
        self
    }

    pub fn with_children(mut self, children: Vec<BodyPart>) -> Self {
        self.children = children;
        self
    }

    pub fn max_health(&self) -> f32 {
        self.size * HEALTH_PER_SIZE
    }

    pub fn children(&self) -> &[BodyPart] {
        &self.children
    }

    pub fn tissues(&self) -> &[TissueSpec] {
        &self.tissues
    }

    pub fn has_capability(&self, flag: Capability) -> bool {
        self.capabilities.contains(&flag)
    }

    pub fn damage_of(&self, kind: DamageKind) -> f32 {
        self.damage_by_kind[kind.index()]
    }

    pub fn total_damage(&self) -> f32 {
        self.total_damage
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn pain(&self) -> f32 {
        self.pain
    }

    /// Health fraction in [0, 1]; zero once destroyed
    pub fn health(&self) -> f32 {
        if self.destroyed {
            return 0.0;
        }
        let max = self.max_health();
        ((max - self.total_damage) / max).clamp(0.0, 1.0)
    }

    pub fn health_percent(&self) -> u32 {
        (self.health() * 100.0).floor() as u32
    }

    /// Contribution to a capability: zero unless the part carries the flag
    pub fn capacity_for(&self, flag: Capability) -> f32 {
        if !self.has_capability(flag) || self.destroyed {
            return 0.0;
        }
        self.health()
    }

    /// Apply incoming damage through the tissue stack.
    ///
    /// Returns the structural damage that got past the innermost layer.
    /// Overkill is recorded in full; a destroyed part takes nothing.
    pub fn apply_damage(&mut self, amount: f32, kind: DamageKind) -> f32 {
        if self.destroyed {
            return 0.0;
        }

        let actual = self
            .tissues
            .iter()
            .fold(amount.max(0.0), |remaining, layer| layer.absorb(remaining).1);

        self.damage_by_kind[kind.index()] += actual;
        self.total_damage += actual;
        self.pain += actual * kind.pain_multiplier();

        if self.total_damage >= self.max_health() * DESTRUCTION_THRESHOLD {
            self.destroyed = true;
        }

        actual
    }

    /// Remove up to `amount` bruise damage; returns what was healed.
    ///
    /// Never restores a destroyed part.
    pub fn heal_bruise(&mut self, amount: f32) -> f32 {
        let idx = DamageKind::Bruise.index();
        let healed = amount.max(0.0).min(self.damage_by_kind[idx]);
        self.damage_by_kind[idx] -= healed;
        self.total_damage = (self.total_damage - healed).max(0.0);
        healed
    }

    pub fn status(&self) -> PartStatus {
        if self.destroyed {
            return PartStatus::Severed;
        }
        let health = self.health();
        if health > STATUS_HEALTHY {
            PartStatus::Healthy
        } else if health > STATUS_DAMAGED {
            PartStatus::Damaged
        } else if health > STATUS_BADLY_DAMAGED {
            PartStatus::BadlyDamaged
        } else {
            PartStatus::Critical
        }
    }

    /// Pre-order: self, then each child's subtree
    pub fn collect_subtree(&self) -> Vec<&BodyPart> {
        let mut parts = Vec::new();
        self.walk(&mut |part| parts.push(part));
        parts
    }

    /// Pre-order filter on a capability flag
    pub fn find_by_capability(&self, flag: Capability) -> Vec<&BodyPart> {
        let mut parts = Vec::new();
        self.walk(&mut |part| {
            if part.has_capability(flag) {
                parts.push(part);
            }
        });
        parts
    }

    /// Case-insensitive name lookup in this subtree
    pub fn find(&self, name: &str) -> Option<&BodyPart> {
        if self.name.eq_ignore_ascii_case(name) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut BodyPart> {
        if self.name.eq_ignore_ascii_case(name) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(name))
    }

    /// Direct parent of `name` within this subtree
    pub fn parent_of(&self, name: &str) -> Option<&BodyPart> {
        for child in &self.children {
            if child.name.eq_ignore_ascii_case(name) {
                return Some(self);
            }
            if let Some(parent) = child.parent_of(name) {
                return Some(parent);
            }
        }
        None
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a BodyPart)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}
