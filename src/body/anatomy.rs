//! Whole-body model: part tree, cached capacities, vitality

use std::cell::RefCell;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::body::capability::{Capability, DamageKind};
use crate::body::constants::{SUMMARY_CRITICAL, SUMMARY_HEALTHY};
use crate::body::part::BodyPart;
use crate::body::tissue::Tissue;

/// Counts of parts by condition plus headline capacities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub total_parts: usize,
    pub healthy_parts: usize,
    pub damaged_parts: usize,
    pub critical_parts: usize,
    pub severed_parts: usize,
    pub pain: u32,
    /// Percentages, floored
    pub consciousness: u32,
    pub breathing: u32,
    pub blood_pumping: u32,
}

/// A body: one root part plus a derived-capacity cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    root: BodyPart,
    /// Cleared on every damage or heal
    #[serde(skip)]
    capacity_cache: RefCell<AHashMap<Capability, f32>>,
}

impl Body {
    pub fn from_root(root: BodyPart) -> Self {
        Self {
            root,
            capacity_cache: RefCell::new(AHashMap::new()),
        }
    }

    /// Standard human: torso with head, arms, legs, lungs, heart
    pub fn human() -> Self {
        use Capability::*;
        use Tissue::*;

        let head = BodyPart::new("head", 8.0, &[Consciousness, Sight, Eating], &[Skin, Muscle, Bone])
            .with_children(vec![
                BodyPart::new("brain", 3.0, &[Consciousness], &[Organ]),
                BodyPart::new("left eye", 1.0, &[Sight], &[Skin]),
                BodyPart::new("right eye", 1.0, &[Sight], &[Skin]),
            ]);

        let arm = |side: &str| {
            BodyPart::new(format!("{side} arm"), 6.0, &[Grasp], &[Skin, Muscle, Bone]).with_children(
                vec![BodyPart::new(format!("{side} hand"), 2.0, &[Grasp], &[Skin, Muscle])],
            )
        };

        let leg = |side: &str| {
            BodyPart::new(format!("{side} leg"), 8.0, &[Moving], &[Skin, Muscle, Bone])
                .with_children(vec![BodyPart::new(format!("{side} foot"), 2.0, &[], &[Skin, Muscle])])
        };

        let torso = BodyPart::new("torso", 20.0, &[BloodPumping], &[Skin, Fat, Muscle]).with_children(
            vec![
                head,
                arm("left"),
                arm("right"),
                leg("left"),
                leg("right"),
                BodyPart::new("lungs", 4.0, &[Breathing], &[Organ]),
                BodyPart::new("heart", 2.0, &[BloodPumping], &[Organ]),
            ],
        );

        Self::from_root(torso)
    }

    pub fn root(&self) -> &BodyPart {
        &self.root
    }

    /// Every part, pre-order from the root
    pub fn parts(&self) -> Vec<&BodyPart> {
        self.root.collect_subtree()
    }

    pub fn part(&self, name: &str) -> Option<&BodyPart> {
        self.root.find(name)
    }

    pub fn parent_of(&self, name: &str) -> Option<&BodyPart> {
        self.root.parent_of(name)
    }

    pub fn find_by_capability(&self, flag: Capability) -> Vec<&BodyPart> {
        self.root.find_by_capability(flag)
    }

    /// Mean contribution of every part carrying the flag (0 if none do)
    pub fn capacity_for(&self, flag: Capability) -> f32 {
        if let Some(cached) = self.capacity_cache.borrow().get(&flag) {
            return *cached;
        }

        let parts = self.find_by_capability(flag);
        let capacity = if parts.is_empty() {
            0.0
        } else {
            parts.iter().map(|p| p.capacity_for(flag)).sum::<f32>() / parts.len() as f32
        };

        self.capacity_cache.borrow_mut().insert(flag, capacity);
        capacity
    }

    pub fn invalidate_cache(&self) {
        self.capacity_cache.borrow_mut().clear();
    }

    /// Damage a named part. Unknown names are a warned no-op returning 0.
    pub fn apply_damage(&mut self, part_name: &str, amount: f32, kind: DamageKind) -> f32 {
        let Some(part) = self.root.find_mut(part_name) else {
            tracing::warn!("Body part not found: {}", part_name);
            return 0.0;
        };

        let actual = part.apply_damage(amount, kind);
        self.invalidate_cache();
        actual
    }

    /// Legacy recovery: restores torso bruise damage only
    pub fn heal_torso_bruise(&mut self, amount: f32) -> f32 {
        let Some(torso) = self.root.find_mut("torso") else {
            return 0.0;
        };
        let healed = torso.heal_bruise(amount);
        self.invalidate_cache();
        healed
    }

    /// Alive needs both consciousness and blood pumping
    pub fn is_alive(&self) -> bool {
        self.capacity_for(Capability::Consciousness) > 0.0
            && self.capacity_for(Capability::BloodPumping) > 0.0
    }

    pub fn total_pain(&self) -> f32 {
        self.parts().iter().map(|p| p.pain()).sum()
    }

    /// Names of parts that can still be hit, in traversal order
    pub fn targetable_parts(&self) -> Vec<String> {
        self.parts()
            .into_iter()
            .filter(|p| !p.is_destroyed())
            .map(|p| p.name.clone())
            .collect()
    }

    /// Intact parts at or below the critical bracket
    pub fn critical_parts(&self) -> Vec<&BodyPart> {
        self.parts()
            .into_iter()
            .filter(|p| !p.is_destroyed() && p.health() <= SUMMARY_CRITICAL)
            .collect()
    }

    pub fn status_summary(&self) -> StatusSummary {
        let parts = self.parts();
        let count = |pred: &dyn Fn(&BodyPart) -> bool| parts.iter().filter(|p| pred(p)).count();
        let percent = |flag| (self.capacity_for(flag) * 100.0).floor() as u32;

        StatusSummary {
            total_parts: parts.len(),
            healthy_parts: count(&|p| p.health() > SUMMARY_HEALTHY),
            damaged_parts: count(&|p| {
                !p.is_destroyed() && p.health() <= SUMMARY_HEALTHY && p.health() > SUMMARY_CRITICAL
            }),
            critical_parts: count(&|p| !p.is_destroyed() && p.health() <= SUMMARY_CRITICAL),
            severed_parts: count(&|p| p.is_destroyed()),
            pain: self.total_pain().floor() as u32,
            consciousness: percent(Capability::Consciousness),
            breathing: percent(Capability::Breathing),
            blood_pumping: percent(Capability::BloodPumping),
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::human()
    }
}
