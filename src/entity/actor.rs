//! Entities: the player and every creature in the dungeon
//!
//! Life status is a projection of the body. `alive` and `ai_state` only
//! change as a consequence of body damage, and death is final.

use serde::{Deserialize, Serialize};

use crate::body::{Body, Capability, DamageKind, StatusSummary};
use crate::core::types::{EntityId, Position};
use crate::entity::item::Item;

/// AI state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiState {
    Idle,
    Wander,
    Hostile,
    /// Reserved, no behavior yet
    Flee,
    /// Terminal
    Dead,
}

/// What a single blow did to an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wound {
    /// Structural damage past the tissue layers
    pub applied: f32,
    /// This blow was the fatal one
    pub killed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub strength: u32,
    pub dexterity: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            strength: 10,
            dexterity: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub symbol: char,
    pub position: Position,
    pub stats: Stats,
    pub weapon: Option<Item>,
    /// Driven by the turn loop
    pub ai: bool,
    ai_state: AiState,
    pub hostile: bool,
    pub inventory: Vec<Item>,
    body: Body,
    alive: bool,
    /// Display projection of vital capacities
    pub hp: u32,
    pub max_hp: u32,
}

impl Entity {
    pub fn new(name: impl Into<String>, symbol: char, position: Position, stats: Stats) -> Self {
        let mut entity = Self {
            id: EntityId::new(),
            name: name.into(),
            symbol,
            position,
            stats,
            weapon: None,
            ai: false,
            ai_state: AiState::Idle,
            hostile: false,
            inventory: Vec::new(),
            body: Body::human(),
            alive: true,
            hp: 0,
            max_hp: 100,
        };
        entity.alive = entity.body.is_alive();
        entity.refresh_hp();
        entity
    }

    pub fn player(position: Position, stats: Stats) -> Self {
        Self::new("Player", '@', position, stats)
    }

    /// Hand the entity to the turn loop in the given starting state
    pub fn with_ai(mut self, state: AiState, hostile: bool) -> Self {
        self.ai = true;
        self.hostile = hostile;
        if self.alive {
            self.ai_state = state;
        }
        self
    }

    pub fn with_weapon(mut self, weapon: Item) -> Self {
        self.weapon = Some(weapon);
        self
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn ai_state(&self) -> AiState {
        self.ai_state
    }

    /// Change AI state. Dead entities stay dead and nothing else may enter Dead.
    pub fn set_ai_state(&mut self, state: AiState) {
        if self.ai_state == AiState::Dead || state == AiState::Dead {
            return;
        }
        self.ai_state = state;
    }

    /// Strength bonus plus weapon damage
    pub fn attack_damage(&self) -> u32 {
        self.stats.strength / 2 + self.weapon.as_ref().map_or(0, |w| w.damage)
    }

    pub fn damage_kind(&self) -> DamageKind {
        self.weapon
            .as_ref()
            .map_or(DamageKind::Bruise, |w| w.weapon_class().damage_kind())
    }

    /// Damage one part and update life status
    pub fn wound(&mut self, part: &str, amount: f32, kind: DamageKind) -> Wound {
        if !self.alive {
            return Wound { applied: 0.0, killed: false };
        }
        let applied = self.body.apply_damage(part, amount, kind);
        self.refresh_hp();

        let killed = !self.body.is_alive();
        if killed {
            self.alive = false;
            self.ai_state = AiState::Dead;
            tracing::info!(entity = %self.name, part, "killed");
        }
        Wound { applied, killed }
    }

    /// Damage one part; returns true if this hit killed the entity.
    pub fn take_damage_to_part(&mut self, part: &str, amount: f32, kind: DamageKind) -> bool {
        self.wound(part, amount, kind).killed
    }

    /// Legacy damage entry point: bruises the torso
    pub fn take_damage(&mut self, amount: f32) -> bool {
        self.take_damage_to_part("torso", amount, DamageKind::Bruise)
    }

    /// Legacy recovery: only torso bruises heal. Returns the amount healed.
    pub fn heal(&mut self, amount: f32) -> f32 {
        if !self.alive {
            return 0.0;
        }
        let healed = self.body.heal_torso_bruise(amount);
        self.refresh_hp();
        healed
    }

    pub fn body_status(&self) -> StatusSummary {
        self.body.status_summary()
    }

    /// Hand over everything carried
    pub fn take_inventory(&mut self) -> Vec<Item> {
        std::mem::take(&mut self.inventory)
    }

    fn refresh_hp(&mut self) {
        let consciousness = self.body.capacity_for(Capability::Consciousness);
        let blood = self.body.capacity_for(Capability::BloodPumping);
        self.max_hp = 100;
        self.hp = (((consciousness + blood) / 2.0) * 100.0).floor() as u32;
    }
}
