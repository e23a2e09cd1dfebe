//! Attack resolution between two entities
//!
//! One call resolves one blow and at most one reciprocal blow from a hostile
//! defender. A counter-attack never triggers another.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::body::{DamageKind, PartStatus};
use crate::combat::targeting::select_target_part;
use crate::core::config::SimulationConfig;
use crate::core::types::EntityId;
use crate::entity::{Entity, Wound};
use crate::world::GroundItems;

/// A single resolved blow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strike {
    pub attacker: EntityId,
    pub defender: EntityId,
    pub part: String,
    /// Damage swung, before tissue absorption
    pub damage: u32,
    /// Structural damage that landed
    pub applied: f32,
    pub kind: DamageKind,
    /// `None` when the named part does not exist
    pub part_status: Option<PartStatus>,
    pub killed: bool,
}

/// Everything one attack produced, plus its narration in order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatOutcome {
    pub strike: Option<Strike>,
    pub counter: Option<Strike>,
    pub messages: Vec<String>,
}

impl CombatOutcome {
    pub fn defender_killed(&self) -> bool {
        self.strike.as_ref().is_some_and(|s| s.killed)
    }

    pub fn attacker_killed(&self) -> bool {
        self.counter.as_ref().is_some_and(|s| s.killed)
    }
}

/// Resolve `attacker` hitting `defender`.
///
/// `target_part` picks the part explicitly; otherwise a weighted random part
/// is chosen. Attacks involving a dead entity are no-ops.
pub fn resolve_attack<R, G>(
    attacker: &mut Entity,
    defender: &mut Entity,
    target_part: Option<&str>,
    ground: &mut G,
    rng: &mut R,
    config: &SimulationConfig,
) -> CombatOutcome
where
    R: Rng + ?Sized,
    G: GroundItems + ?Sized,
{
    let mut outcome = CombatOutcome::default();
    if !attacker.is_alive() || !defender.is_alive() {
        return outcome;
    }

    let Some(blow) =
        deliver_blow(attacker, defender, target_part, ground, rng, config, &mut outcome.messages)
    else {
        return outcome;
    };
    let defender_survived = !blow.killed;
    outcome.strike = Some(blow);

    if defender_survived && defender.hostile && defender.is_alive() {
        outcome.counter =
            deliver_blow(defender, attacker, None, ground, rng, config, &mut outcome.messages);
    }

    outcome
}

fn deliver_blow<R, G>(
    attacker: &Entity,
    defender: &mut Entity,
    target_part: Option<&str>,
    ground: &mut G,
    rng: &mut R,
    config: &SimulationConfig,
    messages: &mut Vec<String>,
) -> Option<Strike>
where
    R: Rng + ?Sized,
    G: GroundItems + ?Sized,
{
    let part = match target_part {
        Some(name) => name.to_string(),
        None => select_target_part(defender.body(), rng)?,
    };

    let damage = attacker.attack_damage();
    let kind = attacker.damage_kind();
    let Wound { applied, killed } = defender.wound(&part, damage as f32, kind);
    let part_status = defender.body().part(&part).map(|p| p.status());

    tracing::debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        part = %part,
        damage,
        applied,
        killed,
        "strike"
    );

    if killed {
        messages.push(format!(
            "{} kills {} by destroying the {}!",
            attacker.name, defender.name, part
        ));
        let dropped = defender.take_inventory();
        if !dropped.is_empty() {
            ground.drop_items(defender.position, dropped);
        }
    } else {
        let status = part_status.map_or_else(|| "unknown".to_string(), |s| s.to_string());
        messages.push(format!(
            "{} hits {}'s {} for {} {} damage ({})!",
            attacker.name, defender.name, part, damage, kind, status
        ));
        if defender.body_status().pain > config.severe_pain_threshold {
            messages.push(format!("{} is in severe pain!", defender.name));
        }
    }

    Some(Strike {
        attacker: attacker.id,
        defender: defender.id,
        part,
        damage,
        applied,
        kind,
        part_status,
        killed,
    })
}
