//! Game state and the player's actions
//!
//! Every turn-consuming player action runs to completion: the action itself,
//! then every AI entity's reaction, before control returns to the caller.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::combat::{resolve_attack, CombatOutcome};
use crate::core::config::SimulationConfig;
use crate::core::types::{EntityId, Position, Turn};
use crate::entity::{AiState, Entity, Item, ItemKind, Stats};
use crate::simulation::log::MessageLog;
use crate::simulation::selection::{CycleDirection, TargetSelection};
use crate::world::{GroundItems, ItemRegistry, Terrain};

/// Result of a player action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Moved,
    /// Impassable tile; no turn spent
    Blocked,
    /// A non-hostile entity is in the way; no turn spent
    Obstructed(EntityId),
    /// Bumped a hostile entity; body-part targeting started, no turn spent
    Engaged(EntityId),
    Attacked(CombatOutcome),
    Waited,
    PickedUp(Item),
    NothingHere,
    /// Healed amount
    Ate(f32),
    NoFood,
    /// Targeting dropped or the target is gone
    Cancelled,
    GameOver,
}

impl ActionOutcome {
    pub fn consumed_turn(&self) -> bool {
        matches!(
            self,
            ActionOutcome::Moved
                | ActionOutcome::Attacked(_)
                | ActionOutcome::Waited
                | ActionOutcome::PickedUp(_)
                | ActionOutcome::Ate(_)
        )
    }
}

pub struct Game<T: Terrain> {
    pub player: Entity,
    pub entities: Vec<Entity>,
    pub terrain: T,
    pub items: ItemRegistry,
    pub(crate) config: SimulationConfig,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) log: MessageLog,
    turns: Turn,
    targeting: Option<TargetSelection>,
    over: bool,
}

impl<T: Terrain> Game<T> {
    pub fn new(terrain: T, player_start: Position, config: SimulationConfig, seed: u64) -> Self {
        let player = Entity::player(
            player_start,
            Stats {
                strength: config.player_strength,
                dexterity: config.player_dexterity,
            },
        );
        let log = MessageLog::new(config.message_log_capacity);
        Self {
            player,
            entities: Vec::new(),
            terrain,
            items: ItemRegistry::new(),
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            log,
            turns: 0,
            targeting: None,
            over: false,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn turns(&self) -> Turn {
        self.turns
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn messages(&self) -> &MessageLog {
        &self.log
    }

    pub fn targeting(&self) -> Option<&TargetSelection> {
        self.targeting.as_ref()
    }

    pub fn add_entity(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        self.entities.push(entity);
        id
    }

    /// Hostile wanderer with the configured goblin stats; may carry a dagger
    pub fn spawn_goblin(&mut self, pos: Position) -> EntityId {
        let number = self.entities.iter().filter(|e| e.symbol == 'g').count() + 1;
        let stats = Stats {
            strength: self.config.goblin_strength,
            dexterity: self.config.goblin_dexterity,
        };
        let mut goblin = Entity::new(format!("Goblin {}", number), 'g', pos, stats)
            .with_ai(AiState::Wander, true);
        if self.rng.gen::<f32>() < self.config.goblin_dagger_chance {
            goblin.weapon = Some(Item::dagger());
        }
        self.add_entity(goblin)
    }

    pub fn spawn_merchant(&mut self, pos: Position) -> EntityId {
        let stats = Stats {
            strength: 5,
            dexterity: 5,
        };
        let merchant = Entity::new("Merchant", 'M', pos, stats).with_ai(AiState::Idle, false);
        self.add_entity(merchant)
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Living non-player entity on a tile
    pub fn entity_at(&self, pos: Position) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|e| e.is_alive() && e.position == pos)
    }

    pub(crate) fn is_occupied(&self, pos: Position) -> bool {
        (self.player.is_alive() && self.player.position == pos) || self.entity_at(pos).is_some()
    }

    pub(crate) fn can_enter(&self, pos: Position) -> bool {
        self.terrain.is_passable(pos) && !self.is_occupied(pos)
    }

    pub fn move_player(&mut self, dx: i32, dy: i32) -> ActionOutcome {
        if self.over {
            return ActionOutcome::GameOver;
        }
        self.targeting = None;

        let target = self.player.position.offset(dx, dy);
        if !self.terrain.is_passable(target) {
            self.log.push("You can't move there!");
            return ActionOutcome::Blocked;
        }

        if let Some(occupant) = self.entity_at(target) {
            let id = occupant.id;
            if occupant.hostile {
                self.engage(id);
                return ActionOutcome::Engaged(id);
            }
            let line = format!("{} blocks your way.", occupant.name);
            self.log.push(line);
            return ActionOutcome::Obstructed(id);
        }

        self.player.position = target;
        let here = self.items.items_at(target).len();
        if here > 0 {
            self.log.push(format!("You see {} item(s) here.", here));
        }
        self.end_turn();
        ActionOutcome::Moved
    }

    fn engage(&mut self, target: EntityId) {
        let Some(entity) = self.entity(target) else {
            return;
        };
        let line = format!(
            "Select body part to attack on {} (up/down to select, confirm to attack)",
            entity.name
        );
        let parts = entity.body().targetable_parts();
        self.targeting = Some(TargetSelection::new(target, parts));
        self.log.push(line);
    }

    pub fn cycle_target(&mut self, direction: CycleDirection) {
        if let Some(selection) = self.targeting.as_mut() {
            selection.cycle(direction);
        }
    }

    pub fn cancel_targeting(&mut self) {
        self.targeting = None;
    }

    /// Strike the selected part of the engaged target
    pub fn confirm_attack(&mut self) -> ActionOutcome {
        let Some(selection) = self.targeting.take() else {
            return ActionOutcome::Cancelled;
        };
        self.attack(selection.target, Some(selection.selected()))
    }

    /// Player attacks an entity, optionally at a named part
    pub fn attack(&mut self, target: EntityId, part: Option<&str>) -> ActionOutcome {
        if self.over {
            return ActionOutcome::GameOver;
        }
        let Some(idx) = self
            .entities
            .iter()
            .position(|e| e.id == target && e.is_alive())
        else {
            return ActionOutcome::Cancelled;
        };

        let outcome = resolve_attack(
            &mut self.player,
            &mut self.entities[idx],
            part,
            &mut self.items,
            &mut self.rng,
            &self.config,
        );
        self.record_combat(&outcome);
        self.end_turn();
        ActionOutcome::Attacked(outcome)
    }

    pub fn wait(&mut self) -> ActionOutcome {
        if self.over {
            return ActionOutcome::GameOver;
        }
        self.log.push("You wait...");
        self.end_turn();
        ActionOutcome::Waited
    }

    pub fn pick_up(&mut self) -> ActionOutcome {
        if self.over {
            return ActionOutcome::GameOver;
        }
        let Some(item) = self.items.take_first(self.player.position) else {
            self.log.push("There's nothing here to pick up.");
            return ActionOutcome::NothingHere;
        };
        self.log.push(format!("You pick up {}.", item.name));
        self.player.inventory.push(item.clone());
        self.end_turn();
        ActionOutcome::PickedUp(item)
    }

    /// Eat the first food carried; only torso bruises recover
    pub fn eat(&mut self) -> ActionOutcome {
        if self.over {
            return ActionOutcome::GameOver;
        }
        let Some(idx) = self
            .player
            .inventory
            .iter()
            .position(|i| i.kind == ItemKind::Food)
        else {
            self.log.push("You have nothing to eat.");
            return ActionOutcome::NoFood;
        };
        let food = self.player.inventory.remove(idx);
        let healed = self.player.heal(food.heals as f32);
        self.log.push(format!("You eat the {}.", food.name));
        self.end_turn();
        ActionOutcome::Ate(healed)
    }

    /// Narrated summary of the player's body
    pub fn body_status_report(&self) -> Vec<String> {
        let status = self.player.body_status();
        let mut lines = vec![
            format!(
                "Body Status: {}% consciousness, {}% breathing, {}% blood pumping",
                status.consciousness, status.breathing, status.blood_pumping
            ),
            format!(
                "Pain: {}, Healthy: {}, Damaged: {}, Critical: {}",
                status.pain, status.healthy_parts, status.damaged_parts, status.critical_parts
            ),
        ];
        if status.severed_parts > 0 {
            lines.push(format!("WARNING: {} body parts severed!", status.severed_parts));
        }
        let critical: Vec<String> = self
            .player
            .body()
            .critical_parts()
            .iter()
            .map(|p| format!("{} ({}%)", p.name, p.health_percent()))
            .collect();
        if !critical.is_empty() {
            lines.push(format!("Critical parts: {}", critical.join(", ")));
        }
        lines
    }

    pub fn show_body_status(&mut self) {
        let lines = self.body_status_report();
        self.log.extend(lines);
    }

    /// Narrate a resolved attack and end the game if the player fell
    pub(crate) fn record_combat(&mut self, outcome: &CombatOutcome) {
        self.log.extend(outcome.messages.iter().cloned());
        if self.over || self.player.is_alive() {
            return;
        }

        let fatal = [outcome.strike.as_ref(), outcome.counter.as_ref()]
            .into_iter()
            .flatten()
            .find(|s| s.killed && s.defender == self.player.id);
        if let Some(blow) = fatal {
            let killer = self
                .entity(blow.attacker)
                .map_or_else(|| "an unknown foe".to_string(), |e| e.name.clone());
            self.log.push(format!(
                "You have been slain by {} ({} destroyed)!",
                killer, blow.part
            ));
        }
        self.over = true;
        self.log.push("GAME OVER");
    }

    fn end_turn(&mut self) {
        self.targeting = None;
        self.turns += 1;
        if !self.over {
            self.update_entities();
        }
    }
}
