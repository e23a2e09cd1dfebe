//! Entity AI: wander, notice the player, pursue, attack
//!
//! Dead entities are skipped. Idle and flee do nothing yet.

use rand::Rng;

use crate::combat::resolve_attack;
use crate::core::types::CARDINALS;
use crate::entity::AiState;
use crate::simulation::game::Game;
use crate::world::Terrain;

impl<T: Terrain> Game<T> {
    /// Advance every AI-driven entity by one turn
    pub(crate) fn update_entities(&mut self) {
        for idx in 0..self.entities.len() {
            if self.is_over() {
                break;
            }
            let entity = &self.entities[idx];
            if !entity.ai || !entity.is_alive() {
                continue;
            }
            match entity.ai_state() {
                AiState::Wander => self.wander(idx),
                AiState::Hostile => self.pursue(idx),
                AiState::Idle | AiState::Flee | AiState::Dead => {}
            }
        }
    }

    fn wander(&mut self, idx: usize) {
        if self.rng.gen::<f32>() < self.config.wander_step_chance {
            let (dx, dy) = CARDINALS[self.rng.gen_range(0..CARDINALS.len())];
            let target = self.entities[idx].position.offset(dx, dy);
            if self.can_enter(target) {
                self.entities[idx].position = target;
            }
        }

        let entity = &self.entities[idx];
        let distance = entity.position.distance(&self.player.position);
        if entity.hostile && distance <= self.config.aggro_radius {
            tracing::debug!(entity = %entity.name, distance, "turns hostile");
            self.entities[idx].set_ai_state(AiState::Hostile);
        }
    }

    fn pursue(&mut self, idx: usize) {
        let from = self.entities[idx].position;
        let player = self.player.position;
        if from.distance(&player) > self.config.pursuit_radius {
            return;
        }

        let step = match ((player.x - from.x).signum(), (player.y - from.y).signum()) {
            (0, 0) => None,
            (sx, 0) => Some((sx, 0)),
            (0, sy) => Some((0, sy)),
            (sx, sy) => {
                if self.rng.gen_bool(0.5) {
                    Some((sx, 0))
                } else {
                    Some((0, sy))
                }
            }
        };
        if let Some((dx, dy)) = step {
            let target = from.offset(dx, dy);
            if self.can_enter(target) {
                self.entities[idx].position = target;
            }
        }

        if !self.entities[idx].position.is_adjacent(&player) {
            return;
        }
        if self.rng.gen::<f32>() < self.config.attack_chance {
            let outcome = resolve_attack(
                &mut self.entities[idx],
                &mut self.player,
                None,
                &mut self.items,
                &mut self.rng,
                &self.config,
            );
            self.record_combat(&outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::body::DamageKind;
    use crate::core::config::SimulationConfig;
    use crate::core::types::Position;
    use crate::entity::{AiState, Entity, Stats};
    use crate::simulation::game::Game;
    use crate::world::GridMap;

    fn game_with(config: SimulationConfig) -> Game<GridMap> {
        Game::new(GridMap::open(30, 30), Position::new(10, 10), config, 42)
    }

    fn goblin_at(pos: Position, state: AiState) -> Entity {
        Entity::new("Goblin", 'g', pos, Stats { strength: 8, dexterity: 8 }).with_ai(state, true)
    }

    #[test]
    fn test_wanderer_turns_hostile_within_aggro_radius() {
        let config = SimulationConfig { wander_step_chance: 0.0, ..Default::default() };
        let mut game = game_with(config);
        let near = game.add_entity(goblin_at(Position::new(14, 10), AiState::Wander));
        let far = game.add_entity(goblin_at(Position::new(25, 25), AiState::Wander));

        game.update_entities();

        assert_eq!(game.entity(near).unwrap().ai_state(), AiState::Hostile);
        assert_eq!(game.entity(far).unwrap().ai_state(), AiState::Wander);
    }

    #[test]
    fn test_peaceful_wanderer_never_turns_hostile() {
        let config = SimulationConfig { wander_step_chance: 0.0, ..Default::default() };
        let mut game = game_with(config);
        let mut npc = goblin_at(Position::new(11, 10), AiState::Wander);
        npc.hostile = false;
        let id = game.add_entity(npc);

        game.update_entities();
        assert_eq!(game.entity(id).unwrap().ai_state(), AiState::Wander);
    }

    #[test]
    fn test_wander_steps_one_cardinal_tile() {
        let config = SimulationConfig { wander_step_chance: 1.0, ..Default::default() };
        let mut game = game_with(config);
        let start = Position::new(25, 25);
        let id = game.add_entity(goblin_at(start, AiState::Wander));

        game.update_entities();
        let now = game.entity(id).unwrap().position;
        assert_eq!((now.x - start.x).abs() + (now.y - start.y).abs(), 1);
    }

    #[test]
    fn test_boxed_in_wanderer_forfeits_its_step() {
        let config = SimulationConfig { wander_step_chance: 1.0, ..Default::default() };
        let mut game = game_with(config);
        let pocket = Position::new(20, 20);
        game.terrain.block(Position::new(20, 19));
        game.terrain.block(Position::new(20, 21));
        game.terrain.block(Position::new(19, 20));
        game.add_entity(goblin_at(Position::new(21, 20), AiState::Idle));
        let mut npc = goblin_at(pocket, AiState::Wander);
        npc.hostile = false;
        let id = game.add_entity(npc);

        for _ in 0..50 {
            game.update_entities();
            assert_eq!(game.entity(id).unwrap().position, pocket);
        }
        assert_eq!(game.entity(id).unwrap().ai_state(), AiState::Wander);
    }

    #[test]
    fn test_hostile_closes_distance_on_one_axis() {
        let config = SimulationConfig { attack_chance: 0.0, ..Default::default() };
        let mut game = game_with(config);
        let id = game.add_entity(goblin_at(Position::new(14, 13), AiState::Hostile));

        game.update_entities();
        let now = game.entity(id).unwrap().position;
        assert!(now == Position::new(13, 13) || now == Position::new(14, 12));
    }

    #[test]
    fn test_hostile_out_of_pursuit_radius_stays_put() {
        let mut game = game_with(SimulationConfig::default());
        let start = Position::new(20, 20);
        let id = game.add_entity(goblin_at(start, AiState::Hostile));

        game.update_entities();
        assert_eq!(game.entity(id).unwrap().position, start);
    }

    #[test]
    fn test_hostile_never_steps_onto_player() {
        let config = SimulationConfig { attack_chance: 0.0, ..Default::default() };
        let mut game = game_with(config);
        let id = game.add_entity(goblin_at(Position::new(11, 10), AiState::Hostile));

        for _ in 0..20 {
            game.update_entities();
            assert_ne!(game.entity(id).unwrap().position, game.player.position);
        }
    }

    #[test]
    fn test_adjacent_hostile_attacks_when_roll_allows() {
        let config = SimulationConfig { attack_chance: 1.0, ..Default::default() };
        let mut game = game_with(config);
        game.add_entity(goblin_at(Position::new(11, 10), AiState::Hostile));

        game.update_entities();
        assert!(game.messages().lines().any(|l| l.starts_with("Goblin hits Player's")));
    }

    #[test]
    fn test_dead_and_idle_entities_are_skipped() {
        let config = SimulationConfig {
            wander_step_chance: 1.0,
            attack_chance: 1.0,
            ..Default::default()
        };
        let mut game = game_with(config);
        let mut corpse = goblin_at(Position::new(11, 10), AiState::Hostile);
        corpse.take_damage_to_part("heart", 1e6, DamageKind::Cut);
        corpse.take_damage_to_part("torso", 1e6, DamageKind::Cut);
        let corpse = game.add_entity(corpse);
        let idle = game.add_entity(goblin_at(Position::new(10, 11), AiState::Idle));

        game.update_entities();

        assert_eq!(game.entity(corpse).unwrap().position, Position::new(11, 10));
        assert_eq!(game.entity(idle).unwrap().position, Position::new(10, 11));
        assert!(game.messages().is_empty());
    }
}
