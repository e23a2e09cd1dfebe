//! Simulation configuration with documented constants
//!
//! Tunable numbers of combat narration and the turn loop live here; the
//! body model's fixed constants are in `body::constants`.
//! Defaults are the stock tuning; a TOML file may override
//! any subset of them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};

/// Configuration for the simulation systems
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === COMBAT ===
    /// Accumulated pain above which a hit reports "severe pain"
    pub severe_pain_threshold: u32,

    // === AI ===
    /// Chance per turn that a wandering entity attempts a step
    pub wander_step_chance: f32,

    /// Distance at which a wandering hostile entity notices the player
    pub aggro_radius: f32,

    /// Distance within which a hostile entity keeps chasing the player
    ///
    /// Should be >= aggro_radius, otherwise freshly aggroed entities never move.
    pub pursuit_radius: f32,

    /// Chance per turn that an adjacent hostile entity attacks
    pub attack_chance: f32,

    // === DISPLAY ===
    /// Number of narrative lines kept in the message log
    pub message_log_capacity: usize,

    // === SPAWNS ===
    pub player_strength: u32,
    pub player_dexterity: u32,
    pub goblin_strength: u32,
    pub goblin_dexterity: u32,
    /// Chance that a spawned goblin carries a dagger
    pub goblin_dagger_chance: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            severe_pain_threshold: 50,

            wander_step_chance: 0.1,
            aggro_radius: 6.0,
            pursuit_radius: 8.0,
            attack_chance: 0.3,

            message_log_capacity: 10,

            player_strength: 12,
            player_dexterity: 12,
            goblin_strength: 8,
            goblin_dexterity: 8,
            goblin_dagger_chance: 0.5,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) TOML override and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML override file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        for (name, chance) in [
            ("wander_step_chance", self.wander_step_chance),
            ("attack_chance", self.attack_chance),
            ("goblin_dagger_chance", self.goblin_dagger_chance),
        ] {
            if !(0.0..=1.0).contains(&chance) {
                return Err(SimError::InvalidConfig(format!(
                    "{} ({}) must be a probability",
                    name, chance
                )));
            }
        }

        if self.pursuit_radius < self.aggro_radius {
            return Err(SimError::InvalidConfig(format!(
                "pursuit_radius ({}) should be >= aggro_radius ({})",
                self.pursuit_radius, self.aggro_radius
            )));
        }

        if self.message_log_capacity == 0 {
            return Err(SimError::InvalidConfig(
                "message_log_capacity must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
