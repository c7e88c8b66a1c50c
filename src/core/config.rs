//! Game configuration types.
//!
//! Hosts configure the engine once, at session start:
//! - `MissionConfig`: the scripted objective checked after every move
//! - `CongklakConfig`: seeds per pit, mission and playback cadence
//!
//! The defaults reproduce the standard board and the "two seeds in H2"
//! mission.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::board::{INITIAL_SEEDS_PER_PIT, MAX_BOARD_SEEDS};
use super::player::Player;
use crate::error::ConfigError;

/// Default number of seeds the mission requires.
pub const DEFAULT_MISSION_THRESHOLD: u32 = 2;

/// Default delay the presentation layer should wait between sown seeds.
pub const DEFAULT_STEP_DELAY_MS: u64 = 200;

/// How a mission threshold is compared against the target store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissionRule {
    /// The store holds at least `threshold` seeds after the move,
    /// regardless of how many the move itself added.
    #[default]
    StoreAtLeast,
    /// The move itself added at least `threshold` seeds to the store.
    GainedAtLeast,
}

/// Scripted objective evaluated after each move.
///
/// Only moves made by `target` can complete the mission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MissionConfig {
    /// Player whose store is watched, and who must be the mover.
    pub target: Player,

    /// Seeds required.
    pub threshold: u32,

    /// Comparison rule.
    pub rule: MissionRule,
}

impl MissionConfig {
    /// Create a mission watching `target`'s store.
    #[must_use]
    pub fn new(target: Player, threshold: u32) -> Self {
        Self {
            target,
            threshold,
            rule: MissionRule::default(),
        }
    }

    /// Use the given comparison rule.
    #[must_use]
    pub fn with_rule(mut self, rule: MissionRule) -> Self {
        self.rule = rule;
        self
    }

    /// Short human-readable description of the objective.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.rule {
            MissionRule::StoreAtLeast => format!(
                "{}: reach {} seeds in your store in 1 turn",
                self.target, self.threshold
            ),
            MissionRule::GainedAtLeast => format!(
                "{}: add {} seeds to your store in 1 turn",
                self.target, self.threshold
            ),
        }
    }
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self::new(Player::One, DEFAULT_MISSION_THRESHOLD)
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CongklakConfig {
    /// Seeds placed in each of the ten sowing pits at reset.
    pub seeds_per_pit: u32,

    /// Objective checked after every move.
    pub mission: MissionConfig,

    /// Suggested delay between playback frames, in milliseconds.
    ///
    /// Advisory only. The engine never waits.
    pub step_delay_ms: u64,
}

impl CongklakConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set seeds per sowing pit.
    #[must_use]
    pub fn with_seeds_per_pit(mut self, seeds: u32) -> Self {
        self.seeds_per_pit = seeds;
        self
    }

    /// Set the mission.
    #[must_use]
    pub fn with_mission(mut self, mission: MissionConfig) -> Self {
        self.mission = mission;
        self
    }

    /// Set the suggested playback delay.
    #[must_use]
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Suggested playback delay.
    #[must_use]
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    /// Check the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seeds_per_pit == 0 {
            return Err(ConfigError::Validation(
                "seeds_per_pit must be > 0".to_string(),
            ));
        }
        if u64::from(self.seeds_per_pit) * 10 > u64::from(MAX_BOARD_SEEDS) {
            return Err(ConfigError::Validation(format!(
                "seeds_per_pit {} exceeds the board limit of {} seeds",
                self.seeds_per_pit, MAX_BOARD_SEEDS
            )));
        }
        if self.mission.threshold == 0 {
            return Err(ConfigError::Validation(
                "mission threshold must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CongklakConfig {
    fn default() -> Self {
        Self {
            seeds_per_pit: INITIAL_SEEDS_PER_PIT,
            mission: MissionConfig::default(),
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
        }
    }
}
