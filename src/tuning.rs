//! Data-driven game balance
//!
//! Every balance scalar the simulation reads lives here. Defaults match the
//! shipped game feel; a partial JSON document can override individual knobs
//! for playtesting without recompiling.

use serde::{Deserialize, Serialize};

/// Balance values for one run. Fixed at `GameState` construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Cruising speed the run decays back to
    pub base_speed: f32,
    /// Extra speed granted at the start of a run
    pub start_boost: f32,
    /// Hard ceiling on speed
    pub speed_cap: f32,
    /// Speed gained on a correct answer
    pub correct_boost: f32,
    /// Speed lost on a miss (never below `base_speed`)
    pub miss_penalty: f32,
    /// Passive deceleration, units per second
    pub drag: f32,
    /// Score for a correct answer
    pub gate_reward: u64,
    /// Extra score per streak step at the time of the answer
    pub streak_bonus: u64,
    /// Hearts at the start of a run
    pub max_health: u8,
    /// Seconds until the first scheduled spawn of a fresh run
    pub first_spawn_delay: f32,
    /// Minimum seconds between gate spawns
    pub spawn_delay_base: f32,
    /// Random extra seconds added to each spawn interval
    pub spawn_delay_jitter: f32,
    /// Score per difficulty tier
    pub difficulty_step: u64,
    /// Difficulty ceiling
    pub max_difficulty: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_speed: 12.0,
            start_boost: 2.0,
            speed_cap: 40.0,
            correct_boost: 2.8,
            miss_penalty: 3.5,
            drag: 1.2,
            gate_reward: 120,
            streak_bonus: 25,
            max_health: 3,
            first_spawn_delay: 1.5,
            spawn_delay_base: 2.1,
            spawn_delay_jitter: 1.4,
            difficulty_step: 300,
            max_difficulty: 6,
        }
    }
}

impl Tuning {
    /// Parse a tuning document; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Render the full document, e.g. as a template for overrides
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
