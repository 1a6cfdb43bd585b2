//! Game state and core simulation types
//!
//! The authoritative mutable state for one play session lives here, along
//! with its lifecycle operations (`reset`, `move_lane`, `end_game`). The
//! per-frame transition is in [`super::tick`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::question::create_gate;
use crate::consts::{CENTER_LANE, LANE_COUNT};
use crate::tuning::Tuning;

/// Outcome of a gate once it reaches the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateStatus {
    /// Not yet reached the resolution plane
    Pending,
    /// Player held the answer lane at the crossing
    Correct,
    /// Player held a wrong lane at the crossing
    Missed,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Active gameplay
    Playing,
    /// Run ended; only `reset` leaves this state
    GameOver,
}

/// A spawned question checkpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    pub id: u32,
    /// Signed distance from the player's resolution plane. Spawns far
    /// negative and increases as the world advances.
    pub z: f32,
    /// Display string; the core never parses it after creation
    pub question: String,
    /// One option per lane, insertion order = lane assignment
    pub options: Vec<i32>,
    /// Lane holding the answer, `options[correct_index] == answer`
    pub correct_index: usize,
    pub status: GateStatus,
    /// Guards re-entry: a gate resolves at most once
    pub resolved: bool,
}

/// Complete game state for one play session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub mode: GameMode,
    /// Current scalar speed; `>= tuning.base_speed` while playing, 0 on game over
    pub speed: f32,
    /// Total world distance traveled
    pub distance: f32,
    pub score: u64,
    /// Consecutive correct resolutions, reset on any miss
    pub streak: u32,
    pub health: u8,
    /// Player lane, in `[0, LANE_COUNT)`
    pub lane_index: usize,
    /// Countdown to the next gate spawn
    pub spawn_timer: f32,
    /// Active gates, iteration order irrelevant for correctness
    pub gates: Vec<Gate>,
    /// Nearest pending gate, recomputed every tick
    pub active_gate_id: Option<u32>,
    /// Balance values, fixed at construction and kept across `reset`
    pub tuning: Tuning,
    /// Next gate ID
    next_id: u32,
}

impl GameState {
    /// Create a playable state with default balance
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::with_tuning(Tuning::default(), rng)
    }

    /// Create a playable state with the given balance
    pub fn with_tuning<R: Rng>(tuning: Tuning, rng: &mut R) -> Self {
        let mut state = Self {
            mode: GameMode::Playing,
            speed: 0.0,
            distance: 0.0,
            score: 0,
            streak: 0,
            health: 0,
            lane_index: CENTER_LANE,
            spawn_timer: 0.0,
            gates: Vec::new(),
            active_gate_id: None,
            tuning,
            next_id: 1,
        };
        state.reset(rng);
        state
    }

    /// Reinitialize to a fresh run and spawn the first gate.
    ///
    /// Callable any time, including mid-run and after game over; always
    /// produces a playable state.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        let tuning = self.tuning;
        self.mode = GameMode::Playing;
        self.speed = tuning.base_speed + tuning.start_boost;
        self.distance = 0.0;
        self.score = 0;
        self.streak = 0;
        self.health = tuning.max_health;
        self.lane_index = CENTER_LANE;
        self.spawn_timer = tuning.first_spawn_delay;
        self.next_id = 1;
        self.gates.clear();

        let id = self.next_gate_id();
        self.gates.push(create_gate(id, 1, rng));
        self.active_gate_id = Some(id);
        log::debug!("run reset, first gate {id} spawned");
    }

    /// Allocate a new gate ID
    pub fn next_gate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Shift the player one lane over. `direction` is -1 or +1; the result
    /// clamps to the track edges, and hitting an edge is a silent no-op.
    pub fn move_lane(&mut self, direction: i32) {
        if self.mode != GameMode::Playing {
            return;
        }
        let max = (LANE_COUNT - 1) as i32;
        self.lane_index = (self.lane_index as i32 + direction).clamp(0, max) as usize;
    }

    /// Force the run to end. Idempotent.
    pub fn end_game(&mut self) {
        if self.mode != GameMode::GameOver {
            log::info!(
                "run over: score {} after {:.1} distance",
                self.score,
                self.distance
            );
        }
        self.mode = GameMode::GameOver;
        self.speed = 0.0;
    }

    /// The nearest unresolved gate, if any
    pub fn active_gate(&self) -> Option<&Gate> {
        self.active_gate_id
            .and_then(|id| self.gates.iter().find(|g| g.id == id))
    }
}
