//! Per-frame state advancement
//!
//! One call advances the world, resolves gates crossing the player plane,
//! despawns passed gates, schedules spawns, and applies passive drag, all as
//! one atomic transition. Callers should clamp `dt` to
//! [`crate::consts::MAX_FRAME_DT`].

use rand::Rng;

use super::question::create_gate;
use super::state::{GameMode, GameState, GateStatus};
use crate::consts::{GATE_DESPAWN_Z, GATE_RESOLVE_Z};
use crate::tuning::Tuning;

/// Difficulty tier for a score: one step per `difficulty_step` points,
/// capped at `max_difficulty`
pub fn difficulty_for(score: u64, tuning: &Tuning) -> u32 {
    (score / tuning.difficulty_step + 1).min(tuning.max_difficulty as u64) as u32
}

/// Advance the game state by `dt` seconds
pub fn tick<R: Rng>(state: &mut GameState, dt: f32, rng: &mut R) {
    if state.mode != GameMode::Playing {
        return;
    }

    let tuning = state.tuning;
    let move_distance = state.speed * dt;
    state.distance += move_distance;
    state.spawn_timer -= dt;

    for gate in &mut state.gates {
        gate.z += move_distance;
    }

    // Resolve gates crossing the player plane. The lane held *now* decides
    // the outcome, not the lane at spawn time. A miss that empties health
    // ends the run, but the remaining gates of this tick still resolve.
    let lane_index = state.lane_index;
    for gate in &mut state.gates {
        if gate.resolved || gate.z <= GATE_RESOLVE_Z {
            continue;
        }
        gate.resolved = true;

        if lane_index == gate.correct_index {
            gate.status = GateStatus::Correct;
            state.score += tuning.gate_reward + tuning.streak_bonus * state.streak as u64;
            state.streak += 1;
            state.speed = (state.speed + tuning.correct_boost).min(tuning.speed_cap);
        } else {
            gate.status = GateStatus::Missed;
            state.streak = 0;
            state.health = state.health.saturating_sub(1);
            state.speed = (state.speed - tuning.miss_penalty).max(tuning.base_speed);
            if state.health == 0 {
                // `end_game` would reborrow all of `state` under the gate
                // iteration, so its body is inlined here
                if state.mode == GameMode::Playing {
                    log::info!(
                        "run over: score {} after {:.1} distance",
                        state.score,
                        state.distance
                    );
                }
                state.mode = GameMode::GameOver;
                state.speed = 0.0;
            }
        }
    }

    // Passed gates are dropped whether or not they resolved
    state.gates.retain(|g| g.z < GATE_DESPAWN_Z);

    if state.spawn_timer <= 0.0 {
        let difficulty = difficulty_for(state.score, &tuning);
        let id = state.next_gate_id();
        state.gates.push(create_gate(id, difficulty, rng));
        state.spawn_timer =
            tuning.spawn_delay_base + rng.random::<f32>() * tuning.spawn_delay_jitter;
        log::debug!("spawned gate {id} at difficulty {difficulty}");
    }

    state.active_gate_id = state
        .gates
        .iter()
        .filter(|g| g.status == GateStatus::Pending)
        .min_by(|a, b| a.z.partial_cmp(&b.z).unwrap_or(std::cmp::Ordering::Equal))
        .map(|g| g.id);

    // Speed gained at gates bleeds back toward cruising speed
    if state.mode == GameMode::Playing {
        state.speed = (state.speed - dt * tuning.drag).max(tuning.base_speed);
    }
}
