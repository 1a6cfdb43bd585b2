//! Gate Rush - a lane-runner arcade game with arithmetic gates
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gate lifecycle, scoring, game state)
//! - `tuning`: Data-driven game balance
//!
//! The crate holds no process boundary of its own: a frame driver calls
//! [`sim::tick`] once per rendered frame, an input driver calls
//! [`GameState::move_lane`] on discrete events, and a renderer reads the
//! resulting [`GameState`] without mutating it.

pub mod sim;
pub mod tuning;

pub use sim::{GameMode, GameState, Gate, GateStatus, tick};
pub use tuning::Tuning;

/// Track geometry constants
pub mod consts {
    /// Number of lanes across the track
    pub const LANE_COUNT: usize = 3;
    /// Lane the player starts in
    pub const CENTER_LANE: usize = 1;
    /// World units between adjacent lane centerlines
    pub const LANE_WIDTH: f32 = 3.2;

    /// Visible track depth; gates spawn at `z = -ROAD_DEPTH`
    pub const ROAD_DEPTH: f32 = 70.0;
    /// Gate position at which it is scored against the player's lane
    pub const GATE_RESOLVE_Z: f32 = -1.0;
    /// Gate position past the player at which it is dropped
    pub const GATE_DESPAWN_Z: f32 = 14.0;

    /// Upper bound frame drivers should clamp `dt` to before ticking,
    /// so a frame hitch cannot skip a gate past its resolution window
    pub const MAX_FRAME_DT: f32 = 0.1;
}

use consts::{CENTER_LANE, LANE_COUNT, LANE_WIDTH};

/// Horizontal world offset of a lane's centerline (center lane is 0)
#[inline]
pub fn lane_offset(index: usize) -> f32 {
    (index as f32 - CENTER_LANE as f32) * LANE_WIDTH
}

/// Offsets for every lane, in lane order
pub fn lane_offsets() -> [f32; LANE_COUNT] {
    std::array::from_fn(lane_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_offsets_are_centered() {
        let offsets = lane_offsets();
        assert_eq!(offsets.len(), LANE_COUNT);
        assert!(offsets[CENTER_LANE].abs() < f32::EPSILON);
        assert!((offsets[0] + offsets[2]).abs() < f32::EPSILON);
        assert!((offsets[2] - LANE_WIDTH).abs() < f32::EPSILON);
    }
}
