//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Injected RNG only (any `rand::Rng`; tests use a seeded `Pcg32`)
//! - No rendering, input, or platform dependencies
//! - One atomic state transition per `tick` call

pub mod question;
pub mod state;
pub mod tick;

pub use question::{Question, create_gate, generate_question};
pub use state::{GameMode, GameState, Gate, GateStatus};
pub use tick::{difficulty_for, tick};
