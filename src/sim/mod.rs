//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Obstacles kept in spawn order
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod progression;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Rect, rects_overlap};
pub use progression::{Progression, ScoreBoard, reward};
pub use state::{Obstacle, PlayerBody, SimEvent, SimStatus};
pub use tick::{Simulation, Snapshot, TickInput};
