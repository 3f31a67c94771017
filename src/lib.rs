//! Hop Runner - A side-scrolling endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, progression)
//! - `session`: Drives the simulation and persists the high score
//! - `renderer`: Canvas 2D rendering of simulation snapshots
//! - `platform`: Browser/native platform abstraction
//! - `config`: Data-driven playfield tuning

pub mod audio;
pub mod config;
pub mod highscore;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use config::{GameConfig, RestartPolicy};
pub use highscore::{HighScoreStore, MemoryStore};
pub use session::Session;
pub use settings::Settings;

/// Game loop constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 5;
}
