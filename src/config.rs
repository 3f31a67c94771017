//! Playfield and tuning configuration
//!
//! Every gameplay constant lives here so the simulation can be exercised
//! under arbitrary geometries. On the web a partial JSON override may be
//! stored in LocalStorage.

use serde::{Deserialize, Serialize};

/// What happens to XP/level when a round is restarted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RestartPolicy {
    /// Level and XP carry over into the next round
    #[default]
    KeepProgression,
    /// Level and XP start over with the round
    ResetProgression,
}

/// Game configuration (all values in pixels and ticks)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub width: f32,
    pub height: f32,
    /// Thickness of the ground strip at the bottom of the playfield
    pub ground_thickness: f32,

    // === Player ===
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Downward acceleration applied every tick
    pub gravity: f32,
    /// Upward velocity applied by a jump
    pub jump_force: f32,

    // === Obstacles ===
    /// Leftward distance travelled per tick
    pub obstacle_speed: f32,
    /// Ticks between spawns
    pub spawn_interval: u64,
    pub obstacle_width: f32,
    pub obstacle_min_height: u32,
    pub obstacle_max_height: u32,

    // === Progression ===
    /// Track XP and levels on top of the score
    pub progression_enabled: bool,
    /// XP needed to reach level 2
    pub initial_xp_to_next: u64,
    pub restart_policy: RestartPolicy,

    /// Seed for obstacle heights; `None` lets the host pick one
    pub seed: Option<u64>,
}

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 0x5eed;

/// `value` if it is a finite number above zero, else `fallback`
fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 300.0,
            ground_thickness: 20.0,

            player_x: 50.0,
            player_width: 30.0,
            player_height: 30.0,
            gravity: 0.5,
            jump_force: 12.0,

            obstacle_speed: 6.0,
            spawn_interval: 90,
            obstacle_width: 20.0,
            obstacle_min_height: 20,
            obstacle_max_height: 50,

            progression_enabled: true,
            initial_xp_to_next: 10,
            restart_policy: RestartPolicy::KeepProgression,

            seed: None,
        }
    }
}

impl GameConfig {
    /// LocalStorage key for the JSON override
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "hop_runner_config";

    /// Y coordinate of the ground surface
    pub fn ground_line(&self) -> f32 {
        self.height - self.ground_thickness
    }

    /// Clamp values into ranges the simulation can run with
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        // Gravity must pull down and obstacles must scroll left
        self.gravity = positive_or(self.gravity, defaults.gravity);
        self.obstacle_speed = positive_or(self.obstacle_speed, defaults.obstacle_speed);
        self.jump_force = if self.jump_force.is_finite() {
            self.jump_force.max(0.0)
        } else {
            defaults.jump_force
        };
        self.width = self.width.max(0.0);
        self.height = self.height.max(0.0);
        self.ground_thickness = self.ground_thickness.clamp(0.0, self.height);
        self.player_width = self.player_width.max(0.0);
        self.player_height = self.player_height.max(0.0);
        self.obstacle_width = self.obstacle_width.max(0.0);
        self.spawn_interval = self.spawn_interval.max(1);
        if self.obstacle_min_height > self.obstacle_max_height {
            std::mem::swap(&mut self.obstacle_min_height, &mut self.obstacle_max_height);
        }
        self.initial_xp_to_next = self.initial_xp_to_next.max(1);
        self
    }

    /// Configured seed, or `DEFAULT_SEED`
    pub fn seed_or_default(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Parse a (possibly partial) JSON override, falling back to defaults
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<GameConfig>(json) {
            Ok(config) => config.sanitized(),
            Err(e) => {
                log::warn!("Ignoring malformed config override: {}", e);
                Self::default()
            }
        }
    }

    /// Load config override from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        match crate::platform::storage::get_item(Self::STORAGE_KEY) {
            Some(json) => {
                log::info!("Loaded config override from LocalStorage");
                Self::from_json(&json)
            }
            None => Self::default(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
