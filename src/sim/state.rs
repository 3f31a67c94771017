//! Simulation entities and events

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::config::GameConfig;

/// Round status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimStatus {
    /// Round in progress
    Running,
    /// Player hit an obstacle; waiting for restart
    Over,
}

/// The player-controlled runner (only moves vertically)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive is down)
    pub vel_y: f32,
    pub airborne: bool,
}

impl PlayerBody {
    /// Create a player resting on the ground
    pub fn new(config: &GameConfig) -> Self {
        let size = Vec2::new(config.player_width, config.player_height);
        Self {
            pos: Vec2::new(config.player_x, config.ground_line() - size.y),
            size,
            vel_y: 0.0,
            airborne: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Y coordinate of the player's feet
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// A ground obstacle scrolling toward the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Move left by `speed`
    pub fn advance(&mut self, speed: f32) {
        self.pos.x -= speed;
    }

    /// Right edge has scrolled past the left playfield boundary
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

/// Something that happened during a tick, for audio/HUD/persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    /// Jump command took effect
    Jumped,
    /// An obstacle scrolled off screen without hitting the player
    ObstaclePassed { score: u64, reward: u64 },
    /// Score first exceeded the best the round started with
    NewHighScore { high_score: u64 },
    /// XP crossed one or more thresholds
    LevelUp { level: u32 },
    /// Player hit an obstacle; round is over
    Collided { obstacle_id: u32 },
}
