//! Audio system
//!
//! Simulation events map to sound effects here; playback through the Web
//! Audio API lives in `web`.

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

use crate::sim::SimEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player left the ground
    Jump,
    /// Obstacle passed
    Score,
    /// Level gained
    LevelUp,
    /// Player hit an obstacle
    GameOver,
    /// Beat the best the round started with
    HighScore,
}

impl SoundEffect {
    /// Sound for a simulation event
    pub fn for_event(event: &SimEvent) -> Self {
        match event {
            SimEvent::Jumped => SoundEffect::Jump,
            SimEvent::ObstaclePassed { .. } => SoundEffect::Score,
            SimEvent::NewHighScore { .. } => SoundEffect::HighScore,
            SimEvent::LevelUp { .. } => SoundEffect::LevelUp,
            SimEvent::Collided { .. } => SoundEffect::GameOver,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{Obstacle, Simulation};
    use glam::Vec2;

    #[test]
    fn test_event_sounds() {
        assert_eq!(SoundEffect::for_event(&SimEvent::Jumped), SoundEffect::Jump);
        assert_eq!(
            SoundEffect::for_event(&SimEvent::Collided { obstacle_id: 1 }),
            SoundEffect::GameOver
        );
        assert_eq!(
            SoundEffect::for_event(&SimEvent::NewHighScore { high_score: 3 }),
            SoundEffect::HighScore
        );
    }

    #[test]
    fn test_record_fanfare_plays_once_per_round() {
        let config = GameConfig {
            spawn_interval: u64::MAX,
            ..Default::default()
        };
        let mut sim = Simulation::new(config, 1);
        let mut sounds = Vec::new();
        for _ in 0..3 {
            sim.push_obstacle(Obstacle {
                id: 0,
                pos: Vec2::new(-30.0, 250.0),
                size: Vec2::new(20.0, 30.0),
            });
            sounds.extend(sim.advance().iter().map(SoundEffect::for_event));
        }

        let fanfares = sounds
            .iter()
            .filter(|s| **s == SoundEffect::HighScore)
            .count();
        assert_eq!(fanfares, 1);
        assert_eq!(sim.high_score(), 3);
    }
}
