//! Fixed-cadence obstacle spawning
//!
//! The tick counter is incremented before spawning, so the first tick a
//! round processes is tick 1 and the first obstacle appears on tick
//! `spawn_interval`. Tick 0 never spawns.

use glam::Vec2;
use rand::Rng;

use super::state::Obstacle;
use crate::config::GameConfig;

/// Whether an obstacle is due on this tick
#[inline]
pub fn should_spawn(tick: u64, interval: u64) -> bool {
    tick > 0 && tick % interval.max(1) == 0
}

/// Build a new obstacle at the right edge, resting on the ground
pub fn spawn_obstacle<R: Rng>(id: u32, config: &GameConfig, rng: &mut R) -> Obstacle {
    let height = rng.random_range(config.obstacle_min_height..=config.obstacle_max_height) as f32;
    Obstacle {
        id,
        pos: Vec2::new(config.width, config.ground_line() - height),
        size: Vec2::new(config.obstacle_width, height),
    }
}

/// Append an obstacle if one is due; returns true when one was spawned
pub fn maybe_spawn<R: Rng>(
    tick: u64,
    next_id: &mut u32,
    config: &GameConfig,
    rng: &mut R,
    obstacles: &mut Vec<Obstacle>,
) -> bool {
    if !should_spawn(tick, config.spawn_interval) {
        return false;
    }
    let id = *next_id;
    *next_id += 1;
    obstacles.push(spawn_obstacle(id, config, rng));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_cadence() {
        assert!(!should_spawn(0, 90));
        assert!(!should_spawn(89, 90));
        assert!(should_spawn(90, 90));
        assert!(!should_spawn(91, 90));
        assert!(should_spawn(180, 90));
        assert!(should_spawn(1, 1));
    }

    #[test]
    fn test_spawn_geometry() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(7);

        for id in 0..200 {
            let obstacle = spawn_obstacle(id, &config, &mut rng);
            let h = obstacle.size.y;
            assert!(h >= config.obstacle_min_height as f32);
            assert!(h <= config.obstacle_max_height as f32);
            assert_eq!(h.fract(), 0.0);
            assert_eq!(obstacle.pos.x, config.width);
            assert_eq!(obstacle.pos.y + h, config.ground_line());
            assert_eq!(obstacle.size.x, config.obstacle_width);
        }
    }

    #[test]
    fn test_heights_cover_range() {
        let config = GameConfig {
            obstacle_min_height: 20,
            obstacle_max_height: 22,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(42);
        let mut seen = [false; 3];
        for id in 0..300 {
            let h = spawn_obstacle(id, &config, &mut rng).size.y as usize;
            seen[h - 20] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_maybe_spawn_appends_in_order() {
        let config = GameConfig {
            spawn_interval: 2,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(1);
        let mut next_id = 1;
        let mut obstacles = Vec::new();

        for tick in 1..=6 {
            maybe_spawn(tick, &mut next_id, &config, &mut rng, &mut obstacles);
        }
        let ids: Vec<u32> = obstacles.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(next_id, 4);
    }
}
