//! Vertical-only player physics

use super::state::PlayerBody;

/// Apply a jump if the player is standing on the ground
///
/// Returns whether the jump took effect. There is no air jump.
pub fn jump(player: &mut PlayerBody, jump_force: f32) -> bool {
    if player.airborne {
        return false;
    }
    player.vel_y = -jump_force;
    player.airborne = true;
    true
}

/// Advance the player by one tick of gravity, clamping to the ground
pub fn step(player: &mut PlayerBody, gravity: f32, ground_line: f32) {
    player.vel_y += gravity;
    player.pos.y += player.vel_y;

    if player.bottom() >= ground_line {
        player.pos.y = ground_line - player.size.y;
        player.vel_y = 0.0;
        player.airborne = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use proptest::prelude::*;

    #[test]
    fn test_resting_player_stays_grounded() {
        let config = GameConfig::default();
        let mut player = PlayerBody::new(&config);

        for _ in 0..10 {
            step(&mut player, config.gravity, config.ground_line());
        }
        assert_eq!(player.bottom(), config.ground_line());
        assert_eq!(player.vel_y, 0.0);
        assert!(!player.airborne);
    }

    #[test]
    fn test_no_double_jump() {
        let config = GameConfig::default();
        let mut player = PlayerBody::new(&config);

        assert!(jump(&mut player, config.jump_force));
        assert_eq!(player.vel_y, -config.jump_force);
        assert!(player.airborne);

        step(&mut player, config.gravity, config.ground_line());
        let vel = player.vel_y;
        assert!(!jump(&mut player, config.jump_force));
        assert_eq!(player.vel_y, vel);
    }

    #[test]
    fn test_jump_arc() {
        let config = GameConfig {
            gravity: 0.5,
            jump_force: 12.0,
            ..Default::default()
        };
        let ground = config.ground_line();
        let mut player = PlayerBody::new(&config);
        jump(&mut player, config.jump_force);

        for _ in 0..24 {
            step(&mut player, config.gravity, ground);
        }
        // Apex: upward velocity fully spent
        assert!(player.vel_y >= 0.0);
        assert!(player.airborne);
        assert!(player.bottom() < ground);

        // Symmetric descent lands exactly on tick 47
        for _ in 24..46 {
            step(&mut player, config.gravity, ground);
        }
        assert!(player.airborne);
        step(&mut player, config.gravity, ground);
        assert!(!player.airborne);
        assert_eq!(player.vel_y, 0.0);
        assert_eq!(player.bottom(), ground);
    }

    proptest! {
        #[test]
        fn prop_never_penetrates_ground(
            gravity in 0.01f32..5.0,
            jump_force in 0.0f32..40.0,
            jumps in proptest::collection::vec(any::<bool>(), 1..200),
        ) {
            let config = GameConfig { gravity, jump_force, ..Default::default() };
            let ground = config.ground_line();
            let mut player = PlayerBody::new(&config);

            for wants_jump in jumps {
                if wants_jump {
                    jump(&mut player, config.jump_force);
                }
                step(&mut player, config.gravity, ground);

                prop_assert!(player.bottom() <= ground);
                if player.bottom() == ground {
                    prop_assert_eq!(player.vel_y, 0.0);
                    prop_assert!(!player.airborne);
                }
            }
        }
    }
}
