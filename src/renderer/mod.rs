//! Rendering module
//!
//! The simulation knows nothing about drawing; renderers consume a
//! `Snapshot` once per frame.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::settings::Settings;
use crate::sim::{SimStatus, Snapshot};

/// Anything that can present a frame
pub trait RenderSink {
    fn present(&mut self, snapshot: &Snapshot<'_>, hud: &Hud);
}

/// HUD text derived from a snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub score: String,
    pub high_score: String,
    /// Level line and XP bar fill (0..1), when progression is on
    pub level: Option<(String, f32)>,
    /// Centered message while the round is over
    pub banner: Option<String>,
    pub fps: Option<String>,
}

impl Hud {
    pub fn build(snapshot: &Snapshot<'_>, settings: &Settings, fps: u32, new_best: bool) -> Self {
        let level = snapshot
            .progression
            .filter(|_| settings.show_xp)
            .map(|p| {
                (
                    format!("Lv {}  {}/{} XP", p.level, p.xp, p.xp_to_next),
                    p.fraction(),
                )
            });

        let banner = (snapshot.status == SimStatus::Over).then(|| {
            if new_best {
                "NEW BEST! Press Enter to restart".to_string()
            } else {
                "GAME OVER - Press Enter to restart".to_string()
            }
        });

        Self {
            score: format!("Score: {}", snapshot.score),
            high_score: format!("Best: {}", snapshot.high_score),
            level,
            banner,
            fps: settings.show_fps.then(|| format!("{} FPS", fps)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::Simulation;

    #[test]
    fn test_hud_running() {
        let sim = Simulation::new(GameConfig::default(), 7);
        let hud = Hud::build(&sim.snapshot(), &Settings::default(), 60, false);

        assert_eq!(hud.score, "Score: 0");
        assert_eq!(hud.high_score, "Best: 7");
        assert_eq!(hud.level, Some(("Lv 1  0/10 XP".to_string(), 0.0)));
        assert!(hud.banner.is_none());
        assert!(hud.fps.is_none());
    }

    #[test]
    fn test_hud_hides_xp() {
        let sim = Simulation::new(GameConfig::default(), 0);
        let settings = Settings {
            show_xp: false,
            show_fps: true,
            ..Default::default()
        };
        let hud = Hud::build(&sim.snapshot(), &settings, 58, false);
        assert!(hud.level.is_none());
        assert_eq!(hud.fps.as_deref(), Some("58 FPS"));
    }

    #[test]
    fn test_hud_game_over_banner() {
        let config = GameConfig {
            width: 120.0,
            spawn_interval: 1,
            ..Default::default()
        };
        let mut sim = Simulation::new(config, 0);
        for _ in 0..50 {
            sim.advance();
        }
        assert_eq!(sim.status(), SimStatus::Over);

        let hud = Hud::build(&sim.snapshot(), &Settings::default(), 60, false);
        assert_eq!(
            hud.banner.as_deref(),
            Some("GAME OVER - Press Enter to restart")
        );
        let hud = Hud::build(&sim.snapshot(), &Settings::default(), 60, true);
        assert!(hud.banner.unwrap().starts_with("NEW BEST"));
    }
}
