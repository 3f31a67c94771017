//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically. One tick
//! is one rendered frame.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::physics;
use super::progression::{Progression, ScoreBoard, reward};
use super::spawner;
use super::state::{Obstacle, PlayerBody, SimEvent, SimStatus};
use crate::config::{GameConfig, RestartPolicy};

/// Input commands sampled at a tick boundary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub jump: bool,
    pub restart: bool,
}

/// Read-only view handed to the renderer once per frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub status: SimStatus,
    pub tick: u64,
    pub player: &'a PlayerBody,
    pub obstacles: &'a [Obstacle],
    pub score: u64,
    pub high_score: u64,
    pub progression: Option<&'a Progression>,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Simulation {
    config: GameConfig,
    rng: Pcg32,
    status: SimStatus,
    /// Ticks processed this round
    tick: u64,
    player: PlayerBody,
    /// Spawn order
    obstacles: Vec<Obstacle>,
    scores: ScoreBoard,
    progression: Option<Progression>,
    next_id: u32,
}

impl Simulation {
    /// Start a round with a previously saved high score
    pub fn new(config: GameConfig, high_score: u64) -> Self {
        let config = config.sanitized();
        let progression = config
            .progression_enabled
            .then(|| Progression::new(config.initial_xp_to_next));
        Self {
            rng: Pcg32::seed_from_u64(config.seed_or_default()),
            status: SimStatus::Running,
            tick: 0,
            player: PlayerBody::new(&config),
            obstacles: Vec::new(),
            scores: ScoreBoard::new(high_score),
            progression,
            next_id: 1,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> SimStatus {
        self.status
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn player(&self) -> &PlayerBody {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn score(&self) -> u64 {
        self.scores.score
    }

    pub fn high_score(&self) -> u64 {
        self.scores.high_score
    }

    /// Whether this round has beaten the best it started with
    pub fn is_new_best(&self) -> bool {
        self.scores.is_new_best()
    }

    pub fn progression(&self) -> Option<&Progression> {
        self.progression.as_ref()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            status: self.status,
            tick: self.tick,
            player: &self.player,
            obstacles: &self.obstacles,
            score: self.scores.score,
            high_score: self.scores.high_score,
            progression: self.progression.as_ref(),
        }
    }

    /// Jump command; ignored while airborne or after the round ended
    pub fn jump(&mut self) -> bool {
        if self.status != SimStatus::Running {
            return false;
        }
        physics::jump(&mut self.player, self.config.jump_force)
    }

    /// Start a new round after a game over
    ///
    /// Returns false (and does nothing) while a round is still running.
    pub fn restart(&mut self) -> bool {
        if self.status != SimStatus::Over {
            return false;
        }
        self.status = SimStatus::Running;
        self.tick = 0;
        self.player = PlayerBody::new(&self.config);
        self.obstacles.clear();
        self.scores.reset_round();
        if self.config.restart_policy == RestartPolicy::ResetProgression {
            if let Some(progression) = &mut self.progression {
                *progression = Progression::new(self.config.initial_xp_to_next);
            }
        }
        log::info!("Round restarted (high score {})", self.scores.high_score);
        true
    }

    /// Apply sampled commands, then advance one tick
    pub fn step(&mut self, input: TickInput) -> Vec<SimEvent> {
        if input.restart {
            self.restart();
        }
        let jumped = input.jump && self.jump();

        let mut events = self.advance();
        if jumped {
            events.insert(0, SimEvent::Jumped);
        }
        events
    }

    /// Advance the simulation by exactly one tick
    ///
    /// No-op once the round is over.
    pub fn advance(&mut self) -> Vec<SimEvent> {
        let mut events = Vec::new();
        if self.status != SimStatus::Running {
            return events;
        }

        self.tick += 1;

        physics::step(
            &mut self.player,
            self.config.gravity,
            self.config.ground_line(),
        );

        spawner::maybe_spawn(
            self.tick,
            &mut self.next_id,
            &self.config,
            &mut self.rng,
            &mut self.obstacles,
        );

        // Move and test in spawn order; stop at the first hit
        let player_rect = self.player.rect();
        for obstacle in &mut self.obstacles {
            obstacle.advance(self.config.obstacle_speed);
            if obstacle.rect().overlaps(&player_rect) {
                self.status = SimStatus::Over;
                log::info!(
                    "Round over at tick {}: score {}, best {}",
                    self.tick,
                    self.scores.score,
                    self.scores.high_score
                );
                events.push(SimEvent::Collided {
                    obstacle_id: obstacle.id,
                });
                return events;
            }
        }

        // Compaction keeps relative order and can't skip neighbours
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_off_screen());
        let passed = before - self.obstacles.len();

        for _ in 0..passed {
            self.score_obstacle(&mut events);
        }

        events
    }

    fn score_obstacle(&mut self, events: &mut Vec<SimEvent>) {
        let new_best = self.scores.increment();
        let score = self.scores.score;
        let xp = reward(score);
        events.push(SimEvent::ObstaclePassed { score, reward: xp });
        if new_best {
            events.push(SimEvent::NewHighScore { high_score: score });
        }

        if let Some(progression) = &mut self.progression {
            if progression.add_xp(xp) > 0 {
                log::debug!("Level up: {}", progression.level);
                events.push(SimEvent::LevelUp {
                    level: progression.level,
                });
            }
        }
    }

    /// Insert an obstacle directly (test setups and replays)
    pub fn push_obstacle(&mut self, mut obstacle: Obstacle) {
        obstacle.id = self.next_id;
        self.next_id += 1;
        self.obstacles.push(obstacle);
    }
}
