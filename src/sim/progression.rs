//! Score, high score and XP/level progression

use serde::{Deserialize, Serialize};

/// XP granted for passing an obstacle at the given score
///
/// `floor(1 + sqrt(score))`, computed with an integer square root so large
/// scores don't pick up float error. Grows without bound.
#[inline]
pub fn reward(score: u64) -> u64 {
    1 + score.isqrt()
}

/// Level tracking for the XP variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    /// XP toward the next level, always below `xp_to_next`
    pub xp: u64,
    pub level: u32,
    pub xp_to_next: u64,
}

impl Progression {
    pub fn new(initial_xp_to_next: u64) -> Self {
        Self {
            xp: 0,
            level: 1,
            xp_to_next: initial_xp_to_next.max(1),
        }
    }

    /// Add XP, levelling up as many times as it covers
    ///
    /// Returns the number of levels gained.
    pub fn add_xp(&mut self, amount: u64) -> u32 {
        self.xp += amount;
        let mut gained = 0;
        while self.xp >= self.xp_to_next {
            self.xp -= self.xp_to_next;
            self.level += 1;
            // floor(x * 1.5); never drops below 1
            self.xp_to_next = self.xp_to_next * 3 / 2;
            gained += 1;
        }
        gained
    }

    /// Fraction of the way to the next level, for the HUD bar
    pub fn fraction(&self) -> f32 {
        self.xp as f32 / self.xp_to_next as f32
    }
}

/// Per-round score plus the best score seen this session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub score: u64,
    pub high_score: u64,
    /// High score when the current round started
    pub round_best: u64,
}

impl ScoreBoard {
    pub fn new(high_score: u64) -> Self {
        Self {
            score: 0,
            high_score,
            round_best: high_score,
        }
    }

    /// Count one passed obstacle
    ///
    /// Returns true only on the pass that first beats the round's starting
    /// best, so a new record is announced once per round.
    pub fn increment(&mut self) -> bool {
        self.score += 1;
        self.high_score = self.high_score.max(self.score);
        self.score == self.round_best + 1
    }

    /// Whether this round has beaten the best it started with
    pub fn is_new_best(&self) -> bool {
        self.score > self.round_best
    }

    /// Start a new round (the high score stays)
    pub fn reset_round(&mut self) {
        self.score = 0;
        self.round_best = self.high_score;
    }
}
