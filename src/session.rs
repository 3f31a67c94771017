//! A play session: one simulation plus its high score store
//!
//! The store is read once when the session starts and written exactly when
//! a round ends.

use crate::config::GameConfig;
use crate::highscore::HighScoreStore;
use crate::platform::input::{Command, InputQueue};
use crate::sim::{SimEvent, Simulation, Snapshot};

pub struct Session<S: HighScoreStore> {
    sim: Simulation,
    store: S,
    input: InputQueue,
}

impl<S: HighScoreStore> Session<S> {
    pub fn new(config: GameConfig, store: S) -> Self {
        let high_score = store.load();
        log::info!("Session started (high score {})", high_score);
        Self {
            sim: Simulation::new(config, high_score),
            store,
            input: InputQueue::default(),
        }
    }

    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.sim.snapshot()
    }

    /// Queue a command for the next tick
    pub fn command(&mut self, command: Command) {
        self.input.push(command);
    }

    /// Whether the finished (or current) round beat the previous best
    pub fn is_new_best(&self) -> bool {
        self.sim.is_new_best()
    }

    /// Run one tick with the queued commands
    pub fn tick(&mut self) -> Vec<SimEvent> {
        let input = self.input.take();
        let events = self.sim.step(input);

        if events
            .iter()
            .any(|e| matches!(e, SimEvent::Collided { .. }))
        {
            self.store.save(self.sim.high_score());
        }
        events
    }
}
