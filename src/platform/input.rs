//! Keyboard/pointer mapping to game commands
//!
//! Commands are queued when the event fires and consumed at the next tick
//! boundary, so nothing mutates the simulation mid-tick.

use crate::sim::TickInput;

/// Discrete player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Jump,
    Restart,
}

/// Map a `KeyboardEvent.key` value to a command
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        " " | "ArrowUp" | "w" | "W" => Some(Command::Jump),
        "Enter" | "r" | "R" => Some(Command::Restart),
        _ => None,
    }
}

/// Commands collected between two ticks
#[derive(Debug, Clone, Copy, Default)]
pub struct InputQueue {
    pending: TickInput,
}

impl InputQueue {
    pub fn push(&mut self, command: Command) {
        match command {
            Command::Jump => self.pending.jump = true,
            Command::Restart => self.pending.restart = true,
        }
    }

    /// Take the commands for this tick, clearing the queue
    pub fn take(&mut self) -> TickInput {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(command_for_key(" "), Some(Command::Jump));
        assert_eq!(command_for_key("ArrowUp"), Some(Command::Jump));
        assert_eq!(command_for_key("Enter"), Some(Command::Restart));
        assert_eq!(command_for_key("r"), Some(Command::Restart));
        assert_eq!(command_for_key("Escape"), None);
    }

    #[test]
    fn test_queue_samples_once() {
        let mut queue = InputQueue::default();
        queue.push(Command::Jump);
        queue.push(Command::Jump);
        queue.push(Command::Restart);

        let input = queue.take();
        assert!(input.jump);
        assert!(input.restart);

        assert_eq!(queue.take(), TickInput::default());
    }
}
