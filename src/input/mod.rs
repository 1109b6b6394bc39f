// src/input/mod.rs
use crate::error::ConsoleError;
use crate::state::{ConsoleState, SessionSnapshot};
use crate::input::command::Command;
pub mod command;

/// Commands raised by widgets during a frame. Views only read state while
/// drawing; the queue is applied once the frame's UI has been built.
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: Vec<Box<dyn Command>>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: impl Command + 'static) {
        self.pending.push(Box::new(command));
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Applies queued commands in order. A rejected command does not stop the
    /// ones after it; the last rejection is returned alongside the final snapshot.
    pub fn apply(&mut self, state: &mut ConsoleState) -> (SessionSnapshot, Option<ConsoleError>) {
        let mut last_error = None;
        for command in self.pending.drain(..) {
            if let Err(e) = state.apply(command.as_ref()) {
                last_error = Some(e);
            }
        }
        (state.snapshot(), last_error)
    }
}
