//! Owner of the single active `Session`
//!
//! Selecting a scenario or replacing its parameters always discards the
//! current session (after cancelling its scheduling) and builds a new one,
//! so no state leaks between sessions and two sessions never tick together.

use super::engine::Arena;
use super::params::ParameterSet;
use super::scheduler::{ManualScheduler, TickScheduler};
use super::session::{Session, Snapshot};

pub struct Sandbox<S: TickScheduler + Default = ManualScheduler> {
    arena: Arena,
    active: Option<Session<S>>,
}

impl<S: TickScheduler + Default> Sandbox<S> {
    pub fn new(arena: Arena) -> Self {
        Self {
            arena: arena.sanitized(),
            active: None,
        }
    }

    /// Switch to a new scenario; the new session starts out stopped
    pub fn select(&mut self, params: ParameterSet) -> &mut Session<S> {
        if let Some(old) = self.active.as_mut() {
            old.pause();
            log::info!("switching scenario {} -> {}", old.kind(), params.kind());
        } else {
            log::info!("selecting scenario {}", params.kind());
        }
        self.active.insert(Session::new(params, self.arena, S::default()))
    }

    /// Rebuild the active session from a replacement parameter set,
    /// carrying over whether it was running
    pub fn replace_parameters(&mut self, params: ParameterSet) -> &mut Session<S> {
        let was_running = self.active.as_ref().is_some_and(|s| s.is_running());
        let session = self.select(params);
        if was_running {
            session.start();
        }
        session
    }

    pub fn active(&self) -> Option<&Session<S>> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut Session<S>> {
        self.active.as_mut()
    }

    /// Tick the active session, if any
    pub fn tick(&mut self) -> Option<Snapshot> {
        self.active.as_mut().and_then(|s| s.tick())
    }

    /// Drop the active session entirely
    pub fn clear(&mut self) {
        if let Some(mut old) = self.active.take() {
            old.pause();
        }
    }
}
