//! Tick scheduling seam between a `Session` and whatever drives frames
//!
//! A browser would back this with animation-frame requests; headless code
//! and tests use [`ManualScheduler`] and fire ticks by hand.

pub trait TickScheduler {
    /// Ask for one more tick
    fn schedule_next(&mut self);

    /// Drop a pending tick request, if any
    fn cancel(&mut self);

    /// Whether a tick has been requested and not yet fired or cancelled
    fn is_pending(&self) -> bool;

    /// Consume the pending request; true if there was one to fire
    fn fire(&mut self) -> bool;
}

/// Scheduler driven synchronously by the caller
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    pending: bool,
    scheduled: u64, // total schedule_next calls
    cancelled: u64, // cancellations that dropped a pending request
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scheduled(&self) -> u64 {
        self.scheduled
    }

    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule_next(&mut self) {
        self.pending = true;
        self.scheduled += 1;
    }

    fn cancel(&mut self) {
        if self.pending {
            self.pending = false;
            self.cancelled += 1;
        }
    }

    fn is_pending(&self) -> bool {
        self.pending
    }

    fn fire(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}
