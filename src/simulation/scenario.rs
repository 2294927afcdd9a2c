//! Build ready-to-run scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - the tick budget for a headless run
//! - a stopped `Session` seeded with the file's `ParameterSet` and `Arena`
//!
//! The bundle drives its session through the session's own scheduler, the
//! same way a frame loop would.

use crate::configuration::config::ScenarioConfig;
use crate::simulation::params::ParameterSet;
use crate::simulation::engine::Arena;
use crate::simulation::scheduler::{ManualScheduler, TickScheduler};
use crate::simulation::session::{Session, Snapshot};

pub struct Scenario<S: TickScheduler = ManualScheduler> {
    pub ticks: u64, // ticks to drive in `run_headless`
    pub session: Session<S>,
}

impl Scenario<ManualScheduler> {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Self {
        Self::from_parts(cfg.parameter_set(), cfg.arena(), cfg.engine.ticks)
    }

    pub fn from_parts(params: ParameterSet, arena: Arena, ticks: u64) -> Self {
        Self {
            ticks,
            session: Session::new(params, arena, ManualScheduler::new()),
        }
    }
}

impl<S: TickScheduler> Scenario<S> {
    /// Start the session and fire scheduled ticks until the budget is spent
    /// or nothing is pending. `on_frame` sees every produced snapshot.
    /// Returns the number of ticks executed.
    pub fn run_headless(&mut self, mut on_frame: impl FnMut(&Snapshot)) -> u64 {
        self.session.start();

        let mut done = 0;
        while done < self.ticks && self.session.scheduler().is_pending() {
            if let Some(frame) = self.session.run_scheduled() {
                on_frame(&frame);
                done += 1;
            }
        }

        log::info!(
            "{} ran {} ticks, t = {:.3} s",
            self.session.kind(),
            done,
            self.session.elapsed()
        );
        done
    }
}
