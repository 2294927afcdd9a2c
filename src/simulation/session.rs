//! Per-scenario runtime object with the start / pause / reset lifecycle
//!
//! A `Session` owns:
//! - the `ParameterSet` it was created with (never mutated),
//! - the scenario's `SimState`, created lazily on the first `start`,
//! - an elapsed-time counter and a `Status` flag,
//! - the injected `TickScheduler`.
//!
//! Lifecycle: `Stopped -> Running <-> Paused`, and `reset` from any status
//! reinitialises the state and resumes running. Every tick advances by the
//! fixed `DT` and yields a `Snapshot` for an external renderer.

use super::collision::step_pair;
use super::engine::{Arena, DT, GRID_SPACING};
use super::field::{place_sources, sample_grid, FieldSample};
use super::integrator::Kinematics;
use super::params::{
    CircularParams, CollisionParams, ParameterSet, PendulumParams, ProjectileParams,
    ScenarioKind, SpringParams,
};
use super::scheduler::{ManualScheduler, TickScheduler};
use super::states::{
    AngularState, Body, CircularState, FieldSource, LinearState, NVec2, ProjectileState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Stopped,
    Running,
    Paused,
}

/// Mutable state of exactly one scenario, next to the parameters that drive it
#[derive(Debug, Clone, PartialEq)]
pub enum SimState {
    Projectile(ProjectileParams, ProjectileState),
    Pendulum(PendulumParams, AngularState),
    Spring(SpringParams, LinearState),
    Circular(CircularParams, CircularState),
    Collision(CollisionParams, [Body; 2]),
    Field {
        sources: [FieldSource; 2],
        vectors: Vec<FieldSample>, // sources never move, so sampled once
    },
}

impl SimState {
    /// Fresh state for `params` at t = 0
    pub fn initial(params: &ParameterSet, arena: &Arena) -> Self {
        match *params {
            ParameterSet::Projectile(p) => SimState::Projectile(p, p.initial_state()),
            ParameterSet::Pendulum(p) => SimState::Pendulum(p, p.initial_state()),
            ParameterSet::Spring(p) => SimState::Spring(p, p.initial_state()),
            ParameterSet::Circular(p) => SimState::Circular(p, p.initial_state()),
            ParameterSet::Collision(p) => {
                let y = 0.5 * arena.height;
                let bodies = [
                    Body {
                        x: NVec2::new(0.25 * arena.width, y),
                        v: NVec2::new(p.velocity1, 0.0),
                        m: p.mass1,
                        radius: p.radius1,
                    },
                    Body {
                        x: NVec2::new(0.75 * arena.width, y),
                        v: NVec2::new(p.velocity2, 0.0),
                        m: p.mass2,
                        radius: p.radius2,
                    },
                ];
                SimState::Collision(p, bodies)
            }
            ParameterSet::Field(p) => {
                let sources = place_sources(arena, p.charge1, p.charge2);
                let vectors = sample_grid(&sources, arena, GRID_SPACING);
                SimState::Field { sources, vectors }
            }
        }
    }

    /// Advance one fixed step of size `dt`
    pub fn advance(self, arena: &Arena, dt: f64) -> Self {
        match self {
            SimState::Projectile(p, s) => SimState::Projectile(p, p.advance(s, dt)),
            SimState::Pendulum(p, s) => SimState::Pendulum(p, p.advance(s, dt)),
            SimState::Spring(p, s) => SimState::Spring(p, p.advance(s, dt)),
            SimState::Circular(p, s) => SimState::Circular(p, p.advance(s, dt)),
            SimState::Collision(p, mut bodies) => {
                step_pair(&mut bodies, arena, p.restitution, dt);
                SimState::Collision(p, bodies)
            }
            field @ SimState::Field { .. } => field,
        }
    }

    /// Render-ready view of this state
    pub fn snapshot(&self, time: f64) -> Snapshot {
        match self {
            SimState::Projectile(p, s) => Snapshot::Projectile {
                time,
                position: p.position_at(s.t),
                vertical_velocity: p.vertical_velocity_at(s.t),
            },
            SimState::Pendulum(p, s) => Snapshot::Pendulum {
                time,
                angle: s.angle,
                angular_velocity: s.omega,
                bob: p.bob_position(s),
            },
            SimState::Spring(_, s) => Snapshot::Spring {
                time,
                displacement: s.x,
                velocity: s.v,
            },
            SimState::Circular(p, s) => Snapshot::Circular {
                time,
                angle: s.angular.angle,
                position: p.position_at_angle(s.angular.angle),
                trace: s.trace.to_vec(),
            },
            SimState::Collision(_, bodies) => Snapshot::Collision {
                time,
                bodies: *bodies,
            },
            SimState::Field { sources, vectors } => Snapshot::Field {
                time,
                sources: *sources,
                vectors: vectors.clone(),
            },
        }
    }
}

/// What a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    /// Positions are physical metres, not pixels; scaling onto a canvas is
    /// the renderer's job
    Projectile {
        time: f64,
        position: NVec2, // metres from the launch point, y up
        vertical_velocity: f64,
    },
    Pendulum {
        time: f64,
        angle: f64,
        angular_velocity: f64,
        bob: NVec2, // relative to the pivot, y up
    },
    Spring {
        time: f64,
        displacement: f64,
        velocity: f64,
    },
    Circular {
        time: f64,
        angle: f64,
        position: NVec2,   // relative to the centre
        trace: Vec<NVec2>, // oldest first
    },
    Collision {
        time: f64,
        bodies: [Body; 2],
    },
    Field {
        time: f64,
        sources: [FieldSource; 2],
        vectors: Vec<FieldSample>,
    },
}

impl Snapshot {
    pub fn time(&self) -> f64 {
        match self {
            Snapshot::Projectile { time, .. }
            | Snapshot::Pendulum { time, .. }
            | Snapshot::Spring { time, .. }
            | Snapshot::Circular { time, .. }
            | Snapshot::Collision { time, .. }
            | Snapshot::Field { time, .. } => *time,
        }
    }
}

/// Runtime for one scenario, driven by an injected scheduler
#[derive(Debug)]
pub struct Session<S: TickScheduler = ManualScheduler> {
    params: ParameterSet,
    arena: Arena,
    state: Option<SimState>,
    elapsed: f64, // simulated seconds since the last (re)initialisation
    ticks: u64,   // ticks since the last (re)initialisation
    status: Status,
    scheduler: S,
}

impl<S: TickScheduler> Session<S> {
    /// New, stopped session; state is built on the first `start`
    pub fn new(params: ParameterSet, arena: Arena, scheduler: S) -> Self {
        Self {
            params,
            arena: arena.sanitized(),
            state: None,
            elapsed: 0.0,
            ticks: 0,
            status: Status::Stopped,
            scheduler,
        }
    }

    pub fn kind(&self) -> ScenarioKind {
        self.params.kind()
    }

    /// Read-only handle to the parameters this session was built from
    pub fn parameters(&self) -> &ParameterSet {
        &self.params
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn state(&self) -> Option<&SimState> {
        self.state.as_ref()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Initialise if needed, mark running and request the next tick
    pub fn start(&mut self) {
        if self.state.is_none() {
            self.reinitialize();
        }
        self.status = Status::Running;
        self.scheduler.schedule_next();
        log::debug!("{} session started at t={:.3}", self.kind(), self.elapsed);
    }

    /// Stop ticking without touching the state
    pub fn pause(&mut self) {
        if self.status == Status::Running {
            self.status = Status::Paused;
        }
        self.scheduler.cancel();
        log::debug!("{} session paused at t={:.3}", self.kind(), self.elapsed);
    }

    /// Reinitialise from the session's parameters, return the initial frame
    /// and resume ticking
    pub fn reset(&mut self) -> Snapshot {
        self.reinitialize();
        let frame = self.current_snapshot();
        self.status = Status::Running;
        self.scheduler.schedule_next();
        log::debug!("{} session reset", self.kind());
        frame
    }

    /// Advance one fixed step; a no-op returning `None` unless running
    pub fn tick(&mut self) -> Option<Snapshot> {
        if self.status != Status::Running {
            return None;
        }

        let state = match self.state.take() {
            Some(s) => s,
            None => SimState::initial(&self.params, &self.arena),
        };
        self.state = Some(state.advance(&self.arena, DT));
        self.elapsed += DT;
        self.ticks += 1;

        let frame = self.current_snapshot();
        self.scheduler.schedule_next();
        Some(frame)
    }

    /// Tick only if the scheduler has a pending request to fire
    pub fn run_scheduled(&mut self) -> Option<Snapshot> {
        if self.scheduler.fire() {
            self.tick()
        } else {
            None
        }
    }

    /// Snapshot of the current state, if initialised
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.state
            .as_ref()
            .map(|s| s.snapshot(self.elapsed))
    }

    fn reinitialize(&mut self) {
        self.state = Some(SimState::initial(&self.params, &self.arena));
        self.elapsed = 0.0;
        self.ticks = 0;
    }

    fn current_snapshot(&self) -> Snapshot {
        match &self.state {
            Some(s) => s.snapshot(self.elapsed),
            None => SimState::initial(&self.params, &self.arena).snapshot(0.0),
        }
    }
}
