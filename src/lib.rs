pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use error::{PhyslabError, Result};

pub use simulation::states::{Body, FieldSource, NVec2, AngularState, LinearState, ProjectileState, CircularState, Trace, TRACE_CAPACITY};
pub use simulation::params::{ParameterSet, ScenarioKind, FlatParams, parse_query};
pub use simulation::params::{ProjectileParams, PendulumParams, SpringParams, CircularParams, CollisionParams, FieldParams};
pub use simulation::engine::{Arena, DT, GRID_SPACING};
pub use simulation::integrator::Kinematics;
pub use simulation::collision::{clamp_inside, clamp_restitution, restitution_1d, reflect_walls, resolve_pair, step_pair};
pub use simulation::field::{field_at, sample_at, sample_grid, axis_profile, place_sources, FieldSample, MAX_GRID_CELLS, MIN_DIST2};
pub use simulation::scheduler::{TickScheduler, ManualScheduler};
pub use simulation::session::{Session, SimState, Snapshot, Status};
pub use simulation::sandbox::Sandbox;
pub use simulation::scenario::Scenario;
pub use simulation::analytic::{summarize, summarize_query, Summary, Series};

pub use configuration::config::{EngineConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_ticks, bench_field_grid};
