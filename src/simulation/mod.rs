pub mod states;
pub mod params;
pub mod engine;
pub mod integrator;
pub mod collision;
pub mod field;
pub mod scheduler;
pub mod session;
pub mod sandbox;
pub mod scenario;
pub mod analytic;
