//! Fixed-step kinematics evaluators
//!
//! Each scenario's parameter struct implements [`Kinematics`]: it knows its
//! initial state and how to advance that state by one step `dt`.
//! - projectile: closed-form in elapsed time, only `t` is integrated
//! - pendulum: small-angle ODE, semi-implicit Euler
//! - spring: Hooke's law, semi-implicit Euler
//! - circular: pure angle-rate kinematics with a bounded trace

use super::params::{CircularParams, PendulumParams, ProjectileParams, SpringParams};
use super::states::{AngularState, CircularState, LinearState, NVec2, ProjectileState, Trace};

/// A scenario model that can be stepped with a fixed `dt`
pub trait Kinematics {
    type State;

    /// State at t = 0
    fn initial_state(&self) -> Self::State;

    /// Advance `state` by one step of size `dt`
    fn advance(&self, state: Self::State, dt: f64) -> Self::State;
}

// =========================================================================================
// Projectile
// =========================================================================================

impl ProjectileParams {
    /// Position at time `t`, y positive upward from the launch point
    /// x = u cos(a) t,  y = u sin(a) t - g t^2 / 2
    pub fn position_at(&self, t: f64) -> NVec2 {
        let a = self.angle_rad();
        NVec2::new(
            self.speed * a.cos() * t,
            self.speed * a.sin() * t - 0.5 * self.gravity * t * t,
        )
    }

    /// Vertical velocity at time `t`: u sin(a) - g t
    pub fn vertical_velocity_at(&self, t: f64) -> f64 {
        self.speed * self.angle_rad().sin() - self.gravity * t
    }
}

impl Kinematics for ProjectileParams {
    type State = ProjectileState;

    fn initial_state(&self) -> ProjectileState {
        ProjectileState { t: 0.0 }
    }

    // No ground contact: the path keeps going below y = 0
    fn advance(&self, state: ProjectileState, dt: f64) -> ProjectileState {
        ProjectileState { t: state.t + dt }
    }
}

// =========================================================================================
// Pendulum
// =========================================================================================

impl PendulumParams {
    /// Bob position relative to the pivot, y positive upward
    pub fn bob_position(&self, state: &AngularState) -> NVec2 {
        NVec2::new(
            self.length * state.angle.sin(),
            -self.length * state.angle.cos(),
        )
    }
}

impl Kinematics for PendulumParams {
    type State = AngularState;

    fn initial_state(&self) -> AngularState {
        AngularState {
            angle: self.amplitude.to_radians(),
            omega: 0.0,
        }
    }

    // Linear restoring torque alpha = -(g/L) theta, not -(g/L) sin(theta)
    fn advance(&self, state: AngularState, dt: f64) -> AngularState {
        let alpha = -(self.gravity / self.length) * state.angle;
        let omega = state.omega + alpha * dt;
        AngularState {
            angle: state.angle + omega * dt,
            omega,
        }
    }
}

// =========================================================================================
// Spring
// =========================================================================================

impl Kinematics for SpringParams {
    type State = LinearState;

    fn initial_state(&self) -> LinearState {
        LinearState {
            x: self.amplitude,
            v: 0.0,
        }
    }

    fn advance(&self, state: LinearState, dt: f64) -> LinearState {
        let a = -(self.k / self.mass) * state.x;
        let v = state.v + a * dt;
        LinearState {
            x: state.x + v * dt,
            v,
        }
    }
}

// =========================================================================================
// Circular
// =========================================================================================

impl CircularParams {
    /// Position on the circle for `angle`, relative to the centre
    pub fn position_at_angle(&self, angle: f64) -> NVec2 {
        NVec2::new(self.radius * angle.cos(), self.radius * angle.sin())
    }
}

impl Kinematics for CircularParams {
    type State = CircularState;

    fn initial_state(&self) -> CircularState {
        CircularState {
            angular: AngularState {
                angle: 0.0,
                omega: self.angular_speed,
            },
            trace: Trace::default(),
        }
    }

    // Every step records the position it lands on
    fn advance(&self, mut state: CircularState, dt: f64) -> CircularState {
        state.angular.angle += self.angular_speed * dt;
        state.trace.push(self.position_at_angle(state.angular.angle));
        state
    }
}
