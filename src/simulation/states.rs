//! Core state types for the teaching scenarios.
//!
//! Defines the per-scenario runtime state owned by a `Session`:
//! - `ProjectileState` - elapsed flight time (the path is closed-form)
//! - `AngularState`    - angle / angular velocity (pendulum, circular)
//! - `LinearState`     - displacement / velocity (spring)
//! - `CircularState`   - angular state plus a bounded `Trace`
//! - `Body`            - circular body for the collision arena
//! - `FieldSource`     - signed point charge
//!
//! All positions use `NVec2` (nalgebra `Vector2<f64>`).

use std::collections::VecDeque;

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Number of visited positions kept by the circular-motion trace
pub const TRACE_CAPACITY: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProjectileState {
    pub t: f64, // time since launch
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AngularState {
    pub angle: f64, // radians
    pub omega: f64, // angular velocity, rad/s
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearState {
    pub x: f64, // displacement from equilibrium
    pub v: f64, // velocity
}

/// Fixed-capacity FIFO of visited positions; the oldest point is dropped
/// once `capacity` is exceeded.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    points: VecDeque<NVec2>,
    capacity: usize,
}

impl Trace {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, p: NVec2) {
        self.points.push_back(p);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest retained point
    pub fn oldest(&self) -> Option<&NVec2> {
        self.points.front()
    }

    /// Most recently visited point
    pub fn newest(&self) -> Option<&NVec2> {
        self.points.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NVec2> {
        self.points.iter()
    }

    pub fn to_vec(&self) -> Vec<NVec2> {
        self.points.iter().copied().collect()
    }
}

impl Default for Trace {
    fn default() -> Self {
        Self::new(TRACE_CAPACITY)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CircularState {
    pub angular: AngularState, // omega stays at the configured angular speed
    pub trace: Trace,          // positions relative to the centre of rotation
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub x: NVec2,    // position
    pub v: NVec2,    // velocity
    pub m: f64,      // mass
    pub radius: f64, // collision radius
}

impl Body {
    pub fn momentum(&self) -> NVec2 {
        self.v * self.m
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSource {
    pub x: NVec2, // position
    pub q: f64,   // signed charge
}
