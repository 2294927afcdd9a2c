//! Runtime engine settings shared by every scenario
//!
//! Fixes the simulation step and describes the rectangular arena that
//! the collision and field scenarios live in

use serde::Deserialize;

/// Fixed step per tick, independent of the real frame interval
pub const DT: f64 = 0.016;

/// Default spacing between field-grid sample points, in arena units
pub const GRID_SPACING: f64 = 40.0;

/// Axis-aligned arena spanning `[0, width] x [0, height]`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
        }
    }
}

impl Arena {
    /// Replace non-finite or non-positive extents with the default ones
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        let ok = |v: f64| v.is_finite() && v > 0.0;
        Self {
            width: if ok(self.width) { self.width } else { d.width },
            height: if ok(self.height) { self.height } else { d.height },
        }
    }
}
