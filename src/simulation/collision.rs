//! Two-body collision resolution in a bounded arena
//!
//! - walls reflect perfectly: the body is clamped back inside and the
//!   matching velocity component flips sign
//! - overlapping bodies exchange momentum along the contact normal using
//!   the 1-D restitution formula; tangential velocity passes through
//! - after resolution both bodies are pushed apart by half the overlap

use super::engine::Arena;
use super::states::{Body, NVec2};

/// Separations below this are treated as coincident centres
pub const COINCIDENT_EPS: f64 = 1e-9;

/// Normal used when the two centres coincide and no direction is defined
pub fn fallback_normal() -> NVec2 {
    NVec2::x()
}

/// Restitution clamped into `[0, 1]`; NaN counts as perfectly inelastic
pub fn clamp_restitution(e: f64) -> f64 {
    if e.is_nan() {
        0.0
    } else {
        e.clamp(0.0, 1.0)
    }
}

/// Post-collision velocities along one axis
///
/// v1' = (m1 u1 + m2 u2 + m2 e (u2 - u1)) / (m1 + m2)
/// v2' = (m1 u1 + m2 u2 + m1 e (u1 - u2)) / (m1 + m2)
pub fn restitution_1d(m1: f64, m2: f64, u1: f64, u2: f64, e: f64) -> (f64, f64) {
    let e = clamp_restitution(e);
    let total = m1 + m2;
    let p = m1 * u1 + m2 * u2;
    let v1 = (p + m2 * e * (u2 - u1)) / total;
    let v2 = (p + m1 * e * (u1 - u2)) / total;
    (v1, v2)
}

/// Keep `body` inside `arena`; returns true if a wall was hit
pub fn reflect_walls(body: &mut Body, arena: &Arena) -> bool {
    let mut hit = false;
    let r = body.radius;

    if body.x.x - r < 0.0 {
        body.x.x = r;
        body.v.x = -body.v.x;
        hit = true;
    } else if body.x.x + r > arena.width {
        body.x.x = arena.width - r;
        body.v.x = -body.v.x;
        hit = true;
    }

    if body.x.y - r < 0.0 {
        body.x.y = r;
        body.v.y = -body.v.y;
        hit = true;
    } else if body.x.y + r > arena.height {
        body.x.y = arena.height - r;
        body.v.y = -body.v.y;
        hit = true;
    }

    hit
}

/// Clamp `body` inside `arena` by position only, leaving velocity alone
pub fn clamp_inside(body: &mut Body, arena: &Arena) {
    let r = body.radius;
    body.x.x = body.x.x.max(r).min(arena.width - r);
    body.x.y = body.x.y.max(r).min(arena.height - r);
}

/// Resolve contact between `a` and `b` with restitution `e`.
/// Returns false when the bodies are not touching.
pub fn resolve_pair(a: &mut Body, b: &mut Body, e: f64) -> bool {
    let d = b.x - a.x;
    let dist = d.norm();
    let min_dist = a.radius + b.radius;
    if dist > min_dist {
        return false;
    }

    // Unit normal from a to b
    let n = if dist < COINCIDENT_EPS {
        log::trace!("coincident centres, using fallback normal");
        fallback_normal()
    } else {
        d / dist
    };

    // Split velocities into normal and tangential parts
    let u1 = a.v.dot(&n);
    let u2 = b.v.dot(&n);
    let t1 = a.v - u1 * n;
    let t2 = b.v - u2 * n;

    let (v1, v2) = restitution_1d(a.m, b.m, u1, u2, e);
    a.v = t1 + v1 * n;
    b.v = t2 + v2 * n;

    // De-penetrate: half the overlap each
    let push = 0.5 * (min_dist - dist) * n;
    a.x -= push;
    b.x += push;

    true
}

/// One collision step for the pair: integrate positions, reflect off the
/// walls, resolve contact once, then pull back anything the de-penetration
/// pushed through a wall
pub fn step_pair(bodies: &mut [Body; 2], arena: &Arena, e: f64, dt: f64) {
    for b in bodies.iter_mut() {
        b.x += dt * b.v;
        reflect_walls(b, arena);
    }
    let [a, b] = bodies;
    if resolve_pair(a, b, e) {
        clamp_inside(a, arena);
        clamp_inside(b, arena);
    }
}
