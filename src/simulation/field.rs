//! Electrostatic field of point charges
//!
//! Two evaluation modes are kept deliberately distinct:
//! - [`field_at`] / [`sample_grid`]: signed vector superposition of
//!   inverse-square contributions, for the quiver view
//! - [`axis_profile`]: sum of per-source magnitudes |q| / r^2 along the
//!   segment joining two charges, for the analytic chart
//!
//! Both skip any source closer than `MIN_DIST2` to the sample point.

use super::engine::Arena;
use super::states::{FieldSource, NVec2};

/// Squared distance below which a source does not contribute
pub const MIN_DIST2: f64 = 16.0;

/// Upper bound on the number of cells `sample_grid` will evaluate
pub const MAX_GRID_CELLS: usize = 1_000_000;

/// One quiver arrow: where it sits, which way it points, how strong it is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    pub point: NVec2,
    pub direction: NVec2, // unit vector, zero where the field vanishes
    pub magnitude: f64,
}

/// The two sources of the field scenario, on the arena's horizontal midline
/// at 33% and 67% of its width
pub fn place_sources(arena: &Arena, q1: f64, q2: f64) -> [FieldSource; 2] {
    let y = 0.5 * arena.height;
    [
        FieldSource {
            x: NVec2::new(0.33 * arena.width, y),
            q: q1,
        },
        FieldSource {
            x: NVec2::new(0.67 * arena.width, y),
            q: q2,
        },
    ]
}

/// Field vector at `p`: sum of q (p - s) / |p - s|^3 over sources
pub fn field_at(sources: &[FieldSource], p: NVec2) -> NVec2 {
    let mut e = NVec2::zeros();
    for s in sources {
        let r = p - s.x;
        let r2 = r.norm_squared();
        if r2 < MIN_DIST2 {
            continue;
        }
        let inv_r = r2.sqrt().recip();
        e += s.q * inv_r * inv_r * inv_r * r;
    }
    e
}

/// Field at `p` split into direction and magnitude
pub fn sample_at(sources: &[FieldSource], p: NVec2) -> FieldSample {
    let e = field_at(sources, p);
    let magnitude = e.norm();
    let direction = if magnitude > 0.0 {
        e / magnitude
    } else {
        NVec2::zeros()
    };
    FieldSample {
        point: p,
        direction,
        magnitude,
    }
}

/// Sample the field at the centre of every `spacing`-sized cell of `arena`,
/// row by row from the origin. Spacings that would need more than
/// `MAX_GRID_CELLS` cells yield an empty grid.
pub fn sample_grid(sources: &[FieldSource], arena: &Arena, spacing: f64) -> Vec<FieldSample> {
    if !(spacing.is_finite() && spacing > 0.0) {
        return Vec::new();
    }
    let cols = (arena.width / spacing).floor();
    let rows = (arena.height / spacing).floor();
    if cols * rows > MAX_GRID_CELLS as f64 {
        log::debug!("grid spacing {spacing} gives {cols} x {rows} cells, over the limit");
        return Vec::new();
    }
    let (cols, rows) = (cols as usize, rows as usize);

    let mut out = Vec::with_capacity(cols * rows);
    for j in 0..rows {
        let y = (j as f64 + 0.5) * spacing;
        for i in 0..cols {
            let x = (i as f64 + 0.5) * spacing;
            out.push(sample_at(sources, NVec2::new(x, y)));
        }
    }
    out
}

/// Scalar magnitude at `samples` interior points of the segment from
/// `a` to `b`. Each entry is (distance from `a`, sum of |q| / r^2).
pub fn axis_profile(a: &FieldSource, b: &FieldSource, samples: usize) -> Vec<(f64, f64)> {
    let axis = b.x - a.x;
    let length = axis.norm();

    (1..=samples)
        .map(|i| {
            let f = i as f64 / (samples + 1) as f64;
            let p = a.x + f * axis;
            let magnitude = [a, b]
                .iter()
                .map(|s| {
                    let r2 = (p - s.x).norm_squared();
                    if r2 < MIN_DIST2 {
                        0.0
                    } else {
                        s.q.abs() / r2
                    }
                })
                .sum::<f64>();
            (f * length, magnitude)
        })
        .collect()
}
