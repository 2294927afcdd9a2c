//! Closed-form summaries for the chart view
//!
//! Pure functions of a `ParameterSet`, run once off the animation loop.
//! Each summary carries named values, one or more numeric series for the
//! chart, and a short worked-answer text.

use std::f64::consts::PI;

use super::collision::{clamp_restitution, restitution_1d};
use super::engine::Arena;
use super::field::{axis_profile, place_sources};
use super::params::{
    parse_query, CircularParams, CollisionParams, FieldParams, ParameterSet, PendulumParams,
    ProjectileParams, ScenarioKind, SpringParams,
};

/// Intervals per sampled time series (so `SERIES_SAMPLES + 1` points)
pub const SERIES_SAMPLES: usize = 100;

/// Interior points of the field's axis profile
pub const AXIS_SAMPLES: usize = 99;

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub kind: ScenarioKind,
    pub values: Vec<(String, f64)>,
    pub series: Vec<Series>,
    pub text: String,
}

impl Summary {
    /// Named value, if present
    pub fn value(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }
}

/// `f` sampled at `SERIES_SAMPLES + 1` evenly spaced points of `[0, t_end]`
fn sample_series(label: &str, t_end: f64, f: impl Fn(f64) -> f64) -> Series {
    let points = (0..=SERIES_SAMPLES)
        .map(|i| {
            let t = t_end * i as f64 / SERIES_SAMPLES as f64;
            (t, f(t))
        })
        .collect();
    Series {
        label: label.to_string(),
        points,
    }
}

fn values(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
    pairs.iter().map(|(n, v)| (n.to_string(), *v)).collect()
}

/// Summary for any parameter set
pub fn summarize(params: &ParameterSet, arena: &Arena) -> Summary {
    match params {
        ParameterSet::Projectile(p) => projectile(p),
        ParameterSet::Pendulum(p) => pendulum(p),
        ParameterSet::Spring(p) => spring(p),
        ParameterSet::Circular(p) => circular(p),
        ParameterSet::Collision(p) => collision(p),
        ParameterSet::Field(p) => field(p, &arena.sanitized()),
    }
}

/// Summary from the flat query-string handoff. `width` / `height` entries,
/// when numeric, override the default arena.
pub fn summarize_query(kind: ScenarioKind, query: &str) -> Summary {
    let map = parse_query(query);
    let params = ParameterSet::from_map(kind, &map);
    let d = Arena::default();
    let dim = |key: &str, default: f64| {
        map.get(key)
            .and_then(|s| s.trim().parse::<f64>().ok())
            .unwrap_or(default)
    };
    let arena = Arena {
        width: dim("width", d.width),
        height: dim("height", d.height),
    };
    summarize(&params, &arena)
}

pub fn projectile(p: &ProjectileParams) -> Summary {
    let (u, g) = (p.speed, p.gravity);
    let a = p.angle_rad();
    let flight_time = 2.0 * u * a.sin() / g;
    let range = u * u * (2.0 * a).sin() / g;
    let max_height = u * u * a.sin().powi(2) / (2.0 * g);

    let text = format!(
        "Time of flight T = 2u sin(a) / g = 2 x {u} x sin({}) / {g} = {flight_time:.3} s\n\
         Range R = u^2 sin(2a) / g = {range:.2} m\n\
         Maximum height H = u^2 sin^2(a) / (2g) = {max_height:.2} m",
        p.angle
    );

    Summary {
        kind: ScenarioKind::Projectile,
        values: values(&[
            ("flightTime", flight_time),
            ("range", range),
            ("maxHeight", max_height),
        ]),
        series: vec![sample_series("vy(t)", flight_time.max(0.0), |t| {
            p.vertical_velocity_at(t)
        })],
        text,
    }
}

pub fn pendulum(p: &PendulumParams) -> Summary {
    let period = 2.0 * PI * (p.length / p.gravity).sqrt();
    let text = format!(
        "Period T = 2 pi sqrt(L / g) = 2 pi sqrt({} / {}) = {period:.3} s",
        p.length, p.gravity
    );
    Summary {
        kind: ScenarioKind::Pendulum,
        values: values(&[("period", period)]),
        // Unit-amplitude proxy, not scaled by the release angle
        series: vec![sample_series("sin(2 pi t / T)", period, |t| {
            (2.0 * PI * t / period).sin()
        })],
        text,
    }
}

pub fn spring(p: &SpringParams) -> Summary {
    let omega = p.omega();
    let frequency = omega / (2.0 * PI);
    let period = 2.0 * PI / omega;
    let text = format!(
        "Angular frequency w = sqrt(k / m) = sqrt({} / {}) = {omega:.4} rad/s\n\
         Frequency f = w / 2 pi = {frequency:.3} Hz",
        p.k, p.mass
    );
    Summary {
        kind: ScenarioKind::Spring,
        values: values(&[
            ("angularFrequency", omega),
            ("frequency", frequency),
            ("period", period),
        ]),
        series: vec![sample_series("cos(w t)", period, |t| (omega * t).cos())],
        text,
    }
}

pub fn circular(p: &CircularParams) -> Summary {
    let omega = p.angular_speed;
    let period = 2.0 * PI / omega;
    let text = format!(
        "Period T = 2 pi / w = 2 pi / {omega} = {period:.3} s\n\
         Speed v = w r = {:.2} units/s",
        omega * p.radius
    );
    Summary {
        kind: ScenarioKind::Circular,
        values: values(&[("period", period), ("speed", omega * p.radius)]),
        series: vec![sample_series("r cos(w t)", period, |t| {
            p.radius * (omega * t).cos()
        })],
        text,
    }
}

pub fn collision(p: &CollisionParams) -> Summary {
    let e = clamp_restitution(p.restitution);
    let (m1, m2, u1, u2) = (p.mass1, p.mass2, p.velocity1, p.velocity2);
    let (v1, v2) = restitution_1d(m1, m2, u1, u2, e);

    let momentum_before = m1 * u1 + m2 * u2;
    let momentum_after = m1 * v1 + m2 * v2;
    let energy_before = 0.5 * m1 * u1 * u1 + 0.5 * m2 * u2 * u2;
    let energy_after = 0.5 * m1 * v1 * v1 + 0.5 * m2 * v2 * v2;

    let text = format!(
        "v1' = (m1 u1 + m2 u2 + m2 e (u2 - u1)) / (m1 + m2) = {v1:.3}\n\
         v2' = (m1 u1 + m2 u2 + m1 e (u1 - u2)) / (m1 + m2) = {v2:.3}\n\
         Momentum {momentum_before:.3} -> {momentum_after:.3}, \
         kinetic energy {energy_before:.3} -> {energy_after:.3} (e = {e})"
    );

    Summary {
        kind: ScenarioKind::Collision,
        values: values(&[
            ("finalVelocity1", v1),
            ("finalVelocity2", v2),
            ("momentumBefore", momentum_before),
            ("momentumAfter", momentum_after),
            ("kineticEnergyBefore", energy_before),
            ("kineticEnergyAfter", energy_after),
        ]),
        series: vec![
            Series {
                label: "body 1 velocity".to_string(),
                points: vec![(0.0, u1), (1.0, v1)],
            },
            Series {
                label: "body 2 velocity".to_string(),
                points: vec![(0.0, u2), (1.0, v2)],
            },
        ],
        text,
    }
}

pub fn field(p: &FieldParams, arena: &Arena) -> Summary {
    let [a, b] = place_sources(arena, p.charge1, p.charge2);
    let profile = axis_profile(&a, &b, AXIS_SAMPLES);
    let separation = (b.x - a.x).norm();
    let peak = profile.iter().map(|(_, e)| *e).fold(0.0, f64::max);

    let text = format!(
        "Along the axis, E(x) = |q1| / x^2 + |q2| / (d - x)^2 with q1 = {}, q2 = {}, d = {separation:.1}\n\
         Strongest sampled field {peak:.5} near the charges",
        p.charge1, p.charge2
    );

    Summary {
        kind: ScenarioKind::Field,
        values: values(&[("separation", separation), ("peakMagnitude", peak)]),
        series: vec![Series {
            label: "|E| along axis".to_string(),
            points: profile,
        }],
        text,
    }
}
