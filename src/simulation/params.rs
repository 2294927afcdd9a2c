//! Physical parameters for each scenario kind
//!
//! `ParameterSet` is a closed set of per-kind parameter structs:
//! - projectile: launch speed, angle (degrees) and gravitational acceleration,
//! - pendulum: length, gravitational acceleration, release amplitude (degrees),
//! - spring: spring constant, mass, release amplitude,
//! - circular: radius and angular speed,
//! - collision: masses, velocities, radii and restitution of two bodies,
//! - field: the two point charges
//!
//! The UI hands parameters over as a flat `name -> string` map (slider values or
//! a URL-style query string). Missing or unparsable entries are replaced by the
//! documented default for that name, never reported as errors.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::PhyslabError;

/// Flat parameter map as passed between the live view and the summary view
pub type FlatParams = HashMap<String, String>;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    Projectile,
    Pendulum,
    Spring,
    Circular,
    Collision,
    Field,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 6] = [
        ScenarioKind::Projectile,
        ScenarioKind::Pendulum,
        ScenarioKind::Spring,
        ScenarioKind::Circular,
        ScenarioKind::Collision,
        ScenarioKind::Field,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScenarioKind::Projectile => "projectile",
            ScenarioKind::Pendulum => "pendulum",
            ScenarioKind::Spring => "spring",
            ScenarioKind::Circular => "circular",
            ScenarioKind::Collision => "collision",
            ScenarioKind::Field => "field",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenarioKind {
    type Err = PhyslabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ScenarioKind::ALL
            .into_iter()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| PhyslabError::UnknownScenario(s.to_string()))
    }
}

/// Read `key` as a finite number, falling back to `default`
fn read(map: &FlatParams, key: &str, default: f64) -> f64 {
    match map.get(key).map(|s| s.trim().parse::<f64>()) {
        Some(Ok(v)) if v.is_finite() => v,
        Some(_) => {
            log::debug!("parameter `{key}` is not numeric, using default {default}");
            default
        }
        None => default,
    }
}

/// Like [`read`] but also rejects zero and negative values; used for
/// quantities that end up as divisors
fn read_positive(map: &FlatParams, key: &str, default: f64) -> f64 {
    let v = read(map, key, default);
    if v > 0.0 {
        v
    } else {
        log::debug!("parameter `{key}` must be positive (got {v}), using default {default}");
        default
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileParams {
    pub speed: f64,   // launch speed u
    pub angle: f64,   // launch angle, degrees
    pub gravity: f64, // gravitational acceleration g
}

impl Default for ProjectileParams {
    fn default() -> Self {
        Self {
            speed: 25.0,
            angle: 45.0,
            gravity: 9.81,
        }
    }
}

impl ProjectileParams {
    pub fn from_map(map: &FlatParams) -> Self {
        let d = Self::default();
        Self {
            speed: read(map, "speed", d.speed),
            angle: read(map, "angle", d.angle),
            gravity: read_positive(map, "gravitationalAccel", d.gravity),
        }
    }

    pub fn angle_rad(&self) -> f64 {
        self.angle.to_radians()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumParams {
    pub length: f64,    // L
    pub gravity: f64,   // g
    pub amplitude: f64, // release angle, degrees
}

impl Default for PendulumParams {
    fn default() -> Self {
        Self {
            length: 1.6,
            gravity: 9.81,
            amplitude: 20.0,
        }
    }
}

impl PendulumParams {
    pub fn from_map(map: &FlatParams) -> Self {
        let d = Self::default();
        Self {
            length: read_positive(map, "length", d.length),
            gravity: read_positive(map, "gravitationalAccel", d.gravity),
            amplitude: read(map, "amplitude", d.amplitude),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub k: f64,         // spring constant
    pub mass: f64,      // attached mass
    pub amplitude: f64, // initial displacement
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            k: 50.0,
            mass: 1.5,
            amplitude: 1.0,
        }
    }
}

impl SpringParams {
    pub fn from_map(map: &FlatParams) -> Self {
        let d = Self::default();
        Self {
            k: read_positive(map, "springConstant", d.k),
            mass: read_positive(map, "mass", d.mass),
            amplitude: read(map, "amplitude", d.amplitude),
        }
    }

    /// Natural angular frequency sqrt(k/m)
    pub fn omega(&self) -> f64 {
        (self.k / self.mass).sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularParams {
    pub radius: f64,
    pub angular_speed: f64, // rad/s
}

impl Default for CircularParams {
    fn default() -> Self {
        Self {
            radius: 100.0,
            angular_speed: 1.2,
        }
    }
}

impl CircularParams {
    pub fn from_map(map: &FlatParams) -> Self {
        let d = Self::default();
        Self {
            radius: read_positive(map, "radius", d.radius),
            angular_speed: read_positive(map, "angularSpeed", d.angular_speed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionParams {
    pub mass1: f64,
    pub mass2: f64,
    pub velocity1: f64,
    pub velocity2: f64,
    pub radius1: f64,
    pub radius2: f64,
    pub restitution: f64, // stored as given; clamped where it is used
}

impl Default for CollisionParams {
    fn default() -> Self {
        Self {
            mass1: 2.0,
            mass2: 1.0,
            velocity1: 3.0,
            velocity2: -1.0,
            radius1: 30.0,
            radius2: 20.0,
            restitution: 1.0,
        }
    }
}

impl CollisionParams {
    pub fn from_map(map: &FlatParams) -> Self {
        let d = Self::default();
        Self {
            mass1: read_positive(map, "mass1", d.mass1),
            mass2: read_positive(map, "mass2", d.mass2),
            velocity1: read(map, "velocity1", d.velocity1),
            velocity2: read(map, "velocity2", d.velocity2),
            radius1: read_positive(map, "radius1", d.radius1),
            radius2: read_positive(map, "radius2", d.radius2),
            restitution: read(map, "restitution", d.restitution),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParams {
    pub charge1: f64,
    pub charge2: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            charge1: 3.0,
            charge2: -3.0,
        }
    }
}

impl FieldParams {
    pub fn from_map(map: &FlatParams) -> Self {
        let d = Self::default();
        Self {
            charge1: read(map, "charge1", d.charge1),
            charge2: read(map, "charge2", d.charge2),
        }
    }
}

/// Parameters of exactly one scenario. A session reads it but never mutates
/// it; a slider change produces a whole new set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterSet {
    Projectile(ProjectileParams),
    Pendulum(PendulumParams),
    Spring(SpringParams),
    Circular(CircularParams),
    Collision(CollisionParams),
    Field(FieldParams),
}

impl ParameterSet {
    /// Defaults for `kind`
    pub fn defaults(kind: ScenarioKind) -> Self {
        Self::from_map(kind, &FlatParams::new())
    }

    /// Build the set for `kind` from a flat map, substituting defaults
    pub fn from_map(kind: ScenarioKind, map: &FlatParams) -> Self {
        match kind {
            ScenarioKind::Projectile => ParameterSet::Projectile(ProjectileParams::from_map(map)),
            ScenarioKind::Pendulum => ParameterSet::Pendulum(PendulumParams::from_map(map)),
            ScenarioKind::Spring => ParameterSet::Spring(SpringParams::from_map(map)),
            ScenarioKind::Circular => ParameterSet::Circular(CircularParams::from_map(map)),
            ScenarioKind::Collision => ParameterSet::Collision(CollisionParams::from_map(map)),
            ScenarioKind::Field => ParameterSet::Field(FieldParams::from_map(map)),
        }
    }

    /// Build the set for `kind` from a `name=value&...` query string
    pub fn from_query(kind: ScenarioKind, query: &str) -> Self {
        Self::from_map(kind, &parse_query(query))
    }

    pub fn kind(&self) -> ScenarioKind {
        match self {
            ParameterSet::Projectile(_) => ScenarioKind::Projectile,
            ParameterSet::Pendulum(_) => ScenarioKind::Pendulum,
            ParameterSet::Spring(_) => ScenarioKind::Spring,
            ParameterSet::Circular(_) => ScenarioKind::Circular,
            ParameterSet::Collision(_) => ScenarioKind::Collision,
            ParameterSet::Field(_) => ScenarioKind::Field,
        }
    }

    /// Parameter names and values, in a stable order
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        match self {
            ParameterSet::Projectile(p) => vec![
                ("speed", p.speed),
                ("angle", p.angle),
                ("gravitationalAccel", p.gravity),
            ],
            ParameterSet::Pendulum(p) => vec![
                ("length", p.length),
                ("gravitationalAccel", p.gravity),
                ("amplitude", p.amplitude),
            ],
            ParameterSet::Spring(p) => vec![
                ("springConstant", p.k),
                ("mass", p.mass),
                ("amplitude", p.amplitude),
            ],
            ParameterSet::Circular(p) => vec![
                ("radius", p.radius),
                ("angularSpeed", p.angular_speed),
            ],
            ParameterSet::Collision(p) => vec![
                ("mass1", p.mass1),
                ("mass2", p.mass2),
                ("velocity1", p.velocity1),
                ("velocity2", p.velocity2),
                ("radius1", p.radius1),
                ("radius2", p.radius2),
                ("restitution", p.restitution),
            ],
            ParameterSet::Field(p) => vec![("charge1", p.charge1), ("charge2", p.charge2)],
        }
    }

    /// Flat string map for the summary-view handoff
    pub fn to_map(&self) -> FlatParams {
        self.entries()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// URL-encoded `name=value&...` rendering of [`ParameterSet::entries`]
    pub fn to_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (k, v) in self.entries() {
            query.append_pair(k, &v.to_string());
        }
        query.finish()
    }
}

/// Split a URL-encoded `name=value&...` string (optionally starting with `?`)
/// into a flat map. `%XX` escapes and `+` are decoded; pairs without `=` map
/// to an empty value; later duplicates win.
pub fn parse_query(query: &str) -> FlatParams {
    let query = query.trim().trim_start_matches('?');
    form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect()
}
