//! Configuration types for loading teaching scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario file. A scenario file consists of:
//!
//! - [`EngineConfig`]   – which scenario to run and for how many ticks
//! - [`Arena`]          – optional arena extents (collision, field)
//! - `parameters`       – flat `name: value` map, read like slider values
//! - [`ScenarioConfig`] – top-level wrapper used to load a file
//!
//! # YAML format
//! An example collision scenario matching these types:
//!
//! ```yaml
//! engine:
//!   scenario: collision   # projectile | pendulum | spring | circular | collision | field
//!   ticks: 600            # ticks to drive when running headless
//!
//! arena:
//!   width: 800
//!   height: 400
//!
//! parameters:
//!   mass1: 2.0
//!   mass2: 1.0
//!   velocity1: 3.0
//!   velocity2: -1.0
//!   restitution: 0.8
//! ```
//!
//! Unknown parameter names are ignored and bad values fall back to defaults
//! when the file is turned into a `ParameterSet`.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::simulation::engine::Arena;
use crate::simulation::params::{FlatParams, ParameterSet, ScenarioKind};

fn default_ticks() -> u64 {
    600
}

/// Which scenario to run and how long to drive it
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub scenario: ScenarioKind, // scenario kind, lowercase name
    #[serde(default = "default_ticks")]
    pub ticks: u64, // number of fixed steps to run headless
}

/// Top-level scenario file
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    #[serde(default)]
    pub arena: Option<Arena>,
    #[serde(default)]
    pub parameters: BTreeMap<String, serde_yaml::Value>, // numbers or strings
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Load a scenario file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// Parameters as the flat string map the UI would hand over;
    /// values that are neither numbers nor strings are left out
    pub fn flat_parameters(&self) -> FlatParams {
        self.parameters
            .iter()
            .filter_map(|(k, v)| {
                let s = match v {
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::String(s) => s.clone(),
                    _ => return None,
                };
                Some((k.clone(), s))
            })
            .collect()
    }

    pub fn parameter_set(&self) -> ParameterSet {
        ParameterSet::from_map(self.engine.scenario, &self.flat_parameters())
    }

    pub fn arena(&self) -> Arena {
        self.arena.unwrap_or_default().sanitized()
    }
}
