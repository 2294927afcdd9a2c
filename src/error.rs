//! Error types for physlab.
//!
//! Physics code never fails: bad parameter values are corrected silently.
//! Errors only come from the edges (scenario names typed by a user, scenario
//! files on disk).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhyslabError {
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, PhyslabError>;
