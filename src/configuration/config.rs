//! Configuration types for loading simulation runs from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation run. A run consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`CloudConfig`]      – initial-cloud settings (particle count)
//! - [`ScenarioConfig`]   – top-level wrapper used to load a run from YAML
//!
//! # YAML format
//! An example run YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   timesteps: 10          # number of unit steps to integrate
//!   seed: 42               # deterministic sampler seed
//!   min_dist: 0.01         # softening floor on pair separation
//!   G: 0.001               # gravitational constant
//!
//! cloud:
//!   count: 20000           # total number of particles
//! ```
//!
//! Every parameter has a default, so a minimal file only needs the cloud
//! count. The engine maps this configuration into its runtime scenario
//! representation via `Scenario::build_scenario`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Global numerical and physical parameters for a run
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_timesteps")]
    pub timesteps: u32, // number of unit steps to integrate
    #[serde(default = "default_seed")]
    pub seed: u64, // deterministic seed, makes runs reproducible
    #[serde(default = "default_min_dist")]
    pub min_dist: f64, // softening floor on pair separation
    #[serde(default = "default_grav")]
    pub G: f64, // gravitational constant
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            timesteps: default_timesteps(),
            seed: default_seed(),
            min_dist: default_min_dist(),
            G: default_grav(),
        }
    }
}

/// Initial-cloud settings
#[derive(Deserialize, Debug, Clone)]
pub struct CloudConfig {
    pub count: usize, // total number of particles in the run
}

/// Top-level run configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig, // numerical parameters and constants
    pub cloud: CloudConfig, // initial-cloud settings
}

fn default_timesteps() -> u32 {
    10
}

fn default_seed() -> u64 {
    42
}

fn default_min_dist() -> f64 {
    0.01
}

fn default_grav() -> f64 {
    0.001
}

impl ScenarioConfig {
    /// Load a run configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
