//! Configuration types for the simulation.

use crate::error::{Error, Result};
use crate::types::Species;
use serde::{Deserialize, Serialize};

/// Tank dimensions and starting conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TankConfig {
    /// Number of cells across
    pub width: i32,
    /// Number of cells from surface to floor
    pub height: i32,
    /// Water temperature at creation (degrees)
    pub initial_temperature: f64,
    /// Energy stored in each newly spawned lump of food
    pub food_energy: u32,
}

impl Default for TankConfig {
    fn default() -> Self {
        Self {
            width: 15,
            height: 10,
            initial_temperature: 17.0,
            food_energy: 10,
        }
    }
}

impl TankConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 {
            return Err(Error::Validation(format!(
                "tank width must be positive, got {}",
                self.width
            )));
        }
        if self.height <= 0 {
            return Err(Error::Validation(format!(
                "tank height must be positive, got {}",
                self.height
            )));
        }
        if !self.initial_temperature.is_finite() {
            return Err(Error::Validation(
                "initial temperature must be a finite number".to_string(),
            ));
        }
        Ok(())
    }
}

/// Simulation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Tank configuration
    pub tank: TankConfig,
    /// Random seed for reproducibility
    pub seed: u64,
    /// Emit a census log line every this many cycles (0 disables)
    pub census_interval: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tank: TankConfig::default(),
            seed: 0,
            census_interval: 100,
        }
    }
}

/// Output format for the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for the interactive / headless runner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Simulation configuration
    pub simulation: SimulationConfig,
    /// Delay between cycles in interactive mode (milliseconds)
    pub cycle_interval_ms: u64,
    /// Run this many cycles without pausing, then exit
    pub max_cycles: Option<u64>,
    /// Log output format
    pub log_format: LogFormat,
    /// Items spawned before the first cycle
    pub initial_population: Vec<Species>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            cycle_interval_ms: 1000,
            max_cycles: None,
            log_format: LogFormat::Text,
            initial_population: Vec::new(),
        }
    }
}

impl RunnerConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RunnerConfig = serde_json::from_str(json)?;
        config.simulation.tank.validate()?;
        Ok(config)
    }
}
