use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{Algorithm, DEFAULT_GRID_SIZE, Density};
use crate::error::{LifeError, Result};

/// Driver settings. Every field has a default so partial files are accepted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LifeConfig {
    pub grid_size: usize,
    pub density: Density,
    pub tick_interval_ms: u64,
    /// Seed for reproducible random grids; `None` draws from the thread RNG
    pub seed: Option<u64>,
    pub algorithm: Algorithm,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            density: Density::ONE_THIRD,
            tick_interval_ms: 200,
            seed: None,
            algorithm: Algorithm::Serial,
        }
    }
}

impl LifeConfig {
    /// Read and validate a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(LifeError::config("grid_size must be positive"));
        }
        if self.tick_interval_ms == 0 {
            return Err(LifeError::config("tick_interval_ms must be positive"));
        }
        self.density
            .validate()
            .map_err(|e| LifeError::config(format!("density: {e}")))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
