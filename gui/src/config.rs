//! Startup configuration for the GUI.

use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use anyhow::{ensure, Context};
use log::warn;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PATH: &str = "config.json";

/// Grid size and cosmetic display parameters, read from a JSON file.
///
/// The upper-case keys (`NUM_OF_ROWS`, `CELL_WIDTH`, ...) are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of grid rows
    #[serde(alias = "NUM_OF_ROWS")]
    pub rows: usize,
    /// Number of grid columns
    #[serde(alias = "NUM_OF_COLS")]
    pub cols: usize,
    /// Cell width in points
    #[serde(alias = "CELL_WIDTH")]
    pub cell_width: f32,
    /// Cell height in points
    #[serde(alias = "CELL_HEIGHT")]
    pub cell_height: f32,
    /// Delay between generations while running
    pub step_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            cell_width: 24.0,
            cell_height: 24.0,
            step_interval_ms: 1000,
        }
    }
}

impl Config {
    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!("{} not found, using default configuration", path.display());
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("read config {}", path.display()))
            }
        };
        Self::from_json(&contents).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_json(contents: &str) -> anyhow::Result<Self> {
        let config: Config = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.rows > 0 && self.cols > 0,
            "grid must have at least one row and column, got {}x{}",
            self.rows,
            self.cols
        );
        ensure!(
            self.cell_width > 0.0 && self.cell_height > 0.0,
            "cell size must be positive, got {}x{}",
            self.cell_width,
            self.cell_height
        );
        Ok(())
    }
}
