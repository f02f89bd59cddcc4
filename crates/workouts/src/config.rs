//! Runtime configuration read from the environment.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::WorkoutError;
use crate::package::{SensorPackage, default_packages};

pub const PACKAGES_VAR: &str = "WORKOUT_PACKAGES";
pub const MODE_VAR: &str = "WORKOUT_MODE";
pub const FORMAT_VAR: &str = "WORKOUT_FORMAT";

/// What the driver does with a package that fails validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Log the rejected package and carry on with the rest of the batch.
    #[default]
    Batch,
    /// Stop at the first rejected package.
    Strict,
}

impl FromStr for Mode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "batch" => Ok(Mode::Batch),
            "strict" => Ok(Mode::Strict),
            other => Err(WorkoutError::InvalidConfig(format!(
                "unknown mode '{other}', expected 'batch' or 'strict'"
            ))),
        }
    }
}

/// How summaries are written to the output stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The human-readable summary line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(WorkoutError::InvalidConfig(format!(
                "unknown output format '{other}', expected 'text' or 'json'"
            ))),
        }
    }
}

/// Configuration for one run of the driver.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// JSON file with the packages to process. `None` uses the built-in batch.
    pub packages_path: Option<PathBuf>,
    pub mode: Mode,
    pub format: OutputFormat,
}

impl Config {
    /// Reads `WORKOUT_PACKAGES`, `WORKOUT_MODE` and `WORKOUT_FORMAT`, falling
    /// back to defaults for unset variables.
    pub fn from_env() -> Result<Self, WorkoutError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, WorkoutError> {
        let packages_path = lookup(PACKAGES_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let mode = match lookup(MODE_VAR) {
            Some(value) => value.trim().parse()?,
            None => Mode::default(),
        };

        let format = match lookup(FORMAT_VAR) {
            Some(value) => value.trim().parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            packages_path,
            mode,
            format,
        })
    }

    /// Loads the configured packages, or the built-in batch if no file is set.
    pub fn load_packages(&self) -> Result<Vec<SensorPackage>, WorkoutError> {
        match &self.packages_path {
            Some(path) => {
                tracing::info!("Loading sensor packages from {}", path.display());
                let raw = std::fs::read_to_string(path)?;
                Ok(serde_json::from_str(&raw)?)
            }
            None => Ok(default_packages()),
        }
    }
}
