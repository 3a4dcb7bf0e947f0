//! Mission configuration loaded from TOML.
//!
//! ```toml
//! cycles = 6
//! remove = "Perseverance"
//!
//! [policy]
//! critical_threshold = 20
//!
//! [[robots]]
//! name = "Curiosity"
//! kind = "rover"
//! sensor = 3.14
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::FleetResult;
use crate::mission::{DEFAULT_CYCLES, DEFAULT_REMOVAL};
use crate::{BatteryPolicy, Fleet, Mission, Robot, RobotKind, SensorReading};

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RobotSpec {
    pub name: String,
    pub kind: RobotKind,
    pub sensor: SensorReading,
}

impl RobotSpec {
    /// Creates a roster entry.
    pub fn new(name: impl Into<String>, kind: RobotKind, sensor: impl Into<SensorReading>) -> Self {
        Self {
            name: name.into(),
            kind,
            sensor: sensor.into(),
        }
    }

    /// Builds the robot this entry describes.
    #[must_use]
    pub fn build(&self) -> Robot {
        Robot::new(self.kind, self.name.clone(), self.sensor.clone())
    }
}

/// The roster, battery policy and mission script.
///
/// Fields missing from a file fall back to the built-in mission, except
/// `remove`: a file that does not name a robot to remove removes none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MissionConfig {
    pub cycles: u32,
    #[serde(default)]
    pub remove: Option<String>,
    pub post_removal_cycles: u32,
    pub policy: BatteryPolicy,
    pub robots: Vec<RobotSpec>,
}

impl Default for MissionConfig {
    #[allow(clippy::approx_constant)]
    fn default() -> Self {
        Self {
            cycles: DEFAULT_CYCLES,
            remove: Some(DEFAULT_REMOVAL.to_owned()),
            post_removal_cycles: 0,
            policy: BatteryPolicy::default(),
            robots: vec![
                RobotSpec::new("Curiosity", RobotKind::Rover, 3.14),
                RobotSpec::new("Ingenuity", RobotKind::Drone, "Wind Data"),
                RobotSpec::new(DEFAULT_REMOVAL, RobotKind::Rover, 42),
            ],
        }
    }
}

impl MissionConfig {
    /// Parses a config from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(ConfigError::Parse)
    }

    /// Reads and parses a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            robots = config.robots.len(),
            "loaded mission config"
        );
        Ok(config)
    }

    /// Builds the fleet described by the roster.
    pub fn build_fleet(&self) -> FleetResult<Fleet> {
        Fleet::with_robots(self.policy, self.robots.iter().map(RobotSpec::build))
    }

    /// The mission script described by this config.
    #[must_use]
    pub fn mission(&self) -> Mission {
        Mission {
            cycles: self.cycles,
            removal: self.remove.clone(),
            post_removal_cycles: self.post_removal_cycles,
        }
    }
}

/// Errors from loading a mission config.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io { path: PathBuf, source: std::io::Error },

    /// The contents are not a valid mission config.
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            Self::Parse(e) => write!(f, "invalid mission config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
        }
    }
}
