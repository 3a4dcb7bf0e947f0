//! Sensors attached to robots.

use std::fmt;

use telemetry::{Reporter, StatusEvent};

use crate::RobotId;

/// A sensor bound to its owning robot.
///
/// The payload type is unconstrained. A sensor has no lifecycle of its own:
/// it is created with its robot and disposed with it.
#[derive(Debug, PartialEq)]
pub struct Sensor<T> {
    id: RobotId,
    data: T,
}

impl<T> Sensor<T> {
    /// Creates a sensor owned by the robot `id`.
    pub const fn new(id: RobotId, data: T) -> Self {
        Self { id, data }
    }

    /// The owning robot's ID.
    pub const fn id(&self) -> RobotId {
        self.id
    }

    /// The sensor payload.
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Replaces the payload, returning the previous one.
    pub fn replace(&mut self, data: T) -> T {
        std::mem::replace(&mut self.data, data)
    }

    /// Ends the sensor's lifetime, reporting it, and hands back the payload.
    pub fn dispose(self, reporter: &mut dyn Reporter) -> T {
        reporter.report(StatusEvent::SensorDestroyed {
            sensor_id: self.id.raw(),
        });
        self.data
    }
}

/// Payload type used by the default roster and mission config files.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SensorReading {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for SensorReading {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for SensorReading {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for SensorReading {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for SensorReading {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SensorReading {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for SensorReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}
