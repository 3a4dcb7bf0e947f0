//! Robot fleet model, battery policy and mission loop for marsfleet.
//!
//! A [`Fleet`] owns an ordered set of [`Robot`]s. Each robot is a rover or a
//! drone, carries a [`Battery`] and owns exactly one [`Sensor`]. A mission
//! cycle ([`execute_mission`]) asks every robot to move once; a robot whose
//! battery is at or below the policy threshold refuses and recharges instead.
//!
//! # Features
//!
//! - Rover/drone variants behind the [`Movable`] capability
//! - Explicit, exactly-once disposal with lifecycle notices
//! - Scripted missions with removal and a serializable summary
//! - TOML mission configs (`serde` feature)
//!
//! # Design Principles
//!
//! - **Deterministic** - Same roster and mission produce the same events.
//! - **Owner-driven lifetimes** - Robots are disposed by the fleet, never implicitly.
//! - **Policy, not errors** - A flat battery is handled by recharging.

#[cfg(feature = "serde")]
mod config;
mod error;
mod fleet;
mod mission;
mod policy;
mod robot;
mod sensor;
mod types;

#[cfg(feature = "serde")]
pub use config::{ConfigError, MissionConfig, RobotSpec};
pub use error::{FleetError, FleetResult, PolicyReason};
pub use fleet::Fleet;
pub use mission::{
    execute_mission, CycleSummary, Mission, MissionSummary, RemovedRobot, RobotStatus,
    DEFAULT_CYCLES, DEFAULT_REMOVAL,
};
pub use policy::BatteryPolicy;
pub use robot::{MoveOutcome, Movable, Robot, RobotKind};
pub use sensor::{Sensor, SensorReading};
pub use types::{Battery, RobotId};
