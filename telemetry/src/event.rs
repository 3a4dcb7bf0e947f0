//! Status events emitted by the simulation and the companion exercises.

use std::fmt;

use serde::Serialize;

/// A single human-facing status notice.
///
/// `Display` renders the exact status line printed by the text reporter.
/// Banner events carry their own surrounding blank lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StatusEvent {
    /// A mission cycle is about to run over the fleet.
    MissionStarted { cycle: u32 },

    /// A robot spent battery on its move.
    Moved {
        robot: String,
        /// Present participle of the move ("driving", "flying").
        verb: &'static str,
        battery: u8,
    },

    /// A robot was at or below the critical threshold and did not move.
    MovementForbidden {
        robot: String,
        /// Name of the forbidden action ("Movement", "Flight").
        action: &'static str,
    },

    /// A robot's battery was reset to full.
    EmergencyRecharge { robot: String },

    /// A robot is about to be removed from the fleet.
    RemovalStarted { robot: String },

    /// A robot reached the end of its lifetime.
    RobotDestroyed { robot: String },

    /// A sensor reached the end of its lifetime.
    SensorDestroyed { sensor_id: u32 },

    /// A deposit of a non-positive amount was ignored.
    InvalidAmount { amount: f64 },

    /// A withdrawal larger than the balance was refused.
    InsufficientFunds { requested: f64, balance: f64 },

    /// A thermostat target above the ceiling was capped.
    TooHot { requested: f64, capped: f64 },
}

impl StatusEvent {
    /// Short machine-friendly name of the event kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissionStarted { .. } => "mission_started",
            Self::Moved { .. } => "moved",
            Self::MovementForbidden { .. } => "movement_forbidden",
            Self::EmergencyRecharge { .. } => "emergency_recharge",
            Self::RemovalStarted { .. } => "removal_started",
            Self::RobotDestroyed { .. } => "robot_destroyed",
            Self::SensorDestroyed { .. } => "sensor_destroyed",
            Self::InvalidAmount { .. } => "invalid_amount",
            Self::InsufficientFunds { .. } => "insufficient_funds",
            Self::TooHot { .. } => "too_hot",
        }
    }

    /// Returns `true` for lifecycle (destruction) notices.
    #[must_use]
    pub const fn is_lifecycle(&self) -> bool {
        matches!(
            self,
            Self::RobotDestroyed { .. } | Self::SensorDestroyed { .. }
        )
    }
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissionStarted { .. } => write!(f, "\n--- EXECUTING MISSION ---"),
            Self::Moved {
                robot,
                verb,
                battery,
            } => write!(f, "{robot} is {verb} | Battery: {battery}%"),
            Self::MovementForbidden { robot, action } => {
                write!(f, "{robot}: Battery critical. {action} forbidden.")
            }
            Self::EmergencyRecharge { robot } => {
                write!(f, "{robot}: EMERGENCY RECHARGE ACTIVATED")
            }
            Self::RemovalStarted { robot } => write!(f, "\n--- Deleting {robot} ---\n"),
            Self::RobotDestroyed { robot } => write!(f, "Robot {robot} Destroyed"),
            Self::SensorDestroyed { sensor_id } => write!(f, "Sensor {sensor_id} Destroyed"),
            Self::InvalidAmount { .. } => write!(f, "Invalid amount"),
            Self::InsufficientFunds { .. } => write!(f, "Insufficient funds"),
            Self::TooHot { .. } => write!(f, "WARNING: Too Hot"),
        }
    }
}
