//! Error types for fleet operations.

use std::fmt;

/// Result type for fleet operations.
pub type FleetResult<T> = Result<T, FleetError>;

/// Errors that can occur when building or mutating a fleet.
///
/// The low-battery condition is not an error; it is handled by the
/// recharge policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetError {
    /// A robot with this name is already in the fleet.
    DuplicateName { name: String },

    /// No robot with this name is in the fleet.
    RobotNotFound { name: String },

    /// Positional removal past the end of the fleet.
    IndexOutOfRange { index: usize, len: usize },

    /// The battery policy cannot keep batteries within range.
    InvalidPolicy { reason: PolicyReason },
}

/// Details for invalid battery policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyReason {
    RechargeAboveFull {
        recharge_level: u8,
    },
    ThresholdNotBelowRecharge {
        threshold: u8,
        recharge_level: u8,
    },
    ThresholdBelowMoveCost {
        threshold: u8,
        move_cost: u8,
    },
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { name } => write!(f, "robot {name:?} is already in the fleet"),
            Self::RobotNotFound { name } => write!(f, "robot {name:?} not found in the fleet"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "fleet index {index} out of range for {len} robots")
            }
            Self::InvalidPolicy { reason } => write!(f, "invalid battery policy: {reason}"),
        }
    }
}

impl fmt::Display for PolicyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RechargeAboveFull { recharge_level } => {
                write!(f, "recharge level {recharge_level} exceeds 100")
            }
            Self::ThresholdNotBelowRecharge {
                threshold,
                recharge_level,
            } => {
                write!(
                    f,
                    "critical threshold {threshold} must be below recharge level {recharge_level}"
                )
            }
            Self::ThresholdBelowMoveCost {
                threshold,
                move_cost,
            } => {
                write!(
                    f,
                    "critical threshold {threshold} lets a move costing {move_cost} drain below zero"
                )
            }
        }
    }
}

impl std::error::Error for FleetError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_duplicate_name() {
        let err = FleetError::DuplicateName {
            name: "Curiosity".to_owned(),
        };
        assert_eq!(err.to_string(), "robot \"Curiosity\" is already in the fleet");
    }

    #[test]
    fn error_display_not_found() {
        let err = FleetError::RobotNotFound {
            name: "Spirit".to_owned(),
        };
        assert!(err.to_string().contains("\"Spirit\" not found"));
    }

    #[test]
    fn error_display_index() {
        let err = FleetError::IndexOutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "fleet index 3 out of range for 2 robots");
    }

    #[test]
    fn error_display_policy() {
        let err = FleetError::InvalidPolicy {
            reason: PolicyReason::ThresholdBelowMoveCost {
                threshold: 5,
                move_cost: 15,
            },
        };
        let msg = err.to_string();
        assert!(msg.starts_with("invalid battery policy"));
        assert!(msg.contains("15"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&FleetError::IndexOutOfRange { index: 0, len: 0 });
    }
}
