//! Battery policy applied by the fleet on every move.

use crate::error::{FleetError, FleetResult, PolicyReason};
use crate::robot::RobotKind;

/// Threshold and recharge configuration for robot batteries.
///
/// A robot whose battery is at or below `critical_threshold` refuses to move
/// and is recharged to `recharge_level` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct BatteryPolicy {
    /// Battery level at or below which moving is forbidden.
    pub critical_threshold: u8,

    /// Level an emergency recharge restores.
    pub recharge_level: u8,
}

impl Default for BatteryPolicy {
    fn default() -> Self {
        Self {
            critical_threshold: 20,
            recharge_level: 100,
        }
    }
}

impl BatteryPolicy {
    /// Creates a policy from explicit values (not validated).
    #[must_use]
    pub const fn new(critical_threshold: u8, recharge_level: u8) -> Self {
        Self {
            critical_threshold,
            recharge_level,
        }
    }

    /// Checks that no move can push a battery outside `0..=100`.
    pub fn validate(&self) -> FleetResult<()> {
        let reason = if self.recharge_level > 100 {
            Some(PolicyReason::RechargeAboveFull {
                recharge_level: self.recharge_level,
            })
        } else if self.critical_threshold >= self.recharge_level {
            Some(PolicyReason::ThresholdNotBelowRecharge {
                threshold: self.critical_threshold,
                recharge_level: self.recharge_level,
            })
        } else if u16::from(self.critical_threshold) + 1 < u16::from(RobotKind::MAX_MOVE_COST) {
            // Lowest level that still moves is threshold + 1.
            Some(PolicyReason::ThresholdBelowMoveCost {
                threshold: self.critical_threshold,
                move_cost: RobotKind::MAX_MOVE_COST,
            })
        } else {
            None
        };

        match reason {
            Some(reason) => Err(FleetError::InvalidPolicy { reason }),
            None => Ok(()),
        }
    }
}
