//! Core types for the fleet model.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_ROBOT_ID: AtomicU32 = AtomicU32::new(1);

/// A process-unique robot identifier.
///
/// Sensors carry the identifier of the robot that owns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RobotId(u32);

impl RobotId {
    /// Creates a robot ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Allocates the next unused ID for this process.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_ROBOT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<RobotId> for u32 {
    fn from(id: RobotId) -> Self {
        id.0
    }
}

impl fmt::Display for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A battery charge percentage, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Battery(u8);

impl Battery {
    /// A fully charged battery.
    pub const FULL: Self = Self(100);

    /// A flat battery.
    pub const EMPTY: Self = Self(0);

    /// Creates a battery level, clamping anything above 100.
    #[must_use]
    pub const fn new(percent: u8) -> Self {
        if percent > Self::FULL.0 {
            Self::FULL
        } else {
            Self(percent)
        }
    }

    /// Returns the charge percentage.
    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Returns the level after spending `cost`, stopping at zero.
    #[must_use]
    pub const fn drained(self, cost: u8) -> Self {
        Self(self.0.saturating_sub(cost))
    }

    /// Returns `true` if the charge is at or below `threshold`.
    #[must_use]
    pub const fn is_at_or_below(self, threshold: u8) -> bool {
        self.0 <= threshold
    }
}

impl Default for Battery {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<u8> for Battery {
    fn from(percent: u8) -> Self {
        Self::new(percent)
    }
}

impl From<Battery> for u8 {
    fn from(battery: Battery) -> Self {
        battery.0
    }
}

impl fmt::Display for Battery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
