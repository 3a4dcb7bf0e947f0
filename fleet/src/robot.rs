//! Robot variants and the movable capability.

use std::fmt;

use telemetry::{Reporter, StatusEvent};

use crate::{Battery, BatteryPolicy, RobotId, Sensor, SensorReading};

/// The robot variants in a mixed fleet.
///
/// Variants differ only in per-move battery cost and in how their moves are
/// described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RobotKind {
    /// Ground robot.
    Rover,

    /// Aerial robot.
    Drone,
}

impl RobotKind {
    /// Every variant.
    pub const ALL: [Self; 2] = [Self::Rover, Self::Drone];

    /// The largest per-move cost over all variants.
    pub const MAX_MOVE_COST: u8 = {
        let rover = Self::Rover.move_cost();
        let drone = Self::Drone.move_cost();
        if rover > drone {
            rover
        } else {
            drone
        }
    };

    /// Battery spent by one move.
    #[must_use]
    pub const fn move_cost(self) -> u8 {
        match self {
            Self::Rover => 5,
            Self::Drone => 15,
        }
    }

    /// Verb describing a move in progress.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Rover => "driving",
            Self::Drone => "flying",
        }
    }

    /// Name of the action refused on a critical battery.
    #[must_use]
    pub const fn forbidden_action(self) -> &'static str {
        match self {
            Self::Rover => "Movement",
            Self::Drone => "Flight",
        }
    }
}

impl fmt::Display for RobotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rover => write!(f, "rover"),
            Self::Drone => write!(f, "drone"),
        }
    }
}

/// What a single move attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Battery was spent on the move.
    Moved { cost: u8, battery: Battery },

    /// The move was refused and the battery recharged instead.
    Recharged { battery: Battery },
}

impl MoveOutcome {
    /// Battery level after the attempt.
    #[must_use]
    pub const fn battery(self) -> Battery {
        match self {
            Self::Moved { battery, .. } | Self::Recharged { battery } => battery,
        }
    }
}

/// An entity that can attempt one move under a battery policy.
pub trait Movable {
    /// Attempts one move, reporting what happened.
    fn step(&mut self, policy: &BatteryPolicy, reporter: &mut dyn Reporter) -> MoveOutcome;
}

/// A robot with a battery and an owned sensor.
///
/// Robots are not `Clone`: each one is disposed exactly once.
///
/// ```compile_fail
/// use fleet::Robot;
///
/// let robot = Robot::rover("Curiosity", ());
/// let copy = robot.clone();
/// ```
#[derive(Debug, PartialEq)]
pub struct Robot<T = SensorReading> {
    id: RobotId,
    name: String,
    kind: RobotKind,
    battery: Battery,
    sensor: Sensor<T>,
}

impl<T> Robot<T> {
    /// Creates a fully charged robot and binds its sensor to it.
    pub fn new(kind: RobotKind, name: impl Into<String>, sensor_data: T) -> Self {
        let id = RobotId::next();
        Self {
            id,
            name: name.into(),
            kind,
            battery: Battery::FULL,
            sensor: Sensor::new(id, sensor_data),
        }
    }

    /// Creates a rover.
    pub fn rover(name: impl Into<String>, sensor_data: T) -> Self {
        Self::new(RobotKind::Rover, name, sensor_data)
    }

    /// Creates a drone.
    pub fn drone(name: impl Into<String>, sensor_data: T) -> Self {
        Self::new(RobotKind::Drone, name, sensor_data)
    }

    /// Starts the robot at `percent` charge instead of full.
    #[must_use]
    pub fn with_battery(mut self, percent: u8) -> Self {
        self.battery = Battery::new(percent);
        self
    }

    /// Process-unique ID, shared with the sensor.
    pub const fn id(&self) -> RobotId {
        self.id
    }

    /// Name, unique within a fleet.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variant of the robot.
    pub const fn kind(&self) -> RobotKind {
        self.kind
    }

    /// Current charge.
    pub const fn battery(&self) -> Battery {
        self.battery
    }

    /// The attached sensor.
    pub const fn sensor(&self) -> &Sensor<T> {
        &self.sensor
    }

    /// Mutable access to the attached sensor.
    pub fn sensor_mut(&mut self) -> &mut Sensor<T> {
        &mut self.sensor
    }

    /// Resets the battery to the policy's recharge level.
    pub fn emergency_recharge(&mut self, policy: &BatteryPolicy, reporter: &mut dyn Reporter) {
        reporter.report(StatusEvent::EmergencyRecharge {
            robot: self.name.clone(),
        });
        self.battery = Battery::new(policy.recharge_level);
        tracing::debug!(robot = %self.name, battery = self.battery.percent(), "battery recharged");
    }

    /// Ends the robot's lifetime.
    ///
    /// Reports the robot's destruction, then its sensor's, and returns the
    /// sensor payload.
    pub fn dispose(self, reporter: &mut dyn Reporter) -> T {
        tracing::debug!(robot = %self.name, id = self.id.raw(), "disposing robot");
        reporter.report(StatusEvent::RobotDestroyed { robot: self.name });
        self.sensor.dispose(reporter)
    }
}

impl<T> Movable for Robot<T> {
    fn step(&mut self, policy: &BatteryPolicy, reporter: &mut dyn Reporter) -> MoveOutcome {
        if self.battery.is_at_or_below(policy.critical_threshold) {
            reporter.report(StatusEvent::MovementForbidden {
                robot: self.name.clone(),
                action: self.kind.forbidden_action(),
            });
            self.emergency_recharge(policy, reporter);
            return MoveOutcome::Recharged {
                battery: self.battery,
            };
        }

        let cost = self.kind.move_cost();
        self.battery = self.battery.drained(cost);
        reporter.report(StatusEvent::Moved {
            robot: self.name.clone(),
            verb: self.kind.verb(),
            battery: self.battery.percent(),
        });
        MoveOutcome::Moved {
            cost,
            battery: self.battery,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use telemetry::Recorder;

    #[test]
    fn kind_costs_and_words() {
        assert_eq!(RobotKind::Rover.move_cost(), 5);
        assert_eq!(RobotKind::Drone.move_cost(), 15);
        assert_eq!(RobotKind::Rover.verb(), "driving");
        assert_eq!(RobotKind::Drone.verb(), "flying");
        assert_eq!(RobotKind::Rover.forbidden_action(), "Movement");
        assert_eq!(RobotKind::Drone.forbidden_action(), "Flight");
    }

    #[test]
    fn max_move_cost_covers_all_kinds() {
        let max = RobotKind::ALL
            .iter()
            .map(|kind| kind.move_cost())
            .max()
            .unwrap();
        assert_eq!(max, RobotKind::MAX_MOVE_COST);
    }

    #[test]
    fn new_robot_is_full_and_sensor_bound() {
        let robot = Robot::rover("Curiosity", 42);
        assert_eq!(robot.battery(), Battery::FULL);
        assert_eq!(robot.sensor().id(), robot.id());
        assert_eq!(*robot.sensor().data(), 42);
        assert_eq!(robot.kind(), RobotKind::Rover);
        assert_eq!(robot.name(), "Curiosity");
    }

    #[test]
    fn rover_step_spends_five() {
        let mut recorder = Recorder::new();
        let mut robot = Robot::rover("Curiosity", ());
        let outcome = robot.step(&BatteryPolicy::default(), &mut recorder);
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                cost: 5,
                battery: Battery::new(95)
            }
        );
        assert_eq!(recorder.lines(), vec!["Curiosity is driving | Battery: 95%"]);
    }

    #[test]
    fn drone_step_spends_fifteen() {
        let mut recorder = Recorder::new();
        let mut robot = Robot::drone("Ingenuity", ());
        robot.step(&BatteryPolicy::default(), &mut recorder);
        assert_eq!(robot.battery().percent(), 85);
        assert_eq!(recorder.lines(), vec!["Ingenuity is flying | Battery: 85%"]);
    }

    #[test]
    fn threshold_is_checked_before_spending() {
        let mut recorder = Recorder::new();
        let mut robot = Robot::drone("Ingenuity", ()).with_battery(20);
        let outcome = robot.step(&BatteryPolicy::default(), &mut recorder);
        assert_eq!(
            outcome,
            MoveOutcome::Recharged {
                battery: Battery::FULL
            }
        );
        assert_eq!(
            recorder.lines(),
            vec![
                "Ingenuity: Battery critical. Flight forbidden.",
                "Ingenuity: EMERGENCY RECHARGE ACTIVATED",
            ]
        );
    }

    #[test]
    fn just_above_threshold_still_moves() {
        let mut recorder = Recorder::new();
        let mut robot = Robot::drone("Ingenuity", ()).with_battery(25);
        let outcome = robot.step(&BatteryPolicy::default(), &mut recorder);
        assert_eq!(outcome.battery().percent(), 10);
    }

    #[test]
    fn rover_forbidden_message() {
        let mut recorder = Recorder::new();
        let mut robot = Robot::rover("Spirit", ()).with_battery(3);
        robot.step(&BatteryPolicy::default(), &mut recorder);
        assert_eq!(
            recorder.lines()[0],
            "Spirit: Battery critical. Movement forbidden."
        );
    }

    #[test]
    fn emergency_recharge_is_unconditional() {
        let mut recorder = Recorder::new();
        let mut robot = Robot::rover("Curiosity", ()).with_battery(90);
        robot.emergency_recharge(&BatteryPolicy::default(), &mut recorder);
        assert_eq!(robot.battery(), Battery::FULL);
        assert_eq!(recorder.events().len(), 1);
    }

    #[test]
    fn dispose_reports_robot_then_sensor() {
        let mut recorder = Recorder::new();
        let robot = Robot::rover("Perseverance", 42);
        let id = robot.id();
        let data = robot.dispose(&mut recorder);
        assert_eq!(data, 42);
        assert_eq!(
            recorder.events(),
            &[
                StatusEvent::RobotDestroyed {
                    robot: "Perseverance".to_owned()
                },
                StatusEvent::SensorDestroyed {
                    sensor_id: id.raw()
                },
            ]
        );
    }
}
