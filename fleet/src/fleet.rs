//! The ordered robot collection under simulation.

use telemetry::Reporter;

use crate::error::{FleetError, FleetResult};
use crate::{BatteryPolicy, Robot, RobotId, SensorReading};

/// An ordered fleet of robots sharing one battery policy.
///
/// Robot names are unique within a fleet. The fleet is the only owner of its
/// robots: removing one disposes it, and disposing the fleet disposes every
/// robot still in it.
///
/// A fleet cannot be cloned, so no robot can be disposed twice:
///
/// ```compile_fail
/// use fleet::{BatteryPolicy, Fleet};
///
/// let fleet: Fleet<()> = Fleet::new(BatteryPolicy::default()).unwrap();
/// let copy = fleet.clone();
/// ```
#[derive(Debug, PartialEq)]
pub struct Fleet<T = SensorReading> {
    robots: Vec<Robot<T>>,
    policy: BatteryPolicy,
    cycles_run: u32,
}

impl<T> Fleet<T> {
    /// Creates an empty fleet after validating `policy`.
    pub fn new(policy: BatteryPolicy) -> FleetResult<Self> {
        policy.validate()?;
        Ok(Self {
            robots: Vec::new(),
            policy,
            cycles_run: 0,
        })
    }

    /// Creates a fleet from robots, in order.
    pub fn with_robots(
        policy: BatteryPolicy,
        robots: impl IntoIterator<Item = Robot<T>>,
    ) -> FleetResult<Self> {
        let mut fleet = Self::new(policy)?;
        for robot in robots {
            fleet.push(robot)?;
        }
        Ok(fleet)
    }

    /// Appends a robot to the end of the fleet.
    pub fn push(&mut self, robot: Robot<T>) -> FleetResult<()> {
        if self.position(robot.name()).is_some() {
            return Err(FleetError::DuplicateName {
                name: robot.name().to_owned(),
            });
        }
        tracing::debug!(robot = robot.name(), kind = %robot.kind(), "robot joined fleet");
        self.robots.push(robot);
        Ok(())
    }

    /// Removes the named robot and disposes it.
    pub fn remove(&mut self, name: &str, reporter: &mut dyn Reporter) -> FleetResult<RobotId> {
        let index = self
            .position(name)
            .ok_or_else(|| FleetError::RobotNotFound {
                name: name.to_owned(),
            })?;
        Ok(self.dispose_at(index, reporter))
    }

    /// Removes the robot at `index` and disposes it.
    pub fn remove_at(
        &mut self,
        index: usize,
        reporter: &mut dyn Reporter,
    ) -> FleetResult<RobotId> {
        if index >= self.robots.len() {
            return Err(FleetError::IndexOutOfRange {
                index,
                len: self.robots.len(),
            });
        }
        Ok(self.dispose_at(index, reporter))
    }

    /// Disposes every remaining robot, in order. Returns how many there were.
    pub fn dispose(self, reporter: &mut dyn Reporter) -> usize {
        let count = self.robots.len();
        for robot in self.robots {
            robot.dispose(reporter);
        }
        count
    }

    /// Number of robots in the fleet.
    pub fn len(&self) -> usize {
        self.robots.len()
    }

    /// Whether the fleet has no robots left.
    pub fn is_empty(&self) -> bool {
        self.robots.is_empty()
    }

    /// Robots in fleet order.
    pub fn iter(&self) -> std::slice::Iter<'_, Robot<T>> {
        self.robots.iter()
    }

    /// Looks up a robot by name.
    pub fn get(&self, name: &str) -> Option<&Robot<T>> {
        self.robots.iter().find(|robot| robot.name() == name)
    }

    /// Robot names in fleet order.
    pub fn names(&self) -> Vec<&str> {
        self.robots.iter().map(Robot::name).collect()
    }

    /// The battery policy every robot moves under.
    pub const fn policy(&self) -> &BatteryPolicy {
        &self.policy
    }

    /// Number of mission cycles executed on this fleet.
    pub const fn cycles_run(&self) -> u32 {
        self.cycles_run
    }

    /// Marks the start of a mission cycle and returns its 1-based number.
    pub(crate) fn begin_cycle(&mut self) -> u32 {
        self.cycles_run = self.cycles_run.saturating_add(1);
        self.cycles_run
    }

    pub(crate) fn robots_mut(&mut self) -> &mut [Robot<T>] {
        &mut self.robots
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.robots.iter().position(|robot| robot.name() == name)
    }

    fn dispose_at(&mut self, index: usize, reporter: &mut dyn Reporter) -> RobotId {
        let robot = self.robots.remove(index);
        let id = robot.id();
        tracing::info!(
            robot = robot.name(),
            id = id.raw(),
            remaining = self.robots.len(),
            "robot removed from fleet"
        );
        robot.dispose(reporter);
        id
    }
}

impl<'a, T> IntoIterator for &'a Fleet<T> {
    type Item = &'a Robot<T>;
    type IntoIter = std::slice::Iter<'a, Robot<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
