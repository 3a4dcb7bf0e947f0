//! The mission loop and the mission runner built on it.

use telemetry::{Reporter, StatusEvent};

use crate::error::{FleetError, FleetResult};
use crate::{Battery, Fleet, MoveOutcome, Movable, RobotId, RobotKind};

/// Name of the robot the default mission removes.
pub const DEFAULT_REMOVAL: &str = "Perseverance";

/// Number of cycles the default mission runs before removal.
pub const DEFAULT_CYCLES: u32 = 6;

/// Counts for one mission cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CycleSummary {
    /// 1-based cycle number on this fleet.
    pub cycle: u32,
    /// Robots that spent battery on a move.
    pub moved: u32,
    /// Robots that were recharged instead of moving.
    pub recharged: u32,
}

/// Runs one mission cycle: every robot currently in the fleet attempts one
/// move, in fleet order.
pub fn execute_mission<T>(fleet: &mut Fleet<T>, reporter: &mut dyn Reporter) -> CycleSummary {
    let cycle = fleet.begin_cycle();
    reporter.report(StatusEvent::MissionStarted { cycle });

    let policy = *fleet.policy();
    let mut summary = CycleSummary {
        cycle,
        ..CycleSummary::default()
    };
    for robot in fleet.robots_mut() {
        match robot.step(&policy, reporter) {
            MoveOutcome::Moved { .. } => summary.moved += 1,
            MoveOutcome::Recharged { .. } => summary.recharged += 1,
        }
    }
    tracing::debug!(
        cycle,
        moved = summary.moved,
        recharged = summary.recharged,
        "mission cycle complete"
    );
    summary
}

/// A scripted mission: run cycles, optionally remove one robot, then keep
/// running on the reduced fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    /// Cycles before the removal.
    pub cycles: u32,
    /// Robot removed after the first batch of cycles.
    pub removal: Option<String>,
    /// Cycles run on the reduced fleet.
    pub post_removal_cycles: u32,
}

impl Default for Mission {
    fn default() -> Self {
        Self {
            cycles: DEFAULT_CYCLES,
            removal: Some(DEFAULT_REMOVAL.to_owned()),
            post_removal_cycles: 0,
        }
    }
}

impl Mission {
    /// Creates a mission with no removal.
    #[must_use]
    pub const fn cycles(cycles: u32) -> Self {
        Self {
            cycles,
            removal: None,
            post_removal_cycles: 0,
        }
    }

    /// Sets the robot removed after the first batch of cycles.
    #[must_use]
    pub fn remove(mut self, name: impl Into<String>) -> Self {
        self.removal = Some(name.into());
        self
    }

    /// Sets the number of cycles run after the removal.
    #[must_use]
    pub const fn then(mut self, post_removal_cycles: u32) -> Self {
        self.post_removal_cycles = post_removal_cycles;
        self
    }

    /// Runs the mission on `fleet`.
    ///
    /// The removal target is checked before any cycle runs, so an unknown
    /// name leaves the fleet untouched.
    pub fn run<T>(
        &self,
        fleet: &mut Fleet<T>,
        reporter: &mut dyn Reporter,
    ) -> FleetResult<MissionSummary> {
        if let Some(name) = &self.removal {
            if fleet.get(name).is_none() {
                return Err(FleetError::RobotNotFound { name: name.clone() });
            }
        }

        tracing::info!(
            robots = fleet.len(),
            cycles = self.cycles,
            removal = self.removal.as_deref().unwrap_or("-"),
            post_removal_cycles = self.post_removal_cycles,
            "mission starting"
        );

        let mut summary = MissionSummary::default();
        for _ in 0..self.cycles {
            summary.record(execute_mission(fleet, reporter));
        }

        if let Some(name) = &self.removal {
            reporter.report(StatusEvent::RemovalStarted { robot: name.clone() });
            let id = fleet.remove(name, reporter)?;
            summary.removed = Some(RemovedRobot {
                name: name.clone(),
                id,
            });
        }

        for _ in 0..self.post_removal_cycles {
            summary.record(execute_mission(fleet, reporter));
        }

        summary.robots = fleet
            .iter()
            .map(|robot| RobotStatus {
                name: robot.name().to_owned(),
                kind: robot.kind(),
                battery: robot.battery(),
            })
            .collect();
        Ok(summary)
    }
}

/// Robot removed during a mission.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RemovedRobot {
    pub name: String,
    pub id: RobotId,
}

/// Final state of a robot still in the fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RobotStatus {
    pub name: String,
    pub kind: RobotKind,
    pub battery: Battery,
}

/// Totals for a whole mission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MissionSummary {
    pub cycles_run: u32,
    pub moves: u32,
    pub recharges: u32,
    pub removed: Option<RemovedRobot>,
    pub robots: Vec<RobotStatus>,
}

impl MissionSummary {
    fn record(&mut self, cycle: CycleSummary) {
        self.cycles_run = self.cycles_run.saturating_add(1);
        self.moves = self.moves.saturating_add(cycle.moved);
        self.recharges = self.recharges.saturating_add(cycle.recharged);
    }

    /// Final battery of a robot still in the fleet.
    #[must_use]
    pub fn battery_of(&self, name: &str) -> Option<Battery> {
        self.robots
            .iter()
            .find(|robot| robot.name == name)
            .map(|robot| robot.battery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BatteryPolicy, Robot};
    use telemetry::Recorder;

    fn single(robot: Robot<()>) -> Fleet<()> {
        Fleet::with_robots(BatteryPolicy::default(), [robot]).unwrap()
    }

    #[test]
    fn cycle_banner_precedes_moves() {
        let mut fleet = single(Robot::rover("Curiosity", ()));
        let mut recorder = Recorder::new();
        let summary = execute_mission(&mut fleet, &mut recorder);
        assert_eq!(
            summary,
            CycleSummary {
                cycle: 1,
                moved: 1,
                recharged: 0
            }
        );
        assert_eq!(
            recorder.lines(),
            vec![
                "\n--- EXECUTING MISSION ---",
                "Curiosity is driving | Battery: 95%"
            ]
        );
    }

    #[test]
    fn cycle_numbers_increase() {
        let mut fleet = single(Robot::rover("Curiosity", ()));
        let mut recorder = Recorder::new();
        execute_mission(&mut fleet, &mut recorder);
        let second = execute_mission(&mut fleet, &mut recorder);
        assert_eq!(second.cycle, 2);
        assert_eq!(fleet.cycles_run(), 2);
    }

    #[test]
    fn empty_fleet_only_reports_banner() {
        let mut fleet: Fleet<()> = Fleet::new(BatteryPolicy::default()).unwrap();
        let mut recorder = Recorder::new();
        let summary = execute_mission(&mut fleet, &mut recorder);
        assert_eq!(summary.moved + summary.recharged, 0);
        assert_eq!(recorder.events().len(), 1);
    }

    #[test]
    fn default_mission_shape() {
        let mission = Mission::default();
        assert_eq!(mission.cycles, 6);
        assert_eq!(mission.removal.as_deref(), Some("Perseverance"));
        assert_eq!(mission.post_removal_cycles, 0);
    }

    #[test]
    fn unknown_removal_runs_nothing() {
        let mut fleet = single(Robot::rover("Curiosity", ()));
        let mut recorder = Recorder::new();
        let err = Mission::cycles(3)
            .remove("Spirit")
            .run(&mut fleet, &mut recorder)
            .unwrap_err();
        assert!(matches!(err, FleetError::RobotNotFound { .. }));
        assert!(recorder.events().is_empty());
        assert_eq!(fleet.cycles_run(), 0);
    }

    #[test]
    fn summary_totals() {
        let mut fleet = single(Robot::drone("Ingenuity", ()));
        let mut recorder = Recorder::new();
        let summary = Mission::cycles(7).run(&mut fleet, &mut recorder).unwrap();
        assert_eq!(summary.cycles_run, 7);
        assert_eq!(summary.moves, 6);
        assert_eq!(summary.recharges, 1);
        assert_eq!(summary.removed, None);
        assert_eq!(summary.battery_of("Ingenuity"), Some(Battery::FULL));
    }

    #[test]
    fn summary_counters_saturate() {
        let mut summary = MissionSummary {
            cycles_run: u32::MAX,
            moves: u32::MAX - 1,
            recharges: 0,
            ..MissionSummary::default()
        };
        summary.record(CycleSummary {
            cycle: 1,
            moved: 3,
            recharged: 1,
        });
        assert_eq!(summary.cycles_run, u32::MAX);
        assert_eq!(summary.moves, u32::MAX);
        assert_eq!(summary.recharges, 1);
    }
}
