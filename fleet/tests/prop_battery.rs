use fleet::{execute_mission, BatteryPolicy, Fleet, MoveOutcome, Movable, Robot, RobotKind};
use proptest::prelude::*;
use telemetry::{Recorder, StatusEvent};

fn kind_strategy() -> impl Strategy<Value = RobotKind> {
    prop_oneof![Just(RobotKind::Rover), Just(RobotKind::Drone)]
}

#[derive(Clone, Debug)]
enum Op {
    Cycle,
    Push(RobotKind),
    RemoveAt(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::Cycle),
        1 => kind_strategy().prop_map(Op::Push),
        1 => (0usize..8).prop_map(Op::RemoveAt),
    ]
}

proptest! {
    #[test]
    fn prop_single_step_rule(kind in kind_strategy(), start in 0u8..=100) {
        let policy = BatteryPolicy::default();
        let mut recorder = Recorder::new();
        let mut robot = Robot::new(kind, "probe", ()).with_battery(start);

        let outcome = robot.step(&policy, &mut recorder);
        let after = robot.battery().percent();

        prop_assert!(after <= 100);
        if start <= policy.critical_threshold {
            prop_assert_eq!(after, 100);
            prop_assert!(
                matches!(outcome, MoveOutcome::Recharged { .. }),
                "expected a recharge"
            );
        } else {
            prop_assert_eq!(after, start - kind.move_cost());
            prop_assert!(
                matches!(outcome, MoveOutcome::Moved { .. }),
                "expected a move"
            );
        }
    }

    #[test]
    fn prop_valid_policies_never_underflow(
        kind in kind_strategy(),
        threshold in 14u8..99,
        steps in 1usize..64,
    ) {
        let policy = BatteryPolicy::new(threshold, 100);
        prop_assert!(policy.validate().is_ok());
        let mut recorder = Recorder::new();
        let mut robot = Robot::new(kind, "probe", ());
        for _ in 0..steps {
            let before = robot.battery().percent();
            robot.step(&policy, &mut recorder);
            let after = robot.battery().percent();
            if before > threshold {
                prop_assert_eq!(u16::from(after) + u16::from(kind.move_cost()), u16::from(before));
            } else {
                prop_assert_eq!(after, 100);
            }
        }
    }

    #[test]
    fn prop_random_fleet_operations(ops in prop::collection::vec(op_strategy(), 1..64)) {
        let mut fleet: Fleet<()> = Fleet::new(BatteryPolicy::default()).unwrap();
        let mut recorder = Recorder::new();
        let mut next_name = 0u32;
        let mut removed = 0usize;

        for op in &ops {
            match op {
                Op::Cycle => {
                    let summary = execute_mission(&mut fleet, &mut recorder);
                    prop_assert_eq!((summary.moved + summary.recharged) as usize, fleet.len());
                }
                Op::Push(kind) => {
                    next_name += 1;
                    fleet.push(Robot::new(*kind, format!("bot-{next_name}"), ())).unwrap();
                }
                Op::RemoveAt(index) => {
                    let expected_ok = *index < fleet.len();
                    let result = fleet.remove_at(*index, &mut recorder);
                    prop_assert_eq!(result.is_ok(), expected_ok);
                    if expected_ok {
                        removed += 1;
                    }
                }
            }
            for robot in &fleet {
                prop_assert!(robot.battery().percent() <= 100);
            }
        }

        let robot_notices = recorder.count(|e| matches!(e, StatusEvent::RobotDestroyed { .. }));
        let sensor_notices = recorder.count(|e| matches!(e, StatusEvent::SensorDestroyed { .. }));
        prop_assert_eq!(robot_notices, removed);
        prop_assert_eq!(sensor_notices, removed);
    }
}
