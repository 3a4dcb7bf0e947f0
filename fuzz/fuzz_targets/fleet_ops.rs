#![no_main]

use fleet::{execute_mission, BatteryPolicy, Fleet, Robot, RobotKind};
use libfuzzer_sys::fuzz_target;
use telemetry::{Recorder, StatusEvent};

fuzz_target!(|data: &[u8]| {
    let threshold = data.first().map_or(20, |b| 14 + b % 80);
    let Ok(mut fleet) = Fleet::<u8>::new(BatteryPolicy::new(threshold, 100)) else {
        return;
    };
    let mut recorder = Recorder::new();
    let mut removed = 0usize;

    for (idx, byte) in data.iter().enumerate().skip(1).take(4096) {
        match byte % 4 {
            0 | 1 => {
                execute_mission(&mut fleet, &mut recorder);
            }
            2 => {
                let kind = if byte & 0x80 == 0 {
                    RobotKind::Rover
                } else {
                    RobotKind::Drone
                };
                let robot = Robot::new(kind, format!("bot-{idx}"), *byte).with_battery(byte >> 1);
                fleet.push(robot).expect("names are unique");
            }
            _ => {
                let index = usize::from(byte >> 2);
                if fleet.remove_at(index, &mut recorder).is_ok() {
                    removed += 1;
                }
            }
        }
        for robot in &fleet {
            assert!(robot.battery().percent() <= 100);
        }
    }

    let destroyed = recorder.count(|event| matches!(event, StatusEvent::RobotDestroyed { .. }));
    assert_eq!(destroyed, removed);
});
