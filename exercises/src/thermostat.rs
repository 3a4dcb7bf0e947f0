//! A thermostat with a capped target temperature.

use telemetry::{Reporter, StatusEvent};

/// Highest target the thermostat accepts.
pub const MAX_TEMPERATURE: f64 = 100.0;

/// Holds a target temperature.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Thermostat {
    target: f64,
}

impl Thermostat {
    /// Creates a thermostat targeting 0.0.
    #[must_use]
    pub const fn new() -> Self {
        Self { target: 0.0 }
    }

    /// Sets the target, capping anything above the maximum with a warning.
    pub fn set_temperature(&mut self, temperature: f64, reporter: &mut dyn Reporter) {
        if temperature > MAX_TEMPERATURE {
            reporter.report(StatusEvent::TooHot {
                requested: temperature,
                capped: MAX_TEMPERATURE,
            });
            self.target = MAX_TEMPERATURE;
        } else {
            self.target = temperature;
        }
        tracing::debug!(temperature = self.target, "thermostat target set");
    }

    pub const fn temperature(&self) -> f64 {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use telemetry::Recorder;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Thermostat::new().temperature(), 0.0);
        assert_eq!(Thermostat::default(), Thermostat::new());
    }

    #[test]
    fn stores_values_up_to_the_cap() {
        let mut recorder = Recorder::new();
        let mut thermostat = Thermostat::new();
        thermostat.set_temperature(21.5, &mut recorder);
        assert_eq!(thermostat.temperature(), 21.5);
        thermostat.set_temperature(100.0, &mut recorder);
        assert_eq!(thermostat.temperature(), 100.0);
        thermostat.set_temperature(-40.0, &mut recorder);
        assert_eq!(thermostat.temperature(), -40.0);
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn caps_and_warns_above_the_cap() {
        let mut recorder = Recorder::new();
        let mut thermostat = Thermostat::new();
        thermostat.set_temperature(150.0, &mut recorder);
        assert_eq!(thermostat.temperature(), 100.0);
        assert_eq!(recorder.lines(), vec!["WARNING: Too Hot"]);
    }
}
