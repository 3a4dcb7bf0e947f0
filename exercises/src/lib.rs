//! Thermostat and bank account companion exercises.
//!
//! Both types validate their input and report rejected values as status
//! events instead of returning errors.

mod account;
mod thermostat;

pub use account::Account;
pub use thermostat::{Thermostat, MAX_TEMPERATURE};
