//! Status events and reporters for the marsfleet simulation.
//!
//! Every user-facing line the simulation produces is a [`StatusEvent`]
//! handed to a [`Reporter`]:
//!
//! - [`TextReporter`] prints the human-readable status line
//! - [`JsonReporter`] prints one JSON object per event
//! - [`Recorder`] keeps events in memory for assertions
//!
//! # Design Principles
//!
//! - **One output channel** - Status lines go through a reporter, diagnostics go through `tracing`.
//! - **Infallible reporting** - Callers never handle I/O errors mid-simulation.

mod event;
mod reporter;

pub use event::StatusEvent;
pub use reporter::{JsonReporter, Recorder, Reporter, TextReporter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = Recorder::new();
        let _ = TextReporter::new(Vec::<u8>::new());
        let _ = JsonReporter::new(Vec::<u8>::new());
        let _ = StatusEvent::MissionStarted { cycle: 1 };
    }
}
