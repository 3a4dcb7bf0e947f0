//! Mission driver for the marsfleet simulation.
//!
//! Resolves a [`MissionConfig`] from an optional TOML file plus command-line
//! overrides, runs it against a reporter and disposes whatever is left of
//! the fleet when the run ends.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use fleet::{MissionConfig, MissionSummary};
use serde::Serialize;
use telemetry::Reporter;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub cycles: Option<u32>,
    pub remove: Option<String>,
    pub no_remove: bool,
    pub post_removal_cycles: Option<u32>,
}

impl Overrides {
    fn apply(&self, config: &mut MissionConfig) {
        if let Some(cycles) = self.cycles {
            config.cycles = cycles;
        }
        if let Some(remove) = &self.remove {
            config.remove = Some(remove.clone());
        }
        if self.no_remove {
            config.remove = None;
        }
        if let Some(post) = self.post_removal_cycles {
            config.post_removal_cycles = post;
        }
    }
}

/// Loads the config file (or the built-in mission) and applies overrides.
pub fn resolve_config(path: Option<&Path>, overrides: &Overrides) -> Result<MissionConfig> {
    let mut config = match path {
        Some(path) => MissionConfig::load(path)
            .with_context(|| format!("load mission config {}", path.display()))?,
        None => MissionConfig::default(),
    };
    overrides.apply(&mut config);
    Ok(config)
}

/// Outcome of a full run, written by `--summary-out`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Robots in the roster at the start.
    pub initial_robots: usize,
    #[serde(flatten)]
    pub mission: MissionSummary,
    /// Robots disposed when the run ended.
    pub disposed_at_exit: usize,
}

/// Builds the fleet, runs the mission and disposes the remaining robots.
pub fn simulate(config: &MissionConfig, reporter: &mut dyn Reporter) -> Result<RunSummary> {
    let mut fleet = config.build_fleet().context("build fleet")?;
    let initial_robots = fleet.len();
    let mission = config
        .mission()
        .run(&mut fleet, reporter)
        .context("run mission")?;
    let disposed_at_exit = fleet.dispose(reporter);
    tracing::info!(
        cycles = mission.cycles_run,
        moves = mission.moves,
        recharges = mission.recharges,
        disposed_at_exit,
        "mission finished"
    );
    Ok(RunSummary {
        initial_robots,
        mission,
        disposed_at_exit,
    })
}

/// Writes the run summary as pretty JSON.
pub fn write_summary_json(path: &Path, summary: &RunSummary) -> Result<()> {
    let contents = serde_json::to_string_pretty(summary).context("serialize summary")?;
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
