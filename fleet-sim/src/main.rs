use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use fleet_sim::{resolve_config, simulate, write_summary_json, Overrides};
use telemetry::{JsonReporter, TextReporter};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fleet-sim",
    version,
    about = "Deterministic Mars fleet mission driver"
)]
struct Cli {
    /// TOML file describing the roster, policy and mission.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Mission cycles before the removal.
    #[arg(long)]
    cycles: Option<u32>,
    /// Robot to remove after the mission cycles.
    #[arg(long, conflicts_with = "no_remove")]
    remove: Option<String>,
    /// Do not remove any robot.
    #[arg(long)]
    no_remove: bool,
    /// Mission cycles to run on the reduced fleet.
    #[arg(long)]
    post_removal_cycles: Option<u32>,
    /// Status output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Optional path for a JSON run summary.
    #[arg(long)]
    summary_out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let overrides = Overrides {
        cycles: cli.cycles,
        remove: cli.remove,
        no_remove: cli.no_remove,
        post_removal_cycles: cli.post_removal_cycles,
    };
    let config = resolve_config(cli.config.as_deref(), &overrides)?;

    let summary = match cli.format {
        OutputFormat::Text => {
            let mut reporter = TextReporter::stdout();
            let summary = simulate(&config, &mut reporter)?;
            reporter.finish().context("write status lines")?;
            summary
        }
        OutputFormat::Json => {
            let mut reporter = JsonReporter::stdout();
            let summary = simulate(&config, &mut reporter)?;
            reporter.finish().context("write status events")?;
            summary
        }
    };

    if let Some(path) = &cli.summary_out {
        write_summary_json(path, &summary)?;
    }

    Ok(())
}
