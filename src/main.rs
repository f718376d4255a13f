//! Fleet Water - water-chemistry dashboard engine CLI
//!
//! Reads a JSON snapshot of fleets, ships, measurements and chemical
//! additions, and prints derived dashboard records as JSON.
//!
//! # Usage
//!
//! ```bash
//! fleet-water --data snapshot.json summary --fleet F1
//! fleet-water --data snapshot.json ship --ship S1
//! fleet-water --data snapshot.json trend --fleet F1
//! fleet-water --data snapshot.json monthly --ship S1 --month 3 --year 2024 --day 12
//! fleet-water check-config --config fleet_water.toml
//! ```
//!
//! # Environment Variables
//!
//! - `FLEET_WATER_CONFIG`: Path to the threshold/report TOML file
//! - `RUST_LOG`: Logging level (default: info)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use fleet_water::report::DayAdvisory;
use fleet_water::{Dashboard, DashboardConfig, InMemoryRepository, MonthlyReport, Snapshot};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "fleet-water")]
#[command(about = "Fleet water-chemistry monitoring engine")]
#[command(version)]
struct CliArgs {
    /// JSON snapshot with fleets, ships, measurements and chemicalAdditions
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Config TOML (overrides FLEET_WATER_CONFIG and ./fleet_water.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: SubCommand,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Fleet summary: status counts, averages, overall status
    Summary {
        #[arg(long)]
        fleet: String,
    },

    /// Current analysis card of one ship
    Ship {
        #[arg(long)]
        ship: String,
    },

    /// Fleet trend series over all recorded dates
    Trend {
        #[arg(long)]
        fleet: String,
    },

    /// Monthly day grid of one ship, with advisories for the selected day
    Monthly {
        #[arg(long)]
        ship: String,
        #[arg(long)]
        month: u32,
        #[arg(long)]
        year: i32,
        /// Day to select (default: latest day with measurements)
        #[arg(long)]
        day: Option<u32>,
    },

    /// Validate the configuration and print it as TOML
    CheckConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MonthlyOutput {
    #[serde(flatten)]
    report: MonthlyReport,
    advisories: Vec<DayAdvisory>,
}

fn load_config(path: Option<&PathBuf>) -> Result<DashboardConfig> {
    match path {
        Some(p) => DashboardConfig::load_from_file(p)
            .with_context(|| format!("Failed to load config {}", p.display())),
        None => Ok(DashboardConfig::load()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let config = load_config(args.config.as_ref())?;

    if let SubCommand::CheckConfig = args.command {
        config.validate().context("Configuration is invalid")?;
        println!("{}", config.to_toml()?);
        info!("Configuration OK");
        return Ok(());
    }

    let data = args
        .data
        .as_ref()
        .context("--data <snapshot.json> is required for this command")?;
    let snapshot = Snapshot::load_from_file(data)
        .with_context(|| format!("Failed to load snapshot {}", data.display()))?;
    let dashboard = Dashboard::new(InMemoryRepository::new(snapshot), config);

    match args.command {
        SubCommand::Summary { fleet } => print_json(&dashboard.fleet_summary(&fleet)),
        SubCommand::Ship { ship } => print_json(&dashboard.ship_analysis(&ship)),
        SubCommand::Trend { fleet } => print_json(&dashboard.fleet_trend(&fleet)),
        SubCommand::Monthly {
            ship,
            month,
            year,
            day,
        } => {
            let mut report = dashboard
                .monthly_report(&ship, month, year)
                .context("Failed to build monthly report")?;
            if let Some(day) = day {
                report.select_day(day)?;
            }
            let advisories = report.selected_advisories(dashboard.thresholds());
            print_json(&MonthlyOutput {
                report,
                advisories,
            })
        }
        SubCommand::CheckConfig => Ok(()),
    }
}
