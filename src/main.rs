//! Marionette - Terminal-based control profile editor for servo robots.
//!
//! This binary exposes the editor's resource lookups as scriptable
//! subcommands: listing robot and controller configurations, showing the
//! servo groups a robot defines, and inspecting a robot's servo table.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use marionette::cli::{ControllersArgs, GroupsArgs, InspectArgs, NodesArgs, RobotsArgs};
use marionette::config::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Marionette - Control profile editor for servo robots
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Data directory holding Robots/ and Controllers/ (overrides config)
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available robot configurations
    Robots(RobotsArgs),
    /// List available controller configurations
    Controllers(ControllersArgs),
    /// Show the servo groups a robot defines
    Groups(GroupsArgs),
    /// Show a robot's servos, groups, and preset choices
    Inspect(InspectArgs),
    /// Register a controller's nodes and list the resulting profile
    Nodes(NodesArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir)?;

    match cli.command {
        Command::Robots(args) => args.execute(&data_dir),
        Command::Controllers(args) => args.execute(&data_dir),
        Command::Groups(args) => args.execute(&data_dir),
        Command::Inspect(args) => args.execute(&data_dir),
        Command::Nodes(args) => args.execute(&data_dir),
    }
}

/// Resolves the data directory from the command line or the saved config.
fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        Config::validate_data_dir(&dir)?;
        return Ok(dir);
    }

    let config = Config::load().context("Failed to load configuration")?;
    config.paths.data_dir.context(
        "No data directory configured. Pass --data-dir or set paths.data_dir in config.toml",
    )
}
