//! CLI command handlers for Marionette.
//!
//! This module provides headless, scriptable access to the resource lookups
//! behind the profile editor, for automation and shell completion.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::Path;

use crate::models::{NodeKind, PresetChoices, RobotDescriptor};
use crate::parser;
use crate::profile::Profile;

/// List available robot configurations
#[derive(Debug, Clone, Args)]
pub struct RobotsArgs {}

impl RobotsArgs {
    /// Execute the robots command
    pub fn execute(&self, data_dir: &Path) -> Result<()> {
        let robots = parser::scan_robots(data_dir).context("Failed to list robots")?;

        if robots.is_empty() {
            println!("No robot configurations found in {}", data_dir.display());
            return Ok(());
        }

        for robot in robots {
            println!("{robot}");
        }
        Ok(())
    }
}

/// List available controller configurations
#[derive(Debug, Clone, Args)]
pub struct ControllersArgs {}

impl ControllersArgs {
    /// Execute the controllers command
    pub fn execute(&self, data_dir: &Path) -> Result<()> {
        let controllers =
            parser::scan_controllers(data_dir).context("Failed to list controllers")?;

        if controllers.is_empty() {
            println!(
                "No controller configurations found in {}",
                data_dir.display()
            );
            return Ok(());
        }

        for controller in controllers {
            println!("{controller}");
        }
        Ok(())
    }
}

/// Show the servo groups a robot defines
#[derive(Debug, Clone, Args)]
pub struct GroupsArgs {
    /// Robot configuration name
    #[arg(value_name = "ROBOT")]
    pub robot: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl GroupsArgs {
    /// Execute the groups command
    pub fn execute(&self, data_dir: &Path) -> Result<()> {
        let robot = load_robot(data_dir, &self.robot)?;
        let groups: Vec<String> = robot.groups().into_iter().collect();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&groups)?);
        } else {
            for group in groups {
                println!("{group}");
            }
        }
        Ok(())
    }
}

/// JSON response shape for the inspect command.
#[derive(Debug, Serialize)]
struct InspectResponse<'a> {
    robot: &'a str,
    servos: &'a RobotDescriptor,
    groups: Vec<String>,
    preset_choices: PresetChoices,
}

/// Show a robot's servos, groups, and preset choices
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Robot configuration name
    #[arg(value_name = "ROBOT")]
    pub robot: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self, data_dir: &Path) -> Result<()> {
        let robot = load_robot(data_dir, &self.robot)?;

        if self.json {
            let response = InspectResponse {
                robot: &self.robot,
                servos: &robot,
                groups: robot.groups().into_iter().collect(),
                preset_choices: robot.preset_choices(),
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
            return Ok(());
        }

        println!("Robot: {} ({} servos)", self.robot, robot.len());
        println!();
        for (name, servo) in &robot.servos {
            let id = servo
                .id
                .map_or_else(|| "-".to_string(), |id| id.to_string());
            println!(
                "  {name}  id={id} protocol={} mode={:?} range={}..{} groups=[{}]",
                u8::from(servo.protocol),
                servo.mode,
                servo.min_pos,
                servo.max_pos,
                servo.groups.join(", ")
            );
        }

        let choices = robot.preset_choices();
        println!();
        println!("Groups: {}", choices.groups.join(", "));
        Ok(())
    }
}

/// Register a controller's nodes and list the resulting profile
#[derive(Debug, Clone, Args)]
pub struct NodesArgs {
    /// Controller configuration name
    #[arg(value_name = "CONTROLLER")]
    pub controller: String,
}

impl NodesArgs {
    /// Execute the nodes command
    pub fn execute(&self, data_dir: &Path) -> Result<()> {
        let layout = parser::load_controller(data_dir, &self.controller)
            .context(format!("Failed to load controller '{}'", self.controller))?;

        let mut profile = Profile::new();
        profile
            .register_layout(&layout)
            .context("Failed to register controller nodes")?;

        println!(
            "Controller: {} ({} nodes)",
            self.controller,
            profile.len()
        );
        for name in profile.node_names() {
            let kind = match layout.nodes.get(name).and_then(|node| node.kind) {
                Some(NodeKind::Axis) => "axis",
                Some(NodeKind::Button) => "button",
                None => "unknown",
            };
            println!("  {name}  ({kind})");
        }
        Ok(())
    }
}

fn load_robot(data_dir: &Path, name: &str) -> Result<RobotDescriptor> {
    parser::load_robot(data_dir, name).context(format!("Failed to load robot '{name}'"))
}
