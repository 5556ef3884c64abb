//! Robot configuration parser.
//!
//! A robot file is a JSON object mapping servo names to descriptors; any
//! fields beyond the expected ones are ignored. See
//! [`crate::models::ServoDescriptor`] for the entry shape.

use crate::error::StoreError;
use crate::models::RobotDescriptor;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Subdirectory of the data directory holding robot configurations.
pub const ROBOTS_DIR: &str = "Robots";

/// Parses robot configuration text into a descriptor.
///
/// # Arguments
///
/// * `name` - Robot identifier, used in error messages
/// * `text` - Raw JSON text
pub fn parse_robot_json(name: &str, text: &str) -> Result<RobotDescriptor, StoreError> {
    serde_json::from_str(text).map_err(|source| StoreError::Parse {
        name: name.to_string(),
        source,
    })
}

/// Loads the named robot configuration from the data directory.
///
/// # Errors
///
/// Returns [`StoreError::NotFound`] if no `Robots/<name>.json` exists,
/// [`StoreError::Parse`] if the file is malformed.
pub fn load_robot(data_dir: &Path, name: &str) -> Result<RobotDescriptor, StoreError> {
    let path = data_dir.join(ROBOTS_DIR).join(format!("{name}.json"));

    if !path.exists() {
        return Err(StoreError::NotFound(name.to_string()));
    }

    let text = fs::read_to_string(&path)?;
    let robot = parse_robot_json(name, &text)?;
    debug!(robot = %name, servos = robot.len(), "loaded robot configuration");
    Ok(robot)
}

/// Lists the available robot configurations, sorted by name.
pub fn scan_robots(data_dir: &Path) -> Result<Vec<String>, StoreError> {
    super::scan_json_stems(&data_dir.join(ROBOTS_DIR))
}
