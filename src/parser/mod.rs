//! Configuration file parsers for robots and controllers.
//!
//! Both resource kinds live as JSON files under the data directory:
//! `Robots/<name>.json` and `Controllers/<name>.json`. Loading is a single
//! synchronous read with no caching; callers may cache at their discretion.

pub mod controller_json;
pub mod robot_json;

pub use controller_json::{load_controller, scan_controllers, CONTROLLERS_DIR};
pub use robot_json::{load_robot, scan_robots, ROBOTS_DIR};

use crate::error::StoreError;
use std::fs;
use std::path::Path;

/// Lists the file stems of every `.json` file in `dir`, sorted.
///
/// A missing directory is an empty listing, not an error.
fn scan_json_stems(dir: &Path) -> Result<Vec<String>, StoreError> {
    let mut stems = Vec::new();

    if !dir.exists() {
        return Ok(stems);
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                stems.push(stem.to_string());
            }
        }
    }

    stems.sort();
    Ok(stems)
}
