//! Controller configuration parser.
//!
//! A controller file carries a `nodes` object with one entry per bindable
//! input; see [`crate::models::ControllerLayout`].

use crate::error::StoreError;
use crate::models::ControllerLayout;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Subdirectory of the data directory holding controller configurations.
pub const CONTROLLERS_DIR: &str = "Controllers";

/// Loads the named controller configuration from the data directory.
///
/// # Errors
///
/// Returns [`StoreError::NotFound`] if no `Controllers/<name>.json` exists,
/// [`StoreError::Parse`] if the file is malformed.
pub fn load_controller(data_dir: &Path, name: &str) -> Result<ControllerLayout, StoreError> {
    let path = data_dir.join(CONTROLLERS_DIR).join(format!("{name}.json"));

    if !path.exists() {
        return Err(StoreError::NotFound(name.to_string()));
    }

    let text = fs::read_to_string(&path)?;
    let layout: ControllerLayout =
        serde_json::from_str(&text).map_err(|source| StoreError::Parse {
            name: name.to_string(),
            source,
        })?;
    debug!(controller = %name, nodes = layout.len(), "loaded controller configuration");
    Ok(layout)
}

/// Lists the available controller configurations, sorted by name.
pub fn scan_controllers(data_dir: &Path) -> Result<Vec<String>, StoreError> {
    super::scan_json_stems(&data_dir.join(CONTROLLERS_DIR))
}
