//! Robot descriptor data structures.
//!
//! A robot configuration file is a JSON object mapping servo names to their
//! descriptors. Only the `groups` list matters to profile editing; the
//! hardware fields mirror the servo table filled in by the robot builder.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Highest addressable servo position.
pub const MAX_POSITION: u16 = 1024;

/// Dynamixel addressing protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum Protocol {
    /// Protocol 1.0 (AX/MX series default)
    #[default]
    V1,
    /// Protocol 2.0 (X series)
    V2,
}

impl TryFrom<u8> for Protocol {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            other => Err(format!("unsupported protocol version {other}")),
        }
    }
}

impl From<Protocol> for u8 {
    fn from(protocol: Protocol) -> Self {
        match protocol {
            Protocol::V1 => 1,
            Protocol::V2 => 2,
        }
    }
}

/// Servo operating mode.
///
/// Joint mode moves between the configured position limits; Wheel mode is
/// continuous rotation and has no meaningful limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OperatingMode {
    /// Positional movement within `min_pos..=max_pos`
    #[default]
    Joint,
    /// Continuous rotation
    Wheel,
}

/// One servo entry in a robot configuration file.
///
/// Unknown fields in the file are tolerated and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServoDescriptor {
    /// Named servo groups this servo belongs to
    #[serde(default)]
    pub groups: Vec<String>,
    /// Dynamixel model name (e.g., "AX-12A")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Bus id (1-250)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u8>,
    /// Addressing protocol version
    #[serde(default)]
    pub protocol: Protocol,
    /// Operating mode
    #[serde(default)]
    pub mode: OperatingMode,
    /// Lowest reachable position
    #[serde(default)]
    pub min_pos: u16,
    /// Highest reachable position
    #[serde(default = "default_max_pos")]
    pub max_pos: u16,
}

/// Default upper position limit for Joint mode
const fn default_max_pos() -> u16 {
    MAX_POSITION
}

impl Default for ServoDescriptor {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            model: None,
            id: None,
            protocol: Protocol::default(),
            mode: OperatingMode::default(),
            min_pos: 0,
            max_pos: MAX_POSITION,
        }
    }
}

impl ServoDescriptor {
    /// Creates a descriptor with the given group memberships.
    pub fn with_groups<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            groups: groups.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Switches the operating mode, adjusting the position limits to match:
    /// Wheel mode collapses them to 0..0, Joint mode restores the full range.
    pub fn set_mode(&mut self, mode: OperatingMode) {
        self.mode = mode;
        match mode {
            OperatingMode::Wheel => {
                self.min_pos = 0;
                self.max_pos = 0;
            }
            OperatingMode::Joint => {
                self.min_pos = 0;
                self.max_pos = MAX_POSITION;
            }
        }
    }

    /// Operating mode implied by the position limits: a collapsed 0..0 range
    /// means Wheel, anything else means Joint.
    #[must_use]
    pub const fn inferred_mode(&self) -> OperatingMode {
        if self.min_pos == 0 && self.max_pos == 0 {
            OperatingMode::Wheel
        } else {
            OperatingMode::Joint
        }
    }
}

/// Selectable targets for a Preset-mode node, grouped the way the editor
/// presents them: individual servos first, then whole groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetChoices {
    /// Servo names, in configuration order
    pub servos: Vec<String>,
    /// Group names, de-duplicated
    pub groups: Vec<String>,
}

/// A robot: the mapping from servo name to its descriptor.
///
/// Read-only once loaded; reloaded whenever the active robot selection
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct RobotDescriptor {
    /// Servo descriptors keyed by servo name
    pub servos: BTreeMap<String, ServoDescriptor>,
}

impl RobotDescriptor {
    /// Gets the descriptor for the named servo.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ServoDescriptor> {
        self.servos.get(name)
    }

    /// Number of servos on this robot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.servos.len()
    }

    /// Whether this robot has no servos.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.servos.is_empty()
    }

    /// Iterates over the servo names.
    pub fn servo_names(&self) -> impl Iterator<Item = &str> {
        self.servos.keys().map(String::as_str)
    }

    /// The set of group names referenced by any servo, de-duplicated.
    #[must_use]
    pub fn groups(&self) -> BTreeSet<String> {
        self.servos
            .values()
            .flat_map(|servo| servo.groups.iter().cloned())
            .collect()
    }

    /// The targets a Preset-mode node can select on this robot.
    #[must_use]
    pub fn preset_choices(&self) -> PresetChoices {
        PresetChoices {
            servos: self.servos.keys().cloned().collect(),
            groups: self.groups().into_iter().collect(),
        }
    }
}
