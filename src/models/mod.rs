//! Data models for robots, controllers, and control profiles.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are independent of the UI that edits them.

pub mod binding;
pub mod controller;
pub mod robot;

// Re-export all model types
pub use binding::{Invert, LinearConfig, Mode, NodeBinding, PresetConfig};
pub use controller::{ControllerLayout, NodeDescriptor, NodeKind};
pub use robot::{OperatingMode, PresetChoices, Protocol, RobotDescriptor, ServoDescriptor};
