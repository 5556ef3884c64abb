//! Controller node bindings: behavior modes and their configuration.
//!
//! A node is bound to exactly one behavior at a time, modeled as the
//! [`NodeBinding`] enum. The per-mode configuration lives inside the
//! variant, so a node can never carry Linear fields while in Preset mode.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Behavior family that can be bound to a controller node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Continuous proportional control of a servo group
    Linear,
    /// Discrete selection among named targets
    Preset,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Preset => write!(f, "Preset"),
        }
    }
}

/// Whether a linear axis drives its group in the inverted direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Invert {
    /// Inverted (the default for newly bound axes)
    #[default]
    Yes,
    /// Not inverted
    No,
}

/// Configuration for a node in Linear mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LinearConfig {
    /// Servo group driven by this node; `None` until the operator picks one
    pub group: Option<String>,
    /// Direction of travel
    pub invert: Invert,
}

/// Configuration for a node in Preset mode.
///
/// Values stay `None` until the operator assigns a target position to the
/// item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PresetConfig {
    /// Selected items keyed by servo or group name
    pub items: BTreeMap<String, Option<u16>>,
}

/// The behavior bound to a controller node.
///
/// Switching mode families replaces the whole variant, so configuration
/// from an abandoned mode cannot leak into the new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NodeBinding {
    /// Registered but no mode chosen yet
    #[default]
    Unset,
    /// Bound to Linear mode
    Linear(LinearConfig),
    /// Bound to Preset mode
    Preset(PresetConfig),
}

impl NodeBinding {
    /// Freshly defaulted binding for the given mode.
    #[must_use]
    pub fn defaults(mode: Mode) -> Self {
        match mode {
            Mode::Linear => Self::Linear(LinearConfig::default()),
            Mode::Preset => Self::Preset(PresetConfig::default()),
        }
    }

    /// The mode this binding belongs to, or `None` when unset.
    #[must_use]
    pub const fn mode(&self) -> Option<Mode> {
        match self {
            Self::Unset => None,
            Self::Linear(_) => Some(Mode::Linear),
            Self::Preset(_) => Some(Mode::Preset),
        }
    }

    /// True once the operator has put real data into the binding: a chosen
    /// group for Linear, at least one item for Preset.
    ///
    /// Reselecting the current mode preserves a configured binding and
    /// resets an unconfigured one.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        match self {
            Self::Unset => false,
            Self::Linear(config) => config.group.is_some(),
            Self::Preset(config) => !config.items.is_empty(),
        }
    }
}
