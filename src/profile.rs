//! The in-memory control profile.
//!
//! A [`Profile`] maps controller node names to behavior bindings and owns
//! the transition rules between modes. The front end drives it one event
//! at a time; every operation is synchronous, runs to completion, and
//! leaves the profile untouched when it fails. Callers that introduce
//! threads must wrap the whole profile in a lock, since operations like
//! [`Profile::select_preset_item`] are read-modify-write sequences.

use crate::error::ProfileError;
use crate::models::{ControllerLayout, Invert, Mode, NodeBinding};
use std::collections::BTreeMap;
use tracing::debug;

/// Per-node record: the active binding plus the node's most recent preset
/// selection, remembered so it can be retracted when the operator picks a
/// different item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct NodeRecord {
    binding: NodeBinding,
    last_preset: Option<String>,
}

/// The control profile being edited.
#[derive(Debug, Clone, Default)]
pub struct Profile {
    nodes: BTreeMap<String, NodeRecord>,
}

impl Profile {
    /// Creates an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a controller node with no mode bound.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::DuplicateNode`] if a node with this name is
    /// already registered.
    pub fn register_node(&mut self, name: impl Into<String>) -> Result<(), ProfileError> {
        let name = name.into();
        if self.nodes.contains_key(&name) {
            return Err(ProfileError::DuplicateNode(name));
        }

        debug!(node = %name, "registered controller node");
        self.nodes.insert(name, NodeRecord::default());
        Ok(())
    }

    /// Registers every node a controller layout exposes.
    ///
    /// Fails without registering anything if any of the layout's nodes is
    /// already present.
    pub fn register_layout(&mut self, layout: &ControllerLayout) -> Result<(), ProfileError> {
        for name in layout.node_names() {
            if self.nodes.contains_key(name) {
                return Err(ProfileError::DuplicateNode(name.to_string()));
            }
        }

        for name in layout.node_names() {
            self.nodes.insert(name.to_string(), NodeRecord::default());
        }
        debug!(nodes = layout.len(), "registered controller layout");
        Ok(())
    }

    /// Switches the node's active mode.
    ///
    /// Selecting a different mode than currently bound (including the first
    /// selection) replaces the binding with fresh defaults for that mode.
    /// Reselecting the current mode preserves a configured binding and
    /// re-defaults an unconfigured one, so re-entering a mode screen never
    /// wipes values the operator has actually entered.
    pub fn select_mode(&mut self, node: &str, mode: Mode) -> Result<(), ProfileError> {
        let record = self.record_mut(node)?;

        if record.binding.mode() == Some(mode) && record.binding.is_configured() {
            debug!(%node, %mode, "mode reselected, binding preserved");
            return Ok(());
        }

        record.binding = NodeBinding::defaults(mode);
        record.last_preset = None;
        debug!(%node, %mode, "binding reset to mode defaults");
        Ok(())
    }

    /// Sets the servo group a Linear-mode node drives.
    ///
    /// The group is not checked against the active robot; that is the
    /// front end's job.
    pub fn set_linear_group(
        &mut self,
        node: &str,
        group: impl Into<String>,
    ) -> Result<(), ProfileError> {
        let record = self.record_mut(node)?;
        let NodeBinding::Linear(config) = &mut record.binding else {
            return Err(ProfileError::ModeMismatch {
                node: node.to_string(),
                expected: Mode::Linear,
            });
        };

        config.group = Some(group.into());
        Ok(())
    }

    /// Sets the travel direction of a Linear-mode node.
    pub fn set_linear_invert(&mut self, node: &str, invert: Invert) -> Result<(), ProfileError> {
        let record = self.record_mut(node)?;
        let NodeBinding::Linear(config) = &mut record.binding else {
            return Err(ProfileError::ModeMismatch {
                node: node.to_string(),
                expected: Mode::Linear,
            });
        };

        config.invert = invert;
        Ok(())
    }

    /// Selects a preset item for a Preset-mode node.
    ///
    /// The node's previously selected item is retracted from its item map
    /// (if still present) before the new item is recorded, so each node
    /// keeps a single active selection.
    pub fn select_preset_item(
        &mut self,
        node: &str,
        item: impl Into<String>,
    ) -> Result<(), ProfileError> {
        let record = self.record_mut(node)?;
        let NodeBinding::Preset(config) = &mut record.binding else {
            return Err(ProfileError::ModeMismatch {
                node: node.to_string(),
                expected: Mode::Preset,
            });
        };

        let item = item.into();
        if let Some(previous) = record.last_preset.take() {
            config.items.remove(&previous);
        }

        debug!(%node, %item, "preset item selected");
        config.items.insert(item.clone(), None);
        record.last_preset = Some(item);
        Ok(())
    }

    /// Read-only view of a node's binding, for re-populating widgets after
    /// a mode switch.
    pub fn snapshot(&self, node: &str) -> Result<&NodeBinding, ProfileError> {
        self.nodes
            .get(node)
            .map(|record| &record.binding)
            .ok_or_else(|| ProfileError::UnknownNode(node.to_string()))
    }

    /// Whether a node with this name is registered.
    #[must_use]
    pub fn contains(&self, node: &str) -> bool {
        self.nodes.contains_key(node)
    }

    /// Iterates over the registered node names.
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Number of registered nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the profile has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes every node. Individual nodes cannot be removed; profiles
    /// grow until cleared as a whole.
    pub fn clear(&mut self) {
        self.nodes.clear();
        debug!("profile cleared");
    }

    fn record_mut(&mut self, node: &str) -> Result<&mut NodeRecord, ProfileError> {
        self.nodes
            .get_mut(node)
            .ok_or_else(|| ProfileError::UnknownNode(node.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LinearConfig, PresetConfig};

    fn profile_with(nodes: &[&str]) -> Profile {
        let mut profile = Profile::new();
        for node in nodes {
            profile.register_node(*node).unwrap();
        }
        profile
    }

    #[test]
    fn test_register_duplicate_rejected() {
        let mut profile = profile_with(&["axis1"]);
        assert_eq!(
            profile.register_node("axis1"),
            Err(ProfileError::DuplicateNode("axis1".to_string()))
        );
        assert_eq!(profile.len(), 1);
    }

    #[test]
    fn test_new_node_is_unset() {
        let profile = profile_with(&["axis1"]);
        assert_eq!(profile.snapshot("axis1").unwrap(), &NodeBinding::Unset);
    }

    #[test]
    fn test_select_mode_from_unset_applies_defaults() {
        let mut profile = profile_with(&["axis1"]);
        profile.select_mode("axis1", Mode::Linear).unwrap();

        assert_eq!(
            profile.snapshot("axis1").unwrap(),
            &NodeBinding::Linear(LinearConfig::default())
        );
    }

    #[test]
    fn test_mode_switch_discards_other_mode_config() {
        let mut profile = profile_with(&["axis1"]);
        profile.select_mode("axis1", Mode::Linear).unwrap();
        profile.set_linear_group("axis1", "g1").unwrap();

        profile.select_mode("axis1", Mode::Preset).unwrap();
        profile.select_mode("axis1", Mode::Linear).unwrap();

        // Back to defaults, not the previously chosen group
        let NodeBinding::Linear(config) = profile.snapshot("axis1").unwrap() else {
            panic!("expected Linear binding");
        };
        assert_eq!(config.group, None);
        assert_eq!(config.invert, Invert::Yes);
    }

    #[test]
    fn test_reselect_preserves_configured_binding() {
        let mut profile = profile_with(&["axis1"]);
        profile.select_mode("axis1", Mode::Linear).unwrap();
        profile.set_linear_group("axis1", "legs").unwrap();
        profile.set_linear_invert("axis1", Invert::No).unwrap();

        let before = profile.snapshot("axis1").unwrap().clone();
        profile.select_mode("axis1", Mode::Linear).unwrap();
        assert_eq!(profile.snapshot("axis1").unwrap(), &before);
    }

    #[test]
    fn test_reselect_resets_unconfigured_binding() {
        let mut profile = profile_with(&["axis1"]);
        profile.select_mode("axis1", Mode::Linear).unwrap();
        // Invert edited, but no group chosen: the binding does not count as
        // configured, so reselecting Linear re-defaults it.
        profile.set_linear_invert("axis1", Invert::No).unwrap();

        profile.select_mode("axis1", Mode::Linear).unwrap();
        let NodeBinding::Linear(config) = profile.snapshot("axis1").unwrap() else {
            panic!("expected Linear binding");
        };
        assert_eq!(config.invert, Invert::Yes);
    }

    #[test]
    fn test_preset_retraction() {
        let mut profile = profile_with(&["n"]);
        profile.select_mode("n", Mode::Preset).unwrap();
        profile.select_preset_item("n", "servoA").unwrap();
        profile.select_preset_item("n", "servoB").unwrap();

        let NodeBinding::Preset(config) = profile.snapshot("n").unwrap() else {
            panic!("expected Preset binding");
        };
        assert_eq!(config.items.len(), 1);
        assert_eq!(config.items.get("servoB"), Some(&None));
    }

    #[test]
    fn test_preset_reselect_same_item() {
        let mut profile = profile_with(&["n"]);
        profile.select_mode("n", Mode::Preset).unwrap();
        profile.select_preset_item("n", "servoA").unwrap();
        profile.select_preset_item("n", "servoA").unwrap();

        let NodeBinding::Preset(config) = profile.snapshot("n").unwrap() else {
            panic!("expected Preset binding");
        };
        assert_eq!(config.items.len(), 1);
        assert!(config.items.contains_key("servoA"));
    }

    #[test]
    fn test_preset_selection_tracked_per_node() {
        let mut profile = profile_with(&["a", "b"]);
        profile.select_mode("a", Mode::Preset).unwrap();
        profile.select_mode("b", Mode::Preset).unwrap();

        // Interleaved edits across nodes must not retract each other
        profile.select_preset_item("a", "servo1").unwrap();
        profile.select_preset_item("b", "servo2").unwrap();
        profile.select_preset_item("a", "servo3").unwrap();

        let NodeBinding::Preset(a) = profile.snapshot("a").unwrap() else {
            panic!("expected Preset binding");
        };
        let NodeBinding::Preset(b) = profile.snapshot("b").unwrap() else {
            panic!("expected Preset binding");
        };
        assert_eq!(a.items.len(), 1);
        assert!(a.items.contains_key("servo3"));
        assert_eq!(b.items.len(), 1);
        assert!(b.items.contains_key("servo2"));
    }

    #[test]
    fn test_retraction_slot_cleared_on_mode_switch() {
        let mut profile = profile_with(&["n"]);
        profile.select_mode("n", Mode::Preset).unwrap();
        profile.select_preset_item("n", "servoA").unwrap();

        profile.select_mode("n", Mode::Linear).unwrap();
        profile.select_mode("n", Mode::Preset).unwrap();
        profile.select_preset_item("n", "servoB").unwrap();

        let NodeBinding::Preset(config) = profile.snapshot("n").unwrap() else {
            panic!("expected Preset binding");
        };
        assert_eq!(config.items.len(), 1);
        assert!(config.items.contains_key("servoB"));
    }

    #[test]
    fn test_unknown_node_rejected() {
        let mut profile = Profile::new();
        assert_eq!(
            profile.set_linear_group("ghost", "g1"),
            Err(ProfileError::UnknownNode("ghost".to_string()))
        );
        assert!(profile.is_empty());
    }

    #[test]
    fn test_mode_mismatch_rejected() {
        let mut profile = profile_with(&["n"]);
        profile.select_mode("n", Mode::Preset).unwrap();
        profile.select_preset_item("n", "servoA").unwrap();
        let before = profile.snapshot("n").unwrap().clone();

        assert_eq!(
            profile.set_linear_invert("n", Invert::No),
            Err(ProfileError::ModeMismatch {
                node: "n".to_string(),
                expected: Mode::Linear,
            })
        );
        assert_eq!(profile.snapshot("n").unwrap(), &before);
    }

    #[test]
    fn test_setters_rejected_on_unset_node() {
        let mut profile = profile_with(&["n"]);

        assert!(matches!(
            profile.set_linear_group("n", "g1"),
            Err(ProfileError::ModeMismatch { .. })
        ));
        assert!(matches!(
            profile.select_preset_item("n", "servoA"),
            Err(ProfileError::ModeMismatch { .. })
        ));
        assert_eq!(profile.snapshot("n").unwrap(), &NodeBinding::Unset);
    }

    #[test]
    fn test_register_layout_all_or_nothing() {
        let layout: ControllerLayout =
            serde_json::from_str(r#"{"nodes": {"axis1": {}, "axis2": {}}}"#).unwrap();

        let mut profile = profile_with(&["axis2"]);
        assert_eq!(
            profile.register_layout(&layout),
            Err(ProfileError::DuplicateNode("axis2".to_string()))
        );
        // axis1 must not have been registered by the failed call
        assert!(!profile.contains("axis1"));

        let mut fresh = Profile::new();
        fresh.register_layout(&layout).unwrap();
        assert_eq!(fresh.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut profile = profile_with(&["a", "b"]);
        profile.clear();
        assert!(profile.is_empty());

        // Names are reusable after a clear
        profile.register_node("a").unwrap();
        assert!(profile.contains("a"));
    }

    #[test]
    fn test_preset_config_default_shape() {
        assert_eq!(
            NodeBinding::defaults(Mode::Preset),
            NodeBinding::Preset(PresetConfig::default())
        );
    }
}
