//! Controller layout data structures.
//!
//! A controller configuration file describes the input device: a `nodes`
//! object with one entry per bindable input (axis or button).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input kind of a controller node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Continuous input (joystick axis, trigger)
    Axis,
    /// Discrete input
    Button,
}

/// One node entry in a controller configuration file.
///
/// Both fields are optional; a bare `{}` entry is a valid node. Unknown
/// fields are tolerated and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NodeDescriptor {
    /// Input kind, if the device declares one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NodeKind>,
    /// Hardware input index on the device
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u8>,
}

/// A controller: the set of nodes it exposes for binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ControllerLayout {
    /// Node descriptors keyed by node name
    #[serde(default)]
    pub nodes: BTreeMap<String, NodeDescriptor>,
}

impl ControllerLayout {
    /// Number of bindable nodes on this controller.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether this controller exposes no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over the node names.
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_nodes() {
        let json = r#"{"nodes": {"axis1": {}, "button4": {}}}"#;
        let layout: ControllerLayout = serde_json::from_str(json).unwrap();

        assert_eq!(layout.len(), 2);
        let names: Vec<&str> = layout.node_names().collect();
        assert_eq!(names, vec!["axis1", "button4"]);
    }

    #[test]
    fn test_parse_node_metadata() {
        let json = r#"{
            "name": "Gamepad",
            "nodes": {
                "axis1": {"kind": "axis", "index": 0},
                "trigger": {"kind": "button"}
            }
        }"#;
        let layout: ControllerLayout = serde_json::from_str(json).unwrap();

        let axis = &layout.nodes["axis1"];
        assert_eq!(axis.kind, Some(NodeKind::Axis));
        assert_eq!(axis.index, Some(0));
        assert_eq!(layout.nodes["trigger"].kind, Some(NodeKind::Button));
    }

    #[test]
    fn test_parse_empty_controller() {
        let layout: ControllerLayout = serde_json::from_str("{}").unwrap();
        assert!(layout.is_empty());
    }
}
