use crate::graph::Params;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Editor node payload. Which fields are populated depends on the node type.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct UiNodeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub append: Option<bool>,
    #[serde(default, alias = "commandId", skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
    /// Palette label; stands in for `command_id` on older exports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, alias = "loopType", skip_serializing_if = "Option::is_none")]
    pub loop_type: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_sorted"
    )]
    pub params: Option<Params>,
}

fn serialize_sorted<S: Serializer>(params: &Option<Params>, serializer: S) -> Result<S::Ok, S::Error> {
    params
        .as_ref()
        .map(|p| p.iter().collect::<BTreeMap<_, _>>())
        .serialize(serializer)
}

/// Canvas coordinates. Carried through untouched; the compiler never reads them.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct UiPosition {
    pub x: f64,
    pub y: f64,
}

/// UI node with ID, block type and data
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct UiNode {
    pub id: String,
    /// `input`, `output`, `command`, `conditional` or `loop`. Missing means `command`.
    #[serde(rename = "type", default = "default_node_type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<UiPosition>,
    #[serde(default)]
    pub data: UiNodeData,
}

fn default_node_type() -> String {
    "command".to_string()
}

/// UI edge connecting nodes
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct UiEdge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub source: String,
    pub target: String,
    #[serde(default, alias = "sourceHandle", skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
}

/// Complete editor export: the canvas nodes and edges
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct UiGraph {
    pub nodes: Vec<UiNode>,
    #[serde(default)]
    pub edges: Vec<UiEdge>,
}
