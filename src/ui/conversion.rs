use super::types::{UiEdge, UiGraph, UiNode, UiNodeData};
use crate::error::GraphConversionError;
use crate::graph::{Edge, IntoGraph, LoopKind, Node, NodeKind, Params, PipelineGraph};
use serde_json::Value;

impl UiGraph {
    /// Parses the editor's JSON export.
    pub fn from_json(json: &str) -> Result<Self, GraphConversionError> {
        serde_json::from_str(json).map_err(|e| GraphConversionError::Json(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, GraphConversionError> {
        serde_json::to_string_pretty(self).map_err(|e| GraphConversionError::Json(e.to_string()))
    }

    /// Builds the editor representation of a graph, without positions.
    pub fn from_graph(graph: &PipelineGraph) -> Self {
        let nodes = graph
            .nodes
            .iter()
            .map(|node| UiNode {
                id: node.id.clone(),
                node_type: node.type_name().to_string(),
                position: None,
                data: node_data(&node.kind),
            })
            .collect();

        let edges = graph
            .edges
            .iter()
            .enumerate()
            .map(|(i, edge)| UiEdge {
                id: Some(format!("e{}", i)),
                source: edge.source.clone(),
                target: edge.target.clone(),
                source_handle: edge.handle.clone(),
            })
            .collect();

        Self { nodes, edges }
    }
}

fn node_data(kind: &NodeKind) -> UiNodeData {
    let string_params = |pairs: &[(&str, &str)]| -> Option<Params> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
                .collect(),
        )
    };

    match kind {
        NodeKind::Input { path } => UiNodeData {
            path: Some(path.clone()),
            ..UiNodeData::default()
        },
        NodeKind::Output { path, append } => UiNodeData {
            path: Some(path.clone()),
            append: Some(*append),
            ..UiNodeData::default()
        },
        NodeKind::Command { command_id, params } => UiNodeData {
            command_id: Some(command_id.clone()),
            label: Some(command_id.clone()),
            params: Some(params.clone()),
            ..UiNodeData::default()
        },
        NodeKind::Conditional { condition } => UiNodeData {
            params: string_params(&[("condition", condition.as_str())]),
            ..UiNodeData::default()
        },
        NodeKind::Loop(LoopKind::For { variable, values }) => UiNodeData {
            loop_type: Some("for".to_string()),
            params: string_params(&[("variable", variable.as_str()), ("values", values.as_str())]),
            ..UiNodeData::default()
        },
        NodeKind::Loop(LoopKind::While { condition }) => UiNodeData {
            loop_type: Some("while".to_string()),
            params: string_params(&[("condition", condition.as_str())]),
            ..UiNodeData::default()
        },
    }
}

/// A string parameter. Numbers are accepted as their literal text; anything else is empty.
fn text_param(params: Option<&Params>, name: &str) -> String {
    match params.and_then(|p| p.get(name)) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn convert_node(node: UiNode) -> Result<Node, GraphConversionError> {
    let UiNode {
        id, node_type, data, ..
    } = node;
    let params = data.params.as_ref();

    let kind = match node_type.as_str() {
        "input" => NodeKind::Input {
            path: data.path.unwrap_or_default(),
        },
        "output" => NodeKind::Output {
            path: data.path.unwrap_or_default(),
            append: data.append.unwrap_or(false),
        },
        "conditional" => NodeKind::Conditional {
            condition: text_param(params, "condition"),
        },
        "loop" => match data.loop_type.as_deref().unwrap_or("for") {
            "for" => NodeKind::Loop(LoopKind::For {
                variable: text_param(params, "variable"),
                values: text_param(params, "values"),
            }),
            "while" => NodeKind::Loop(LoopKind::While {
                condition: text_param(params, "condition"),
            }),
            other => {
                return Err(GraphConversionError::UnknownNodeType {
                    node_id: id,
                    type_name: format!("loop/{}", other),
                });
            }
        },
        "command" => {
            let command_id = data
                .command_id
                .filter(|c| !c.is_empty())
                .or(data.label)
                .ok_or_else(|| GraphConversionError::MissingField {
                    node_id: id.clone(),
                    field: "commandId".to_string(),
                })?;
            NodeKind::Command {
                command_id,
                params: data.params.unwrap_or_default(),
            }
        }
        other => {
            return Err(GraphConversionError::UnknownNodeType {
                node_id: id,
                type_name: other.to_string(),
            });
        }
    };

    Ok(Node::new(id, kind))
}

impl IntoGraph for UiGraph {
    fn into_graph(self) -> Result<PipelineGraph, GraphConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(convert_node)
            .collect::<Result<Vec<_>, _>>()?;

        let edges = self
            .edges
            .into_iter()
            .map(|edge| Edge {
                source: edge.source,
                target: edge.target,
                handle: edge.source_handle,
            })
            .collect();

        Ok(PipelineGraph { nodes, edges })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const EXPORT: &str = r#"{
        "nodes": [
            { "id": "n1", "type": "input", "position": { "x": 10, "y": 20 }, "data": { "path": "app.log" } },
            { "id": "n2", "type": "command", "data": { "commandId": "grep", "label": "grep", "params": { "pattern": "ERROR", "ignoreCase": true } } },
            { "id": "n3", "type": "output", "data": { "path": "errors.txt" } }
        ],
        "edges": [
            { "id": "e1", "source": "n1", "target": "n2" },
            { "id": "e2", "source": "n2", "target": "n3", "sourceHandle": null }
        ]
    }"#;

    #[test]
    fn test_editor_export_converts() {
        let graph = UiGraph::from_json(EXPORT).unwrap().into_graph().unwrap();
        assert_eq!(graph.nodes[0], Node::input("n1", "app.log"));
        assert_eq!(
            graph.nodes[1],
            Node::command(
                "n2",
                "grep",
                [("pattern", json!("ERROR")), ("ignoreCase", json!(true))]
            )
        );
        assert_eq!(graph.nodes[2], Node::output("n3", "errors.txt", false));
        assert_eq!(graph.edges[1], Edge::new("n2", "n3"));
    }

    #[test]
    fn test_label_stands_in_for_command_id() {
        let json = r#"{ "nodes": [ { "id": "a", "data": { "label": "sort", "params": {} } } ] }"#;
        let graph = UiGraph::from_json(json).unwrap().into_graph().unwrap();
        assert!(matches!(
            &graph.nodes[0].kind,
            NodeKind::Command { command_id, .. } if command_id == "sort"
        ));
    }

    #[test]
    fn test_command_without_id_or_label_fails() {
        let json = r#"{ "nodes": [ { "id": "a", "type": "command", "data": {} } ] }"#;
        assert_eq!(
            UiGraph::from_json(json).unwrap().into_graph().unwrap_err(),
            GraphConversionError::MissingField {
                node_id: "a".to_string(),
                field: "commandId".to_string()
            }
        );
    }

    #[test]
    fn test_loop_defaults_to_for() {
        let json = r#"{ "nodes": [ { "id": "l", "type": "loop", "data": { "params": { "variable": "i", "values": "1 2 3" } } } ] }"#;
        let graph = UiGraph::from_json(json).unwrap().into_graph().unwrap();
        assert_eq!(graph.nodes[0], Node::for_loop("l", "i", "1 2 3"));
    }

    #[test]
    fn test_while_loop_and_handles() {
        let json = r#"{
            "nodes": [
                { "id": "w", "type": "loop", "data": { "loopType": "while", "params": { "condition": "true" } } },
                { "id": "c", "type": "conditional", "data": { "params": { "condition": "[ -f x ]" } } }
            ],
            "edges": [ { "source": "w", "target": "c", "sourceHandle": "body" } ]
        }"#;
        let graph = UiGraph::from_json(json).unwrap().into_graph().unwrap();
        assert_eq!(graph.nodes[0], Node::while_loop("w", "true"));
        assert_eq!(graph.nodes[1], Node::conditional("c", "[ -f x ]"));
        assert_eq!(graph.edges[0].handle.as_deref(), Some("body"));
    }

    #[test]
    fn test_unknown_node_type_fails() {
        let json = r#"{ "nodes": [ { "id": "x", "type": "sticky", "data": {} } ] }"#;
        assert!(matches!(
            UiGraph::from_json(json).unwrap().into_graph(),
            Err(GraphConversionError::UnknownNodeType { type_name, .. }) if type_name == "sticky"
        ));
    }

    #[test]
    fn test_malformed_json_is_reported() {
        assert!(matches!(
            UiGraph::from_json("{ nodes"),
            Err(GraphConversionError::Json(_))
        ));
    }

    #[test]
    fn test_from_graph_survives_export() {
        let graph = PipelineGraph::chain(vec![
            Node::input("in", "a.txt"),
            Node::for_loop("loop", "f", "*.txt"),
            Node::output("out", "b.txt", true),
        ]);
        let json = UiGraph::from_graph(&graph).to_json().unwrap();
        assert!(json.contains("\"loopType\": \"for\""));
        let back = UiGraph::from_json(&json).unwrap().into_graph().unwrap();
        assert_eq!(back, graph);
    }

    #[test]
    fn test_export_writes_params_in_key_order() {
        let graph = PipelineGraph::chain(vec![Node::command(
            "s",
            "sort",
            [
                ("reverse", json!(true)),
                ("numeric", json!(true)),
                ("unique", json!(true)),
                ("key", json!("2")),
            ],
        )]);
        let json = UiGraph::from_graph(&graph).to_json().unwrap();
        let pos = |key: &str| json.find(&format!("\"{}\"", key)).unwrap();
        assert!(pos("key") < pos("numeric"));
        assert!(pos("numeric") < pos("reverse"));
        assert!(pos("reverse") < pos("unique"));

        let canonical = serde_json::to_string(&graph).unwrap();
        assert!(canonical.contains(r#""params":{"key":"2","numeric":true,"reverse":true,"unique":true}"#));
    }
}
