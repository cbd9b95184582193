//! Common test utilities for building pipeline graphs and editor exports.
use serde_json::json;
use shelly::prelude::*;

/// `cat "app.log" | grep -i "ERROR" > "errors.txt"`
#[allow(dead_code)]
pub fn create_error_filter_graph() -> PipelineGraph {
    PipelineGraph::chain(vec![
        Node::input("in", "app.log"),
        Node::command(
            "grep",
            "grep",
            [("pattern", json!("ERROR")), ("ignoreCase", json!(true))],
        ),
        Node::output("out", "errors.txt", false),
    ])
}

/// A longer chain exercising several built-in commands.
///
/// `cat "access.log" | awk '{print $1}' | sort | uniq -c | sort -r -n >> "top-ips.txt"`
#[allow(dead_code)]
pub fn create_top_ips_graph() -> PipelineGraph {
    PipelineGraph::chain(vec![
        Node::input("log", "access.log"),
        Node::command("fields", "awk", [("program", json!("{print $1}"))]),
        Node::command("sort1", "sort", Vec::<(String, serde_json::Value)>::new()),
        Node::command("count", "uniq", [("count", json!(true))]),
        Node::command(
            "rank",
            "sort",
            [("reverse", json!(true)), ("numeric", json!(true))],
        ),
        Node::output("out", "top-ips.txt", true),
    ])
}

/// A valid linear graph of `len` nodes: one input, `len - 2` commands, one output.
#[allow(dead_code)]
pub fn create_linear_graph(len: usize) -> PipelineGraph {
    let len = len.max(2);
    let mut nodes = vec![Node::input("n0", "in.txt")];
    for i in 1..len - 1 {
        nodes.push(Node::command(
            format!("n{}", i),
            "sort",
            Vec::<(String, serde_json::Value)>::new(),
        ));
    }
    nodes.push(Node::output(format!("n{}", len - 1), "out.txt", false));
    PipelineGraph::chain(nodes)
}

#[allow(dead_code)]
pub fn ids(script: &CompiledScript) -> Vec<&str> {
    script.order.iter().map(String::as_str).collect()
}

/// An editor export as saved by the canvas: nodes declared out of order,
/// positions, a `label`-only command node and a loop without a `loopType`.
#[allow(dead_code)]
pub const EDITOR_EXPORT_JSON: &str = r#"{
  "nodes": [
    {
      "id": "7c1e",
      "type": "output",
      "position": { "x": 640, "y": 120 },
      "data": { "path": "report.txt", "append": true }
    },
    {
      "id": "a91f",
      "type": "input",
      "position": { "x": 40, "y": 120 },
      "data": { "path": "/var/log/syslog" }
    },
    {
      "id": "b3d2",
      "type": "command",
      "position": { "x": 240, "y": 120 },
      "data": { "commandId": "grep", "label": "grep", "params": { "pattern": "kernel", "invertMatch": false } }
    },
    {
      "id": "c402",
      "type": "command",
      "position": { "x": 440, "y": 120 },
      "data": { "label": "cut", "params": { "fields": "1-3", "delimiter": " " } }
    }
  ],
  "edges": [
    { "id": "e1", "source": "a91f", "target": "b3d2", "sourceHandle": null, "targetHandle": null },
    { "id": "e2", "source": "b3d2", "target": "c402" },
    { "id": "e3", "source": "c402", "target": "7c1e" }
  ]
}"#;

#[allow(dead_code)]
pub const EDITOR_CONFIG_JSON: &str = r#"{
  "shebang": "sh",
  "setE": true,
  "setU": false,
  "setPipefail": false,
  "debug": true,
  "description": "Kernel messages",
  "author": "ops",
  "version": "2.1.0"
}"#;
