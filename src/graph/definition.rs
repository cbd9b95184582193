use ahash::AHashMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Parameter values of a command node, keyed by `ParamSpec::name`.
pub type Params = AHashMap<String, serde_json::Value>;

/// Writes params with their keys sorted, so serialized graphs are reproducible.
fn serialize_params<S: Serializer>(params: &Params, serializer: S) -> Result<S::Ok, S::Error> {
    params.iter().collect::<BTreeMap<_, _>>().serialize(serializer)
}

/// The complete, canonical definition of a pipeline graph, ready for compilation.
/// This is the target structure for any editor format conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineGraph {
    /// Declaration order is significant: it breaks ties during sequencing.
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// A single block of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
}

/// The type-tagged payload of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    /// Reads a file into the pipeline.
    Input { path: String },
    /// Redirects the preceding fragment into a file.
    Output { path: String, append: bool },
    /// A registry command with its parameter values.
    Command {
        command_id: String,
        #[serde(serialize_with = "serialize_params")]
        params: Params,
    },
    /// An `if <condition>; then ... fi` block.
    Conditional { condition: String },
    /// A `for` or `while` loop block.
    Loop(LoopKind),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "loop_type", rename_all = "lowercase")]
pub enum LoopKind {
    For { variable: String, values: String },
    While { condition: String },
}

/// A directed connection: the output of `source` feeds the input of `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    /// Distinguishes logical successors of a branching node (e.g. `then`, `body`).
    #[serde(default)]
    pub handle: Option<String>,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    pub fn input(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(id, NodeKind::Input { path: path.into() })
    }

    pub fn output(id: impl Into<String>, path: impl Into<String>, append: bool) -> Self {
        Self::new(
            id,
            NodeKind::Output {
                path: path.into(),
                append,
            },
        )
    }

    /// Builds a command node from `(name, value)` parameter pairs.
    pub fn command<I, K>(id: impl Into<String>, command_id: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = (K, serde_json::Value)>,
        K: Into<String>,
    {
        Self::new(
            id,
            NodeKind::Command {
                command_id: command_id.into(),
                params: params.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            },
        )
    }

    pub fn conditional(id: impl Into<String>, condition: impl Into<String>) -> Self {
        Self::new(
            id,
            NodeKind::Conditional {
                condition: condition.into(),
            },
        )
    }

    pub fn for_loop(
        id: impl Into<String>,
        variable: impl Into<String>,
        values: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            NodeKind::Loop(LoopKind::For {
                variable: variable.into(),
                values: values.into(),
            }),
        )
    }

    pub fn while_loop(id: impl Into<String>, condition: impl Into<String>) -> Self {
        Self::new(
            id,
            NodeKind::Loop(LoopKind::While {
                condition: condition.into(),
            }),
        )
    }

    /// Short type name, as the editor labels the block.
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            NodeKind::Input { .. } => "input",
            NodeKind::Output { .. } => "output",
            NodeKind::Command { .. } => "command",
            NodeKind::Conditional { .. } => "conditional",
            NodeKind::Loop(_) => "loop",
        }
    }
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            handle: None,
        }
    }

    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }
}

impl PipelineGraph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Connects the given nodes in declaration order, one edge per neighbouring pair.
    pub fn chain(nodes: Vec<Node>) -> Self {
        let edges = nodes
            .windows(2)
            .map(|pair| Edge::new(pair[0].id.clone(), pair[1].id.clone()))
            .collect();
        Self { nodes, edges }
    }
}
