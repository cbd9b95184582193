use thiserror::Error;

/// Graph-shape errors. All of them are fatal to compilation: no partial script
/// is ever produced for a graph that fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Invalid pipeline: no start node")]
    NoRoot,

    #[error("Invalid pipeline: multiple start nodes ({})", .roots.join(", "))]
    MultipleRoots { roots: Vec<String> },

    #[error("Invalid pipeline: cycle detected ({})", .path.join(" -> "))]
    Cycle { path: Vec<String> },

    #[error(
        "Disconnected pipeline: {} not reachable from start node '{root}'",
        .unreachable.join(", ")
    )]
    Disconnected {
        root: String,
        unreachable: Vec<String>,
    },

    #[error(
        "Unsupported branching: node '{node_id}' has {} outgoing connections ({})",
        .successors.len(),
        .successors.join(", ")
    )]
    Branching {
        node_id: String,
        successors: Vec<String>,
    },

    #[error("Invalid pipeline: connection from '{source_id}' references missing node '{target_id}'")]
    DanglingEdge {
        source_id: String,
        target_id: String,
    },

    #[error("Invalid pipeline: node id '{node_id}' is used more than once")]
    DuplicateNode { node_id: String },
}

impl GraphError {
    /// Renders the error as the one-line comment handed to the preview instead of a script.
    pub fn diagnostic(&self) -> String {
        format!("# ❌ {}", self)
    }
}

/// Node-level problems that do not stop compilation. The affected node degrades
/// to a visible placeholder comment in the script.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileWarning {
    #[error("Node '{node_id}' uses unknown command '{command_id}'")]
    UnknownCommand { node_id: String, command_id: String },

    #[error("Node '{node_id}' is missing required parameter '{param}'")]
    MissingParameter { node_id: String, param: String },
}

/// Errors that can occur when converting an editor export into a `PipelineGraph`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphConversionError {
    #[error("Failed to parse pipeline JSON: {0}")]
    Json(String),

    #[error("Node '{node_id}' has an unsupported node type: '{type_name}'")]
    UnknownNodeType { node_id: String, type_name: String },

    #[error("Node '{node_id}' is missing field '{field}'")]
    MissingField { node_id: String, field: String },
}

/// Errors raised while persisting a compiled script.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArtifactError {
    #[error("Could not write script to '{path}': {message}")]
    Write { path: String, message: String },
}
