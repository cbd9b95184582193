//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the shelly crate.
//! Import this module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use shelly::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let export = std::fs::read_to_string("path/to/pipeline.json")?;
//! let graph = UiGraph::from_json(&export)?.into_graph()?;
//!
//! let compiled = Compiler::default().try_compile(&graph, &ScriptConfig::default())?;
//! compiled.save("pipeline.sh")?;
//! # Ok(())
//! # }
//! ```

// Compilation
pub use crate::compiler::{CommandBuilder, Compiler, CompilerBuilder, Fragment, TemplateBuilder};

// Graph model and configuration
pub use crate::graph::{
    CompiledScript, Edge, IntoGraph, LoopKind, Node, NodeKind, Params, PipelineGraph,
    ScriptConfig, ShebangFlavor,
};

// Command registry
pub use crate::registry::{Category, CommandDefinition, CommandRegistry, ParamSpec, ParamType};

// Editor format
pub use crate::ui::UiGraph;

// Error types
pub use crate::error::{ArtifactError, CompileWarning, GraphConversionError, GraphError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
