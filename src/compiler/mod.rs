//! Graph-to-script compilation.
//!
//! Each stage is a pure transform: `validator` → `sequencer` (called by the
//! validator) → `codegen` per node → `assembler` → `scaffold`. Validation
//! failures short-circuit the rest.

use crate::error::GraphError;
use crate::graph::{CompiledScript, PipelineGraph, ScriptConfig};
use crate::registry::{CommandDefinition, CommandRegistry};
use tracing::{debug, warn};

pub mod assembler;
pub mod builders;
pub mod codegen;
pub mod quoting;
pub mod scaffold;
pub mod sequencer;
pub mod validator;

pub use builders::{BuilderMap, CommandBuilder, TemplateBuilder, param_flag, param_text};
pub use codegen::Fragment;

use builders::{create_builder_by_name, register_default_builders};

/// Compiles pipeline graphs into shell scripts.
///
/// Holds only read-only state (the command registry and its builders), so one
/// instance can serve any number of concurrent compile calls.
pub struct Compiler {
    registry: CommandRegistry,
    builders: BuilderMap,
}

pub struct CompilerBuilder {
    registry: CommandRegistry,
    builders: BuilderMap,
}

impl CompilerBuilder {
    pub fn new() -> Self {
        let mut builders = BuilderMap::new();
        register_default_builders(&mut builders);
        Self {
            registry: CommandRegistry::with_builtins(),
            builders,
        }
    }

    /// Replaces the built-in catalog.
    pub fn with_registry(mut self, registry: CommandRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Makes `user_id` compile exactly like the existing command `builtin_id`.
    pub fn with_command_alias(mut self, user_id: &str, builtin_id: &str) -> Self {
        if !self.registry.alias(user_id, builtin_id) {
            warn!(alias = user_id, command = builtin_id, "alias target is not registered");
            return self;
        }
        if let Some(builder) = create_builder_by_name(builtin_id) {
            self.builders.insert(user_id.to_string(), builder);
        }
        self
    }

    /// Registers a new command together with the builder that renders it.
    pub fn with_custom_command(
        mut self,
        definition: CommandDefinition,
        builder: Box<dyn CommandBuilder>,
    ) -> Self {
        self.builders.insert(definition.id.clone(), builder);
        self.registry.register(definition);
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            registry: self.registry,
            builders: self.builders,
        }
    }
}

impl Default for CompilerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::new()
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Compiles `graph` into script text.
    ///
    /// Total over its input: an invalid graph yields the one-line `# ❌ ...`
    /// diagnostic instead of a script.
    pub fn compile(&self, graph: &PipelineGraph, config: &ScriptConfig) -> String {
        match self.try_compile(graph, config) {
            Ok(script) => script.text,
            Err(e) => {
                debug!(error = %e, "graph rejected");
                e.diagnostic()
            }
        }
    }

    /// Compiles `graph`, returning the execution order and warnings alongside the text.
    pub fn try_compile(
        &self,
        graph: &PipelineGraph,
        config: &ScriptConfig,
    ) -> Result<CompiledScript, GraphError> {
        let ordered = validator::validate(&graph.nodes, &graph.edges)?;
        let order: Vec<String> = ordered.iter().map(|n| n.id.clone()).collect();
        debug!(order = ?order, "graph validated");

        let mut fragments = Vec::with_capacity(ordered.len());
        let mut warnings = Vec::new();
        for node in ordered {
            let (fragment, node_warnings) = codegen::generate(node, &self.registry, &self.builders);
            fragments.push(fragment);
            warnings.extend(node_warnings);
        }

        let body = assembler::assemble(&fragments);
        let text = scaffold::build(&body, config);
        debug!(warnings = warnings.len(), "script assembled");

        Ok(CompiledScript {
            text,
            order,
            warnings,
        })
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompileWarning;
    use crate::graph::{Edge, Node};
    use crate::registry::{Category, ParamSpec};
    use serde_json::json;

    fn scenario_a() -> PipelineGraph {
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

    #[test]
    fn test_compile_full_script() {
        let script = Compiler::default().compile(&scenario_a(), &ScriptConfig::default());
        assert_eq!(
            script,
            "#!/bin/bash\n\
             # Version: 1.0.0\n\
             set -eu\n\
             set -o pipefail\n\
             \n\
             cat \"app.log\" | grep -i \"ERROR\" > \"errors.txt\"\n"
        );
    }

    #[test]
    fn test_try_compile_reports_order() {
        let script = Compiler::default()
            .try_compile(&scenario_a(), &ScriptConfig::default())
            .unwrap();
        assert_eq!(script.order, ["in", "grep", "out"]);
        assert!(!script.has_warnings());
    }

    #[test]
    fn test_invalid_graph_yields_diagnostic() {
        let graph = PipelineGraph::new(
            vec![Node::input("a", "a"), Node::input("b", "b")],
            vec![Edge::new("a", "b"), Edge::new("b", "a")],
        );
        let output = Compiler::default().compile(&graph, &ScriptConfig::default());
        assert_eq!(output, "# ❌ Invalid pipeline: cycle detected (a -> b -> a)");
    }

    #[test]
    fn test_alias_compiles_like_target() {
        let compiler = Compiler::builder().with_command_alias("upper", "tr").build();
        let graph = PipelineGraph::chain(vec![
            Node::input("in", "names.txt"),
            Node::command(
                "up",
                "upper",
                [("set1", json!("a-z")), ("set2", json!("A-Z"))],
            ),
        ]);
        let script = compiler.compile(&graph, &ScriptConfig::default());
        assert!(script.ends_with("cat \"names.txt\" | tr \"a-z\" \"A-Z\"\n"));
    }

    #[test]
    fn test_alias_to_unknown_command_is_ignored() {
        let compiler = Compiler::builder().with_command_alias("x", "zzz").build();
        assert!(!compiler.registry().contains("x"));
    }

    #[test]
    fn test_custom_command() {
        let definition = CommandDefinition::new("head", "head", Category::Text, "First lines")
            .param(ParamSpec::number("lines", "Lines").flag("-n {}"))
            .pipes(true, true);
        let compiler = Compiler::builder()
            .with_custom_command(definition, Box::new(TemplateBuilder))
            .build();
        let graph = PipelineGraph::chain(vec![
            Node::input("in", "big.log"),
            Node::command("h", "head", [("lines", json!(20))]),
        ]);
        let script = compiler.compile(&graph, &ScriptConfig::default());
        assert!(script.ends_with("cat \"big.log\" | head -n 20\n"));
    }

    #[test]
    fn test_empty_registry_degrades_every_command() {
        let compiler = Compiler::builder()
            .with_registry(CommandRegistry::empty())
            .build();
        let script = compiler.try_compile(&scenario_a(), &ScriptConfig::default()).unwrap();
        assert!(script.text.contains("# Unknown command: grep"));
        assert_eq!(
            script.warnings,
            vec![CompileWarning::UnknownCommand {
                node_id: "grep".to_string(),
                command_id: "grep".to_string()
            }]
        );
    }

    #[test]
    fn test_compiler_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Compiler>();
    }
}
