use super::builders::{
    BuilderMap, CommandBuilder, TemplateBuilder, for_block, if_block, param_flag, param_text,
    while_block,
};
use super::quoting::double_quote;
use crate::error::CompileWarning;
use crate::graph::{LoopKind, Node, NodeKind, Params};
use crate::registry::{CommandDefinition, CommandRegistry, ParamType};
use std::fmt;
use tracing::{debug, warn};

/// The command-line text synthesized for a single node, before assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A command that takes part in the pipe chain.
    Command {
        text: String,
        /// False for commands whose output cannot be piped onward (`cp`, `rm`, ...).
        pipes_onward: bool,
    },
    /// A control structure. Pipes like a command; spans several lines.
    Block(String),
    /// An output node. Attaches to the preceding fragment.
    Redirect { path: String, append: bool },
    /// A comment standing in for something that could not be generated.
    Placeholder(String),
}

impl Fragment {
    pub fn placeholder(text: impl Into<String>) -> Self {
        Fragment::Placeholder(text.into())
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Command { text, .. } => f.write_str(text),
            Fragment::Block(text) => f.write_str(text),
            // Rendered by the assembler against the preceding fragment.
            Fragment::Redirect { .. } => Ok(()),
            Fragment::Placeholder(text) => f.write_str(text),
        }
    }
}

/// Converts one node into its fragment, collecting any non-fatal warnings.
///
/// Never fails: a node that cannot be generated becomes a `Placeholder`.
pub fn generate(
    node: &Node,
    registry: &CommandRegistry,
    builders: &BuilderMap,
) -> (Fragment, Vec<CompileWarning>) {
    let mut warnings = Vec::new();
    let fragment = match &node.kind {
        NodeKind::Input { path } => {
            if path.trim().is_empty() {
                warnings.push(missing(node, "path"));
                Fragment::placeholder("# input: missing path")
            } else {
                Fragment::Command {
                    text: format!("cat {}", double_quote(path)),
                    pipes_onward: true,
                }
            }
        }
        NodeKind::Output { path, append } => {
            if path.trim().is_empty() {
                warnings.push(missing(node, "path"));
                Fragment::placeholder("# output: missing path")
            } else {
                Fragment::Redirect {
                    path: path.clone(),
                    append: *append,
                }
            }
        }
        NodeKind::Conditional { condition } => {
            let fragment = if_block(Some(condition.as_str()));
            if matches!(fragment, Fragment::Placeholder(_)) {
                warnings.push(missing(node, "condition"));
            }
            fragment
        }
        NodeKind::Loop(LoopKind::For { variable, values }) => {
            let fragment = for_block(Some(variable.as_str()), Some(values.as_str()));
            if non_blank(variable).is_none() {
                warnings.push(missing(node, "variable"));
            }
            if non_blank(values).is_none() {
                warnings.push(missing(node, "values"));
            }
            fragment
        }
        NodeKind::Loop(LoopKind::While { condition }) => {
            let fragment = while_block(Some(condition.as_str()));
            if matches!(fragment, Fragment::Placeholder(_)) {
                warnings.push(missing(node, "condition"));
            }
            fragment
        }
        NodeKind::Command { command_id, params } => match registry.lookup(command_id) {
            None => {
                warn!(node = %node.id, command = %command_id, "unknown command");
                warnings.push(CompileWarning::UnknownCommand {
                    node_id: node.id.clone(),
                    command_id: command_id.clone(),
                });
                Fragment::placeholder(format!("# Unknown command: {}", command_id))
            }
            Some(definition) => {
                warnings.extend(missing_required(node, definition, params));
                let builder: &dyn CommandBuilder = builders
                    .get(&definition.id)
                    .or_else(|| builders.get(&definition.program))
                    .map(|b| &**b)
                    .unwrap_or(&TemplateBuilder);
                builder.build(definition, params)
            }
        },
    };

    debug!(node = %node.id, fragment = %fragment, "generated fragment");
    (fragment, warnings)
}

fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn missing(node: &Node, param: &str) -> CompileWarning {
    warn!(node = %node.id, param, "missing required parameter");
    CompileWarning::MissingParameter {
        node_id: node.id.clone(),
        param: param.to_string(),
    }
}

fn missing_required(
    node: &Node,
    definition: &CommandDefinition,
    params: &Params,
) -> Vec<CompileWarning> {
    definition
        .params
        .iter()
        .filter(|spec| spec.required)
        .filter(|spec| match spec.kind {
            ParamType::Boolean => !param_flag(params, &spec.name),
            _ => param_text(params, &spec.name).is_none(),
        })
        .map(|spec| missing(node, &spec.name))
        .collect()
}
