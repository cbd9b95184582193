use super::codegen::Fragment;
use super::quoting::{double_quote, quote};
use crate::graph::Params;
use crate::registry::{CommandDefinition, Placement};
use ahash::AHashMap;

/// Builders keyed by command id (or program name).
pub type BuilderMap = AHashMap<String, Box<dyn CommandBuilder>>;

/// Defines the contract for turning one command node into a command-line fragment.
///
/// Implementations must be pure: the same definition and parameters always yield
/// the same fragment.
pub trait CommandBuilder: Send + Sync {
    fn build(&self, definition: &CommandDefinition, params: &Params) -> Fragment;
}

/// Reads a populated text value. Empty strings, `false`, `null` and missing keys are unset.
pub fn param_text(params: &Params, name: &str) -> Option<String> {
    match params.get(name)? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads a boolean switch. Accepts `true` and the string `"true"`.
pub fn param_flag(params: &Params, name: &str) -> bool {
    match params.get(name) {
        Some(serde_json::Value::Bool(b)) => *b,
        Some(serde_json::Value::String(s)) => s == "true",
        _ => false,
    }
}

/// The default builder: interprets the definition's `ParamSpec`s.
///
/// Switches and valued flags come first in declaration order, positional
/// arguments last, also in declaration order.
pub struct TemplateBuilder;

impl CommandBuilder for TemplateBuilder {
    fn build(&self, definition: &CommandDefinition, params: &Params) -> Fragment {
        let mut parts = vec![definition.program.clone()];
        let mut positionals = Vec::new();

        for spec in &definition.params {
            match spec.placement() {
                Placement::Switch => {
                    if param_flag(params, &spec.name) {
                        parts.push(spec.flag_template.clone());
                    }
                }
                Placement::Option => {
                    if let Some(value) = param_text(params, &spec.name) {
                        parts.push(
                            spec.flag_template
                                .replace("{}", &quote(&value, spec.quoting)),
                        );
                    }
                }
                Placement::Positional => {
                    if let Some(value) = param_text(params, &spec.name) {
                        positionals.push(quote(&value, spec.quoting));
                    }
                }
            }
        }

        parts.extend(positionals);
        Fragment::Command {
            text: parts.join(" "),
            pipes_onward: definition.produces_output,
        }
    }
}

/// `tr SET1 SET2`, or `tr -d SET1` when there is nothing to translate to.
struct TrBuilder;

impl CommandBuilder for TrBuilder {
    fn build(&self, definition: &CommandDefinition, params: &Params) -> Fragment {
        let text = match (param_text(params, "set1"), param_text(params, "set2")) {
            (Some(from), Some(to)) => format!(
                "{} {} {}",
                definition.program,
                double_quote(&from),
                double_quote(&to)
            ),
            (Some(from), None) => format!("{} -d {}", definition.program, double_quote(&from)),
            _ => definition.program.clone(),
        };
        Fragment::Command {
            text,
            pipes_onward: definition.produces_output,
        }
    }
}

/// `find` takes its start path before any expression.
struct FindBuilder;

impl CommandBuilder for FindBuilder {
    fn build(&self, definition: &CommandDefinition, params: &Params) -> Fragment {
        let mut parts = vec![definition.program.clone()];
        if let Some(path) = param_text(params, "path") {
            parts.push(double_quote(&path));
        }
        for spec in definition
            .params
            .iter()
            .filter(|s| s.placement() == Placement::Option)
        {
            if let Some(value) = param_text(params, &spec.name) {
                parts.push(
                    spec.flag_template
                        .replace("{}", &quote(&value, spec.quoting)),
                );
            }
        }
        Fragment::Command {
            text: parts.join(" "),
            pipes_onward: definition.produces_output,
        }
    }
}

struct IfBuilder;

impl CommandBuilder for IfBuilder {
    fn build(&self, _definition: &CommandDefinition, params: &Params) -> Fragment {
        if_block(param_text(params, "condition").as_deref())
    }
}

struct ForBuilder;

impl CommandBuilder for ForBuilder {
    fn build(&self, _definition: &CommandDefinition, params: &Params) -> Fragment {
        for_block(
            param_text(params, "variable").as_deref(),
            param_text(params, "values").as_deref(),
        )
    }
}

struct WhileBuilder;

impl CommandBuilder for WhileBuilder {
    fn build(&self, _definition: &CommandDefinition, params: &Params) -> Fragment {
        while_block(param_text(params, "condition").as_deref())
    }
}

/// Control blocks get a `:` body so the emitted script stays valid shell.
/// Blank fields leave a placeholder comment instead.
pub(crate) fn if_block(condition: Option<&str>) -> Fragment {
    match filled(condition) {
        Some(condition) => Fragment::Block(format!("if {}; then\n  :\nfi", condition)),
        None => Fragment::Placeholder("# if: missing condition".to_string()),
    }
}

pub(crate) fn for_block(variable: Option<&str>, values: Option<&str>) -> Fragment {
    match (filled(variable), filled(values)) {
        (Some(variable), Some(values)) => {
            Fragment::Block(format!("for {} in {}; do\n  :\ndone", variable, values))
        }
        _ => Fragment::Placeholder("# for: missing variable or values".to_string()),
    }
}

pub(crate) fn while_block(condition: Option<&str>) -> Fragment {
    match filled(condition) {
        Some(condition) => Fragment::Block(format!("while {}; do\n  :\ndone", condition)),
        None => Fragment::Placeholder("# while: missing condition".to_string()),
    }
}

fn filled(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|f| !f.is_empty())
}

/// Registers the builders for commands the template cannot express.
macro_rules! define_command_builders {
    ( $( ($struct_name:ident, $command_id:literal) ),* $(,)? ) => {
        pub(crate) fn register_default_builders(builders: &mut BuilderMap) {
            $( builders.insert($command_id.to_string(), Box::new($struct_name)); )*
        }

        /// Creates a fresh instance of a built-in builder by command id.
        pub(crate) fn create_builder_by_name(name: &str) -> Option<Box<dyn CommandBuilder>> {
            match name {
                $( $command_id => Some(Box::new($struct_name)), )*
                _ => None,
            }
        }
    };
}

define_command_builders! {
    (TrBuilder, "tr"),
    (FindBuilder, "find"),
    (IfBuilder, "if"),
    (ForBuilder, "for"),
    (WhileBuilder, "while"),
}
