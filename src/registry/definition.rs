use serde::Serialize;
use std::fmt;

/// The editor widget a parameter is edited with. Also decides how codegen treats the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Text,
    Number,
    Boolean,
    Select,
    File,
}

/// How a value is quoted when substituted into its flag template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quoting {
    /// `"value"`, with `\`, `"`, `` ` `` and `$` escaped. Nothing expands.
    Double,
    /// `'value'`, for program text that may itself contain double quotes.
    Single,
    /// Inserted verbatim (numbers, select options).
    Raw,
}

/// Where a parameter lands on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A bare flag such as `-i`, emitted when the boolean is set.
    Switch,
    /// A flag that carries a value, such as `-F {}`.
    Option,
    /// A positional argument, always emitted after every flag.
    Positional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Text,
    Files,
    Network,
    System,
    Control,
}

impl Category {
    /// Every category, in palette order.
    pub const ALL: [Category; 5] = [
        Category::Text,
        Category::Files,
        Category::Network,
        Category::System,
        Category::Control,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Text => "Text Processing",
            Category::Files => "File Operations",
            Category::Network => "Network",
            Category::System => "System",
            Category::Control => "Control Flow",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Schema of one command parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamSpec {
    pub name: String,
    pub label: String,
    pub kind: ParamType,
    /// `-x` for switches, `-x {}` for options, `{}` for positionals.
    pub flag_template: String,
    pub quoting: Quoting,
    /// Hidden behind the "advanced" toggle in the editor.
    pub advanced: bool,
    pub required: bool,
    pub placeholder: Option<String>,
    pub options: Vec<String>,
    /// Editor hint only; codegen never injects it.
    pub default: Option<String>,
    pub description: Option<String>,
}

impl ParamSpec {
    fn new(name: &str, label: &str, kind: ParamType, flag_template: &str, quoting: Quoting) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            flag_template: flag_template.to_string(),
            quoting,
            advanced: false,
            required: false,
            placeholder: None,
            options: Vec::new(),
            default: None,
            description: None,
        }
    }

    /// Free text, double-quoted, positional unless given a flag.
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, ParamType::Text, "{}", Quoting::Double)
    }

    pub fn file(name: &str, label: &str) -> Self {
        Self::new(name, label, ParamType::File, "{}", Quoting::Double)
    }

    pub fn number(name: &str, label: &str) -> Self {
        Self::new(name, label, ParamType::Number, "{}", Quoting::Raw)
    }

    pub fn boolean(name: &str, label: &str, switch: &str) -> Self {
        Self::new(name, label, ParamType::Boolean, switch, Quoting::Raw)
    }

    pub fn select(name: &str, label: &str, options: &[&str]) -> Self {
        let mut spec = Self::new(name, label, ParamType::Select, "{}", Quoting::Raw);
        spec.options = options.iter().map(|o| o.to_string()).collect();
        spec
    }

    pub fn flag(mut self, template: &str) -> Self {
        self.flag_template = template.to_string();
        self
    }

    pub fn single_quoted(mut self) -> Self {
        self.quoting = Quoting::Single;
        self
    }

    pub fn advanced(mut self) -> Self {
        self.advanced = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, text: &str) -> Self {
        self.placeholder = Some(text.to_string());
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default = Some(value.to_string());
        self
    }

    pub fn describe(mut self, text: &str) -> Self {
        self.description = Some(text.to_string());
        self
    }

    pub fn placement(&self) -> Placement {
        if self.kind == ParamType::Boolean || !self.flag_template.contains("{}") {
            Placement::Switch
        } else if self.flag_template == "{}" {
            Placement::Positional
        } else {
            Placement::Option
        }
    }
}

/// A registry entry: everything the editor palette and the code generator know about a command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandDefinition {
    pub id: String,
    /// The executable written to the script. Equal to `id` unless the entry is an alias.
    pub program: String,
    pub label: String,
    pub category: Category,
    pub description: String,
    /// Declaration order is the editor's form order, not the emission order.
    pub params: Vec<ParamSpec>,
    pub examples: Vec<String>,
    /// Can receive piped input.
    pub accepts_input: bool,
    /// Produces output that can be piped onward.
    pub produces_output: bool,
}

impl CommandDefinition {
    pub fn new(id: &str, label: &str, category: Category, description: &str) -> Self {
        Self {
            id: id.to_string(),
            program: id.to_string(),
            label: label.to_string(),
            category,
            description: description.to_string(),
            params: Vec::new(),
            examples: Vec::new(),
            accepts_input: false,
            produces_output: false,
        }
    }

    pub fn param(mut self, spec: ParamSpec) -> Self {
        self.params.push(spec);
        self
    }

    pub fn examples(mut self, examples: &[&str]) -> Self {
        self.examples = examples.iter().map(|e| e.to_string()).collect();
        self
    }

    pub fn pipes(mut self, accepts_input: bool, produces_output: bool) -> Self {
        self.accepts_input = accepts_input;
        self.produces_output = produces_output;
        self
    }

    pub fn find_param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }
}
