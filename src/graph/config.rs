use serde::{Deserialize, Serialize};
use std::fmt;

/// The interpreter named in the script's shebang line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShebangFlavor {
    #[default]
    Bash,
    Sh,
    Zsh,
}

impl ShebangFlavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShebangFlavor::Bash => "bash",
            ShebangFlavor::Sh => "sh",
            ShebangFlavor::Zsh => "zsh",
        }
    }
}

impl fmt::Display for ShebangFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Script-level settings: shebang, error-handling directives and metadata comments.
///
/// Every field is optional when deserialized; missing fields take the defaults
/// the editor seeds a fresh canvas with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    #[serde(alias = "shebang", alias = "shebangFlavor")]
    pub shebang_flavor: ShebangFlavor,
    #[serde(alias = "setE")]
    pub set_e: bool,
    #[serde(alias = "setU")]
    pub set_u: bool,
    #[serde(alias = "setPipefail")]
    pub set_pipefail: bool,
    pub debug: bool,
    pub description: String,
    pub author: String,
    pub version: String,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            shebang_flavor: ShebangFlavor::Bash,
            set_e: true,
            set_u: true,
            set_pipefail: true,
            debug: false,
            description: String::new(),
            author: String::new(),
            version: "1.0.0".to_string(),
        }
    }
}

impl ScriptConfig {
    /// Parses a config from the editor's JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
