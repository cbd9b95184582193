use super::quoting::comment_text;
use crate::graph::ScriptConfig;

/// Wraps the assembled body with the shebang, metadata comments and `set` directives.
pub fn build(body: &str, config: &ScriptConfig) -> String {
    let mut lines = vec![format!("#!/bin/{}", config.shebang_flavor)];

    for (label, value) in [
        ("Description", &config.description),
        ("Author", &config.author),
        ("Version", &config.version),
    ] {
        if !value.trim().is_empty() {
            lines.push(format!("# {}: {}", label, comment_text(value)));
        }
    }

    let flags: String = [(config.set_e, 'e'), (config.set_u, 'u'), (config.debug, 'x')]
        .into_iter()
        .filter_map(|(enabled, flag)| enabled.then_some(flag))
        .collect();
    if !flags.is_empty() {
        lines.push(format!("set -{}", flags));
    }
    if config.set_pipefail {
        lines.push("set -o pipefail".to_string());
    }

    lines.push(String::new());
    lines.push(body.to_string());

    let mut script = lines.join("\n");
    script.push('\n');
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ShebangFlavor;

    #[test]
    fn test_default_config() {
        let script = build("ls", &ScriptConfig::default());
        assert_eq!(
            script,
            "#!/bin/bash\n# Version: 1.0.0\nset -eu\nset -o pipefail\n\nls\n"
        );
    }

    #[test]
    fn test_metadata_in_fixed_order() {
        let config = ScriptConfig {
            description: "Collect errors".to_string(),
            author: "ops".to_string(),
            ..ScriptConfig::default()
        };
        let script = build("ls", &config);
        let description = script.find("# Description: Collect errors").unwrap();
        let author = script.find("# Author: ops").unwrap();
        let version = script.find("# Version: 1.0.0").unwrap();
        assert!(description < author && author < version);
    }

    #[test]
    fn test_relaxed_config_omits_directives() {
        let config = ScriptConfig {
            shebang_flavor: ShebangFlavor::Sh,
            set_e: false,
            set_u: false,
            set_pipefail: false,
            version: String::new(),
            ..ScriptConfig::default()
        };
        assert_eq!(build("ls", &config), "#!/bin/sh\n\nls\n");
    }

    #[test]
    fn test_debug_adds_trace_flag() {
        let config = ScriptConfig {
            set_u: false,
            debug: true,
            ..ScriptConfig::default()
        };
        assert!(build("ls", &config).contains("set -ex\n"));
    }

    #[test]
    fn test_metadata_cannot_break_out_of_comments() {
        let config = ScriptConfig {
            description: "nightly\nrm -rf \"$HOME\"".to_string(),
            author: "ops\r\ntouch x".to_string(),
            ..ScriptConfig::default()
        };
        let script = build("ls", &config);
        assert!(script.contains("# Description: nightly rm -rf \"$HOME\"\n"));
        assert!(script.contains("# Author: ops  touch x\n"));
        assert!(script.lines().all(|line| !line.starts_with("rm") && !line.starts_with("touch")));
    }
}
