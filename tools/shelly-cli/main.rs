use clap::{Parser, ValueEnum};
use shelly::prelude::*;
use std::fs;
use std::process;
use tracing::{debug, warn};

/// Shebang choices as clap parses them.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ShebangCli {
    Bash,
    Sh,
    Zsh,
}

impl From<ShebangCli> for ShebangFlavor {
    fn from(value: ShebangCli) -> Self {
        match value {
            ShebangCli::Bash => ShebangFlavor::Bash,
            ShebangCli::Sh => ShebangFlavor::Sh,
            ShebangCli::Zsh => ShebangFlavor::Zsh,
        }
    }
}

/// Compiles a visual pipeline export into a shell script
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the pipeline JSON exported by the editor
    #[arg(required_unless_present = "list_commands")]
    graph_path: Option<String>,

    /// Path to a script config JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Write the script to this file (marked executable) instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Print the command catalog grouped by category and exit
    #[arg(long)]
    list_commands: bool,

    /// Interpreter for the shebang line
    #[arg(long, value_enum)]
    shebang: Option<ShebangCli>,

    /// Do not emit `set -e`
    #[arg(long)]
    no_set_e: bool,

    /// Do not emit `set -u`
    #[arg(long)]
    no_set_u: bool,

    /// Do not emit `set -o pipefail`
    #[arg(long)]
    no_pipefail: bool,

    /// Trace every command (`set -x`)
    #[arg(long)]
    debug: bool,

    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    author: Option<String>,

    /// Value for the `# Version:` header
    #[arg(long)]
    version_tag: Option<String>,

    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_commands {
        print_catalog(&CommandRegistry::with_builtins());
        return;
    }

    let graph_path = cli
        .graph_path
        .clone()
        .unwrap_or_else(|| exit_with_error("A pipeline JSON path is required."));

    // --- 1. Loading ---
    let graph_json = fs::read_to_string(&graph_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read pipeline file '{}': {}",
            graph_path, e
        ))
    });
    let graph = UiGraph::from_json(&graph_json)
        .and_then(|ui| ui.into_graph())
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load pipeline: {}", e)));
    debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "pipeline loaded"
    );

    let config = load_config(&cli);

    // --- 2. Compilation ---
    let compiler = Compiler::default();
    let compiled = match compiler.try_compile(&graph, &config) {
        Ok(compiled) => compiled,
        Err(e) => {
            println!("{}", e.diagnostic());
            process::exit(2);
        }
    };
    for warning in &compiled.warnings {
        warn!("{}", warning);
    }

    // --- 3. Output ---
    match &cli.output {
        Some(path) => {
            compiled
                .save(path)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            eprintln!(
                "Wrote {} ({} nodes, {} warnings)",
                path,
                compiled.order.len(),
                compiled.warnings.len()
            );
        }
        None => print!("{}", compiled.text),
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

/// The config file (if any), then individual flag overrides.
fn load_config(cli: &Cli) -> ScriptConfig {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read config file '{}': {}", path, e))
            });
            ScriptConfig::from_json(&json)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse config JSON: {}", e)))
        }
        None => ScriptConfig::default(),
    };

    if let Some(shebang) = cli.shebang {
        config.shebang_flavor = shebang.into();
    }
    if cli.no_set_e {
        config.set_e = false;
    }
    if cli.no_set_u {
        config.set_u = false;
    }
    if cli.no_pipefail {
        config.set_pipefail = false;
    }
    if cli.debug {
        config.debug = true;
    }
    if let Some(description) = &cli.description {
        config.description = description.clone();
    }
    if let Some(author) = &cli.author {
        config.author = author.clone();
    }
    if let Some(version) = &cli.version_tag {
        config.version = version.clone();
    }
    config
}

fn print_catalog(registry: &CommandRegistry) {
    for (category, commands) in registry.list_by_category() {
        println!("{}", category);
        for command in commands {
            let io = match (command.accepts_input, command.produces_output) {
                (true, true) => "in/out",
                (false, true) => "out",
                (true, false) => "in",
                (false, false) => "-",
            };
            println!("  {:<8} {:<7} {}", command.id, io, command.description);
            for param in &command.params {
                let marker = if param.required { "*" } else { " " };
                println!(
                    "      {}{:<16} {}",
                    marker,
                    param.name,
                    param.flag_template
                );
            }
        }
        println!();
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    process::exit(1);
}
