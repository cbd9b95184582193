use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde_json::{Value, json};
use shelly::prelude::*;
use std::fs;

/// A CLI tool to generate random linear pipelines in the editor's JSON format
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_pipeline.json")]
    output: String,

    /// The minimum number of command nodes between input and output
    #[arg(long, default_value_t = 1)]
    min: usize,

    /// The maximum number of command nodes between input and output
    #[arg(long, default_value_t = 6)]
    max: usize,

    /// Seed for a reproducible pipeline
    #[arg(long)]
    seed: Option<u64>,

    /// Replace one command with an id the registry does not know
    #[arg(long)]
    unknown_command: bool,
}

/// Commands that both accept and produce piped data, so any order of them is a valid chain.
const FILTERS: &[&str] = &["grep", "sed", "awk", "cut", "sort", "uniq", "tr"];

const WORDS: &[&str] = &["ERROR", "WARN", "timeout", "kernel", "user", "GET", "404"];

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let registry = CommandRegistry::with_builtins();
    let count = rng.random_range(cli.min..=cli.max);
    println!("Generating a pipeline with {} command nodes...", count);

    let source = format!("{}.log", pick(&mut rng, WORDS).to_lowercase());
    let mut nodes = vec![Node::input("input", source)];
    for i in 0..count {
        let id = format!("cmd{}", i);
        let command_id = pick(&mut rng, FILTERS);
        let definition = registry
            .lookup(command_id)
            .ok_or_else(|| format!("'{}' is missing from the catalog", command_id))?;
        nodes.push(Node::command(id, command_id, random_params(&mut rng, definition)));
    }
    if cli.unknown_command && count > 0 {
        let slot = rng.random_range(1..=count);
        nodes[slot] = Node::command(
            nodes[slot].id.clone(),
            "zzz",
            Vec::<(String, Value)>::new(),
        );
        println!("-> Node '{}' uses an unknown command.", nodes[slot].id);
    }
    nodes.push(Node::output("output", "result.txt", rng.random_bool(0.5)));

    let mut ui = UiGraph::from_graph(&PipelineGraph::chain(nodes));
    for (i, node) in ui.nodes.iter_mut().enumerate() {
        node.position = Some(shelly::ui::UiPosition {
            x: 40.0 + 220.0 * i as f64,
            y: 120.0,
        });
    }

    fs::write(&cli.output, ui.to_json()?)?;
    println!(
        "Successfully generated and saved pipeline to '{}'",
        cli.output
    );
    Ok(())
}

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

/// Fills required parameters and a random subset of the optional ones.
fn random_params(rng: &mut StdRng, definition: &CommandDefinition) -> Vec<(String, Value)> {
    let mut params = Vec::new();
    for param in &definition.params {
        if !param.required && !rng.random_bool(0.4) {
            continue;
        }
        let value = match param.kind {
            ParamType::Boolean => json!(true),
            ParamType::Number => json!(rng.random_range(1..100)),
            ParamType::Select => json!(param.options.choose(rng).cloned().unwrap_or_default()),
            ParamType::Text | ParamType::File => {
                json!(sample_text(rng, &definition.id, &param.name))
            }
        };
        params.push((param.name.clone(), value));
    }
    params
}

fn sample_text(rng: &mut StdRng, command: &str, param: &str) -> String {
    let word = pick(rng, WORDS);
    match (command, param) {
        ("sed", _) => format!("s/{}/{}/g", word, word.to_lowercase()),
        ("awk", "program") => format!("{{print ${}}}", rng.random_range(1..5)),
        ("cut", "fields") => format!("1-{}", rng.random_range(2..6)),
        ("tr", "set1") => "a-z".to_string(),
        ("tr", "set2") => "A-Z".to_string(),
        (_, "delimiter") | (_, "fieldSeparator") => ":".to_string(),
        _ => word.to_string(),
    }
}
