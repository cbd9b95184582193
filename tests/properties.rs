//! Property tests over randomly shaped graphs and configurations.
mod common;
use common::*;
use proptest::prelude::*;
use serde_json::json;
use shelly::prelude::*;

/// Node `i` of a random graph. Kinds rotate so every fragment type shows up.
fn node(i: usize) -> Node {
    let id = format!("n{}", i);
    match i % 5 {
        0 => Node::input(id, format!("in{}.txt", i)),
        1 => Node::command(id, "grep", [("pattern", json!(format!("p{}", i)))]),
        2 => Node::command(id, "sort", [("reverse", json!(true))]),
        3 => Node::output(id, format!("out{}.txt", i), i % 2 == 0),
        _ => Node::command(id, "zzz", Vec::<(String, serde_json::Value)>::new()),
    }
}

fn graph_strategy() -> impl Strategy<Value = PipelineGraph> {
    (0usize..8).prop_flat_map(|n| {
        let edges = if n == 0 {
            Just(Vec::new()).boxed()
        } else {
            prop::collection::vec((0..n, 0..n), 0..12).boxed()
        };
        edges.prop_map(move |pairs| {
            PipelineGraph::new(
                (0..n).map(node).collect(),
                pairs
                    .into_iter()
                    .map(|(s, t)| Edge::new(format!("n{}", s), format!("n{}", t)))
                    .collect(),
            )
        })
    })
}

fn flavor_strategy() -> impl Strategy<Value = ShebangFlavor> {
    prop_oneof![
        Just(ShebangFlavor::Bash),
        Just(ShebangFlavor::Sh),
        Just(ShebangFlavor::Zsh),
    ]
}

fn config_strategy() -> impl Strategy<Value = ScriptConfig> {
    (
        flavor_strategy(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        "[a-z ]{0,12}",
    )
        .prop_map(|(shebang_flavor, set_e, set_u, set_pipefail, debug, author)| ScriptConfig {
            shebang_flavor,
            set_e,
            set_u,
            set_pipefail,
            debug,
            author,
            ..ScriptConfig::default()
        })
}

fn root_count(graph: &PipelineGraph) -> usize {
    graph
        .nodes
        .iter()
        .filter(|n| !graph.edges.iter().any(|e| e.target == n.id))
        .count()
}

proptest! {
    #[test]
    fn compile_is_deterministic(graph in graph_strategy(), config in config_strategy()) {
        let compiler = Compiler::default();
        prop_assert_eq!(compiler.compile(&graph, &config), compiler.compile(&graph, &config));
    }

    #[test]
    fn output_is_script_or_diagnostic(graph in graph_strategy()) {
        let output = Compiler::default().compile(&graph, &ScriptConfig::default());
        prop_assert!(output.starts_with("#!/bin/") || output.starts_with("# ❌"));
    }

    #[test]
    fn root_count_other_than_one_is_rejected(graph in graph_strategy()) {
        prop_assume!(root_count(&graph) != 1);
        let output = Compiler::default().compile(&graph, &ScriptConfig::default());
        prop_assert!(output.starts_with("# ❌"), "compiled unexpectedly: {}", output);
    }

    #[test]
    fn cycles_are_always_rejected(
        graph in graph_strategy(),
        cycle in prop::collection::vec(0usize..8, 1..5),
    ) {
        prop_assume!(!graph.nodes.is_empty());
        let n = graph.nodes.len();
        let mut graph = graph;
        let ring: Vec<usize> = cycle.iter().map(|i| i % n).collect();
        for (i, &from) in ring.iter().enumerate() {
            let to = ring[(i + 1) % ring.len()];
            graph.edges.push(Edge::new(format!("n{}", from), format!("n{}", to)));
        }

        let result = Compiler::default().try_compile(&graph, &ScriptConfig::default());
        prop_assert!(matches!(result, Err(GraphError::Cycle { .. })), "got {:?}", result);
    }

    #[test]
    fn linear_graphs_cover_every_node(len in 2usize..12) {
        let graph = create_linear_graph(len);
        let compiled = Compiler::default()
            .try_compile(&graph, &ScriptConfig::default())
            .unwrap();
        prop_assert_eq!(compiled.order.len(), graph.nodes.len());
    }

    #[test]
    fn unreachable_node_is_disconnected(len in 2usize..12) {
        let mut graph = create_linear_graph(len);
        graph.nodes.push(Node::input("stray", "stray.txt"));
        let result = Compiler::default().try_compile(&graph, &ScriptConfig::default());
        prop_assert!(
            matches!(result, Err(GraphError::Disconnected { ref unreachable, .. }) if unreachable == &["stray"]),
            "got {:?}",
            result
        );
    }

    #[test]
    fn scaffold_matches_config(config in config_strategy(), len in 2usize..6) {
        let script = Compiler::default().compile(&create_linear_graph(len), &config);
        let shebang = format!("#!/bin/{}\n", config.shebang_flavor);
        prop_assert!(script.starts_with(&shebang));
        prop_assert_eq!(script.contains("\nset -o pipefail\n"), config.set_pipefail);
        prop_assert!(script.ends_with('\n'));
    }
}
