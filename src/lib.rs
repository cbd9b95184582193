//! # Shelly - Visual Pipeline to Shell Script Compiler
//!
//! **Shelly** compiles shell pipelines assembled as node graphs (an input file,
//! a chain of commands, an output redirection) into executable shell scripts.
//! Compilation is pure and deterministic: the same graph and configuration
//! always produce byte-identical script text.
//!
//! ## Core Workflow
//!
//! The compiler is format-agnostic. It operates on a canonical internal model,
//! the `PipelineGraph`. The primary workflow is:
//!
//! 1.  **Load Your Graph**: Parse the editor export (or your own format) into Rust structs.
//!     The editor's JSON export is supported out of the box by `ui::UiGraph`.
//! 2.  **Convert to Shelly's Model**: Implement the `IntoGraph` trait for your structs to translate them into a `PipelineGraph`.
//! 3.  **Compile**: Use `Compiler::builder` to create a compiler over a command registry, then call
//!     `compile` for the script text (or a one-line `# ❌` diagnostic), or `try_compile` for a
//!     structured result with the execution order and warnings.
//!
//! ## Quick Start
//!
//! ```rust
//! use shelly::prelude::*;
//! use serde_json::json;
//!
//! let graph = PipelineGraph::chain(vec![
//!     Node::input("in", "app.log"),
//!     Node::command("grep", "grep", [("pattern", json!("ERROR")), ("ignoreCase", json!(true))]),
//!     Node::output("out", "errors.txt", false),
//! ]);
//!
//! let compiler = Compiler::builder().build();
//! let script = compiler.compile(&graph, &ScriptConfig::default());
//!
//! assert!(script.starts_with("#!/bin/bash"));
//! assert!(script.contains(r#"cat "app.log" | grep -i "ERROR" > "errors.txt""#));
//! ```
//!
//! ## Extending the Command Set
//!
//! Commands are described declaratively by `CommandDefinition`s in a `CommandRegistry`.
//! A template-driven builder renders most of them; commands with unusual argument
//! layouts can plug in their own `CommandBuilder`:
//!
//! ```rust
//! use shelly::prelude::*;
//! use serde_json::json;
//!
//! let head = CommandDefinition::new("head", "head", Category::Text, "Output the first lines")
//!     .param(ParamSpec::number("lines", "Lines").flag("-n {}"))
//!     .pipes(true, true);
//!
//! let compiler = Compiler::builder()
//!     .with_custom_command(head, Box::new(TemplateBuilder))
//!     .with_command_alias("search", "grep")
//!     .build();
//!
//! let graph = PipelineGraph::chain(vec![
//!     Node::input("in", "app.log"),
//!     Node::command("s", "search", [("pattern", json!("WARN"))]),
//!     Node::command("h", "head", [("lines", json!(5))]),
//! ]);
//! let script = compiler.compile(&graph, &ScriptConfig::default());
//! assert!(script.contains(r#"cat "app.log" | grep "WARN" | head -n 5"#));
//! ```

pub mod compiler;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod registry;
pub mod ui;
