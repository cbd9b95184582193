//! The editor's JSON export format.
//!
//! Mirrors what the canvas saves (`type`/`data` nodes, edges with `sourceHandle`)
//! and converts it into a `PipelineGraph` through `IntoGraph`.

mod conversion;
pub mod types;

pub use types::*;
