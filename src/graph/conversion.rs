use super::definition::PipelineGraph;
use crate::error::GraphConversionError;

/// A trait for editor or file formats that can be converted into a `PipelineGraph`.
///
/// This is the seam between whatever produces the graph (a canvas export, a
/// hand-written fixture, a generator) and the compiler, which only ever sees
/// the canonical model.
///
/// # Example
///
/// ```rust
/// use shelly::error::GraphConversionError;
/// use shelly::graph::{IntoGraph, Node, PipelineGraph};
///
/// struct Steps(Vec<(String, String)>);
///
/// impl IntoGraph for Steps {
///     fn into_graph(self) -> Result<PipelineGraph, GraphConversionError> {
///         let nodes = self
///             .0
///             .into_iter()
///             .map(|(id, path)| Node::input(id, path))
///             .collect();
///         Ok(PipelineGraph::chain(nodes))
///     }
/// }
///
/// let graph = Steps(vec![("in".into(), "app.log".into())]).into_graph().unwrap();
/// assert_eq!(graph.nodes.len(), 1);
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into a compiler-ready pipeline graph.
    fn into_graph(self) -> Result<PipelineGraph, GraphConversionError>;
}

impl IntoGraph for PipelineGraph {
    fn into_graph(self) -> Result<PipelineGraph, GraphConversionError> {
        Ok(self)
    }
}
