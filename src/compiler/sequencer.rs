use crate::error::GraphError;
use crate::graph::{Edge, Node};
use ahash::AHashMap;
use itertools::Itertools;

/// Index-based adjacency view over a node/edge list.
///
/// Successor lists keep edge declaration order so every traversal is deterministic.
pub(crate) struct GraphIndex<'a> {
    pub(crate) nodes: &'a [Node],
    pub(crate) successors: Vec<Vec<usize>>,
    pub(crate) in_degree: Vec<usize>,
}

impl<'a> GraphIndex<'a> {
    /// Fails on duplicate node ids and on edges that reference a missing node.
    pub(crate) fn new(nodes: &'a [Node], edges: &[Edge]) -> Result<Self, GraphError> {
        if let Some(node_id) = nodes.iter().map(|n| n.id.as_str()).duplicates().next() {
            return Err(GraphError::DuplicateNode {
                node_id: node_id.to_string(),
            });
        }

        let positions: AHashMap<&str, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.as_str(), i))
            .collect();

        let mut successors = vec![Vec::new(); nodes.len()];
        let mut in_degree = vec![0; nodes.len()];
        for edge in edges {
            let lookup = |id: &str| {
                positions
                    .get(id)
                    .copied()
                    .ok_or_else(|| GraphError::DanglingEdge {
                        source_id: edge.source.clone(),
                        target_id: id.to_string(),
                    })
            };
            let source = lookup(&edge.source)?;
            let target = lookup(&edge.target)?;
            successors[source].push(target);
            in_degree[target] += 1;
        }

        Ok(Self {
            nodes,
            successors,
            in_degree,
        })
    }

    pub(crate) fn id(&self, index: usize) -> &'a str {
        &self.nodes[index].id
    }

    pub(crate) fn ids(&self, indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&i| self.id(i).to_string()).collect()
    }

    /// Depth-first post-order from `start`, skipping anything already visited.
    /// Nodes are prepended once all of their successors are placed.
    ///
    /// Runs on an explicit `(node, next successor)` stack so chain length is
    /// bounded by the heap, not the thread stack.
    fn visit(&self, start: usize, visited: &mut [bool], reversed: &mut Vec<usize>) {
        if visited[start] {
            return;
        }
        visited[start] = true;
        let mut stack = vec![(start, 0)];
        while let Some(top) = stack.last_mut() {
            let (node, cursor) = *top;
            match self.successors[node].get(cursor) {
                Some(&next) => {
                    top.1 += 1;
                    if !visited[next] {
                        visited[next] = true;
                        stack.push((next, 0));
                    }
                }
                None => {
                    stack.pop();
                    reversed.push(node);
                }
            }
        }
    }

    /// Every node, using declaration order to pick traversal roots.
    pub(crate) fn topological_order(&self) -> Vec<usize> {
        let mut visited = vec![false; self.nodes.len()];
        let mut reversed = Vec::with_capacity(self.nodes.len());
        for start in 0..self.nodes.len() {
            self.visit(start, &mut visited, &mut reversed);
        }
        reversed.reverse();
        reversed
    }

    /// Only the nodes reachable from `root`.
    pub(crate) fn order_from(&self, root: usize) -> Vec<usize> {
        let mut visited = vec![false; self.nodes.len()];
        let mut reversed = Vec::new();
        self.visit(root, &mut visited, &mut reversed);
        reversed.reverse();
        reversed
    }
}

/// Orders every node so that each one precedes all nodes reachable from it.
///
/// Ties (separate components, unreachable nodes) are broken by declaration order.
/// Only meaningful for acyclic graphs; run the validator first.
pub fn topological_order<'a>(nodes: &'a [Node], edges: &[Edge]) -> Result<Vec<&'a Node>, GraphError> {
    let index = GraphIndex::new(nodes, edges)?;
    Ok(index
        .topological_order()
        .into_iter()
        .map(|i| &nodes[i])
        .collect())
}

/// Orders the nodes reachable from the node with id `root`.
/// Fails with `NoRoot` if no node has that id.
pub fn order_from<'a>(
    root: &str,
    nodes: &'a [Node],
    edges: &[Edge],
) -> Result<Vec<&'a Node>, GraphError> {
    let index = GraphIndex::new(nodes, edges)?;
    let start = nodes
        .iter()
        .position(|n| n.id == root)
        .ok_or(GraphError::NoRoot)?;
    Ok(index
        .order_from(start)
        .into_iter()
        .map(|i| &nodes[i])
        .collect())
}
