use super::sequencer::GraphIndex;
use crate::error::GraphError;
use crate::graph::{Edge, Node};
use tracing::debug;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Checks that the graph is a single linear pipeline and returns its execution order.
///
/// Checks run in a fixed order, first failure wins:
/// 1. every node id is unique and every edge endpoint exists,
/// 2. there is no directed cycle,
/// 3. there is exactly one start node,
/// 4. no node has more than one outgoing connection,
/// 5. every node is reachable from the start node.
pub fn validate<'a>(nodes: &'a [Node], edges: &[Edge]) -> Result<Vec<&'a Node>, GraphError> {
    let index = GraphIndex::new(nodes, edges)?;

    if let Some(path) = find_cycle(&index) {
        return Err(GraphError::Cycle {
            path: index.ids(&path),
        });
    }

    let root = find_root(&index)?;
    debug!(root = index.id(root), "start node selected");

    if let Some((node, successors)) = index
        .successors
        .iter()
        .enumerate()
        .find(|(_, successors)| successors.len() > 1)
    {
        return Err(GraphError::Branching {
            node_id: index.id(node).to_string(),
            successors: index.ids(successors),
        });
    }

    let order = index.order_from(root);
    if order.len() < nodes.len() {
        let mut reached = vec![false; nodes.len()];
        for &i in &order {
            reached[i] = true;
        }
        let unreachable: Vec<usize> = (0..nodes.len()).filter(|&i| !reached[i]).collect();
        return Err(GraphError::Disconnected {
            root: index.id(root).to_string(),
            unreachable: index.ids(&unreachable),
        });
    }

    Ok(order.into_iter().map(|i| &nodes[i]).collect())
}

/// Picks the start node.
///
/// Fully isolated nodes (no edges at all) do not compete with a wired-up start node;
/// they are left for the coverage check to report as unreachable.
fn find_root(index: &GraphIndex<'_>) -> Result<usize, GraphError> {
    let roots: Vec<usize> = (0..index.nodes.len())
        .filter(|&i| index.in_degree[i] == 0)
        .collect();

    match roots.as_slice() {
        [] => Err(GraphError::NoRoot),
        [root] => Ok(*root),
        _ => {
            let wired: Vec<usize> = roots
                .iter()
                .copied()
                .filter(|&i| !index.successors[i].is_empty())
                .collect();
            match wired.as_slice() {
                [root] => Ok(*root),
                _ => Err(GraphError::MultipleRoots {
                    roots: index.ids(&roots),
                }),
            }
        }
    }
}

/// Depth-first search with white/gray/black coloring. Returns the first cycle found,
/// closed with its entry node (`a -> b -> a`).
fn find_cycle(index: &GraphIndex<'_>) -> Option<Vec<usize>> {
    let mut colors = vec![Color::White; index.nodes.len()];
    (0..index.nodes.len()).find_map(|start| {
        if colors[start] == Color::White {
            dfs(index, start, &mut colors)
        } else {
            None
        }
    })
}

/// Iterative DFS. The `(node, next successor)` stack doubles as the current path.
fn dfs(index: &GraphIndex<'_>, start: usize, colors: &mut [Color]) -> Option<Vec<usize>> {
    colors[start] = Color::Gray;
    let mut stack = vec![(start, 0)];

    while let Some(top) = stack.last_mut() {
        let (node, cursor) = *top;
        let Some(&next) = index.successors[node].get(cursor) else {
            colors[node] = Color::Black;
            stack.pop();
            continue;
        };
        top.1 += 1;

        match colors[next] {
            Color::White => {
                colors[next] = Color::Gray;
                stack.push((next, 0));
            }
            Color::Gray => {
                let pos = stack.iter().position(|&(n, _)| n == next)?;
                let mut path: Vec<usize> = stack[pos..].iter().map(|&(n, _)| n).collect();
                path.push(next);
                return Some(path);
            }
            Color::Black => {}
        }
    }

    None
}
