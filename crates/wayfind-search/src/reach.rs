//! Reachability: flood fill from a node and connectivity checks.

use std::collections::HashSet;

use crate::error::{Endpoint, SearchError};
use crate::traits::Graph;

/// Every node reachable from `start`, `start` included.
pub fn reachable<G: Graph + ?Sized>(
    graph: &G,
    start: &G::Node,
) -> Result<HashSet<G::Node>, SearchError<G::Node>> {
    if !graph.contains(start) {
        return Err(SearchError::NodeNotFound {
            endpoint: Endpoint::Start,
            node: start.clone(),
        });
    }

    let mut seen = HashSet::new();
    seen.insert(start.clone());
    let mut stack = vec![start.clone()];
    let mut nbuf = Vec::new();

    // Iterative DFS, marking on push.
    while let Some(cur) = stack.pop() {
        nbuf.clear();
        graph.neighbors(&cur, &mut nbuf)?;
        for n in nbuf.drain(..) {
            if seen.insert(n.clone()) {
                stack.push(n);
            }
        }
    }

    Ok(seen)
}

/// Whether every node can reach every other. The empty graph is connected.
pub fn is_connected<G: Graph + ?Sized>(graph: &G) -> Result<bool, SearchError<G::Node>> {
    let nodes = graph.nodes();
    let Some(first) = nodes.first() else {
        return Ok(true);
    };
    Ok(reachable(graph, first)?.len() == nodes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_core::{AdjacencyGraph, Cell, GridGraph};

    #[test]
    fn two_components() {
        let mut g = AdjacencyGraph::from_edges([(1i64, 2i64), (2, 3), (4, 5)]);
        g.add_node(6);
        assert_eq!(reachable(&g, &1).unwrap(), HashSet::from([1, 2, 3]));
        assert_eq!(reachable(&g, &5).unwrap(), HashSet::from([4, 5]));
        assert_eq!(reachable(&g, &6).unwrap(), HashSet::from([6]));
        assert!(!is_connected(&g).unwrap());
    }

    #[test]
    fn unknown_start() {
        let g = AdjacencyGraph::from_edges([(1i64, 2i64)]);
        assert!(matches!(
            reachable(&g, &9),
            Err(SearchError::NodeNotFound { node: 9, .. })
        ));
    }

    #[test]
    fn grid_split_by_wall_column() {
        let walls = (1..=3).map(|r| Cell::new(r, 2));
        let g = GridGraph::with_walls(3, 3, walls);
        assert_eq!(reachable(&g, &Cell::new(1, 1)).unwrap().len(), 3);
        assert!(!is_connected(&g).unwrap());
        assert!(is_connected(&GridGraph::new(4, 4)).unwrap());
        assert!(is_connected(&GridGraph::new(0, 0)).unwrap());
    }
}
