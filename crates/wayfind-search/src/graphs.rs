//! [`Graph`] implementations for the `wayfind-core` containers.

use std::fmt;
use std::hash::Hash;

use wayfind_core::{AdjacencyGraph, Cell, GridGraph};

use crate::error::GraphError;
use crate::traits::Graph;

impl<N: Clone + Eq + Hash + fmt::Debug> Graph for AdjacencyGraph<N> {
    type Node = N;

    fn contains(&self, node: &N) -> bool {
        AdjacencyGraph::contains(self, node)
    }

    fn nodes(&self) -> Vec<N> {
        AdjacencyGraph::nodes(self).to_vec()
    }

    fn neighbors(&self, node: &N, buf: &mut Vec<N>) -> Result<(), GraphError<N>> {
        let list = AdjacencyGraph::neighbors(self, node)
            .ok_or_else(|| GraphError::UnknownNode(node.clone()))?;
        buf.extend_from_slice(list);
        Ok(())
    }

    fn node_count(&self) -> usize {
        self.len()
    }
}

impl Graph for GridGraph {
    type Node = Cell;

    fn contains(&self, node: &Cell) -> bool {
        GridGraph::contains(self, *node)
    }

    fn nodes(&self) -> Vec<Cell> {
        self.cells().collect()
    }

    fn neighbors(&self, node: &Cell, buf: &mut Vec<Cell>) -> Result<(), GraphError<Cell>> {
        if !GridGraph::contains(self, *node) {
            return Err(GraphError::UnknownNode(*node));
        }
        buf.extend(GridGraph::neighbors(self, *node));
        Ok(())
    }

    fn node_count(&self) -> usize {
        self.len()
    }
}
