//! Seams between the search driver and its inputs: graphs and heuristics.

use std::fmt;
use std::hash::Hash;

use crate::error::GraphError;

/// Read-only graph interface consumed by the search driver.
///
/// The graph is undirected: if `b` is a neighbour of `a` then `a` must be a
/// neighbour of `b`. This is not checked; violating it is a caller error.
pub trait Graph {
    /// Node identifier. Only equality and hashing are needed by the driver.
    type Node: Clone + Eq + Hash + fmt::Debug;

    /// Whether `node` belongs to the graph.
    fn contains(&self, node: &Self::Node) -> bool;

    /// Every node of the graph.
    fn nodes(&self) -> Vec<Self::Node>;

    /// Append neighbours of `node` into `buf`. The caller clears `buf` before
    /// calling. Fails with [`GraphError::UnknownNode`] if `node` is not in the
    /// graph.
    fn neighbors(
        &self,
        node: &Self::Node,
        buf: &mut Vec<Self::Node>,
    ) -> Result<(), GraphError<Self::Node>>;

    /// Number of nodes.
    fn node_count(&self) -> usize {
        self.nodes().len()
    }
}

impl<G: Graph + ?Sized> Graph for &G {
    type Node = G::Node;

    fn contains(&self, node: &Self::Node) -> bool {
        (**self).contains(node)
    }

    fn nodes(&self) -> Vec<Self::Node> {
        (**self).nodes()
    }

    fn neighbors(
        &self,
        node: &Self::Node,
        buf: &mut Vec<Self::Node>,
    ) -> Result<(), GraphError<Self::Node>> {
        (**self).neighbors(node, buf)
    }

    fn node_count(&self) -> usize {
        (**self).node_count()
    }
}

/// Estimate of the remaining distance from a node to the goal.
///
/// Must be pure and non-negative. Admissibility is not required: greedy
/// best-first search only uses the estimate to order its frontier.
pub trait Heuristic<N: ?Sized> {
    /// Estimated cost of reaching `goal` from `node`.
    fn estimate(&self, node: &N, goal: &N) -> f64;
}

/// A [`Heuristic`] backed by a closure. Created by [`heuristic_fn`].
#[derive(Clone, Copy)]
pub struct FnHeuristic<F>(F);

/// Wrap a closure `(node, goal) -> f64` as a [`Heuristic`].
pub fn heuristic_fn<N, F>(f: F) -> FnHeuristic<F>
where
    F: Fn(&N, &N) -> f64,
{
    FnHeuristic(f)
}

impl<N, F> Heuristic<N> for FnHeuristic<F>
where
    F: Fn(&N, &N) -> f64,
{
    #[inline]
    fn estimate(&self, node: &N, goal: &N) -> f64 {
        (self.0)(node, goal)
    }
}

impl<F> fmt::Debug for FnHeuristic<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnHeuristic")
    }
}
