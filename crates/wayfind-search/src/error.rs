//! Error types for graph queries and searches.
//!
//! Errors are generic over the node type so callers can match on the node
//! that caused them. Exhausting the frontier without reaching the goal is
//! not an error; it is reported as `found == false` in the trace.

use std::fmt;

use thiserror::Error;

/// Which endpoint of a search an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Goal => f.write_str("goal"),
        }
    }
}

/// Failure of a [`Graph`](crate::Graph) query.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphError<N> {
    /// Neighbours were requested for a node that is not in the graph.
    #[error("unknown node {0:?}")]
    UnknownNode(N),
}

/// Failure of a search or of path reconstruction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SearchError<N> {
    /// The start or goal node is not in the graph. Raised before any
    /// frontier work.
    #[error("{endpoint} node {node:?} is not in the graph")]
    NodeNotFound { endpoint: Endpoint, node: N },

    /// The graph rejected a neighbour query during expansion.
    #[error("unknown node {0:?} queried for neighbours")]
    UnknownNode(N),

    /// Greedy best-first search was requested without a heuristic.
    #[error("greedy best-first search requires a heuristic")]
    MissingHeuristic,

    /// The parent map does not form a tree rooted at the start node.
    #[error("parent map invariant violated at {node:?}: {detail}")]
    InvariantViolation { node: N, detail: &'static str },
}

impl<N> From<GraphError<N>> for SearchError<N> {
    fn from(err: GraphError<N>) -> Self {
        match err {
            GraphError::UnknownNode(n) => SearchError::UnknownNode(n),
        }
    }
}
