//! Undirected adjacency-list graph over arbitrary hashable nodes.

use std::collections::HashMap;
use std::hash::Hash;

/// An undirected graph stored as adjacency lists.
///
/// Node enumeration follows insertion order and each adjacency list follows
/// edge insertion order, so traversals over an `AdjacencyGraph` are fully
/// deterministic.
#[derive(Clone, Debug)]
pub struct AdjacencyGraph<N> {
    order: Vec<N>,
    adj: HashMap<N, Vec<N>>,
    edges: usize,
}

impl<N> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            adj: HashMap::new(),
            edges: 0,
        }
    }
}

impl<N: Clone + Eq + Hash> AdjacencyGraph<N> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an edge list. Endpoints are added as they appear.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut g = Self::new();
        for (a, b) in edges {
            g.add_edge(a, b);
        }
        g
    }

    /// Add an isolated node. Returns `false` if it was already present.
    pub fn add_node(&mut self, n: N) -> bool {
        if self.adj.contains_key(&n) {
            return false;
        }
        self.adj.insert(n.clone(), Vec::new());
        self.order.push(n);
        true
    }

    /// Add the undirected edge `a`-`b`, inserting missing endpoints.
    ///
    /// Self-loops and duplicate edges are ignored. Returns `true` if a new
    /// edge was created.
    pub fn add_edge(&mut self, a: N, b: N) -> bool {
        self.add_node(a.clone());
        self.add_node(b.clone());
        if a == b || self.has_edge(&a, &b) {
            return false;
        }
        if let Some(list) = self.adj.get_mut(&a) {
            list.push(b.clone());
        }
        if let Some(list) = self.adj.get_mut(&b) {
            list.push(a);
        }
        self.edges += 1;
        true
    }

    /// Whether the edge `a`-`b` exists.
    pub fn has_edge(&self, a: &N, b: &N) -> bool {
        self.adj.get(a).is_some_and(|list| list.contains(b))
    }

    /// Whether `n` is a node of the graph.
    #[inline]
    pub fn contains(&self, n: &N) -> bool {
        self.adj.contains_key(n)
    }

    /// All nodes, in insertion order.
    #[inline]
    pub fn nodes(&self) -> &[N] {
        &self.order
    }

    /// Neighbours of `n` in edge insertion order, or `None` if `n` is not a
    /// node of the graph.
    #[inline]
    pub fn neighbors(&self, n: &N) -> Option<&[N]> {
        self.adj.get(n).map(Vec::as_slice)
    }

    /// Number of neighbours of `n` (0 for unknown nodes).
    pub fn degree(&self, n: &N) -> usize {
        self.adj.get(n).map_or(0, Vec::len)
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges
    }
}
