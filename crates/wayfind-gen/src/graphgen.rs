//! Random graph and grid generation.
//!
//! Provides two graph models over [`Node::Indexed`] ids `0..n`:
//! - **G(n, p)**: every pair of nodes is joined with probability `p`.
//! - **Small world**: a ring lattice whose edges are rewired with
//!   probability `beta`, retried until the result is connected.
//!
//! Grids get walls scattered at random; [`GraphGen::distinct_pair`] picks
//! a start and a goal.

use std::collections::BTreeSet;

use rand::Rng;
use thiserror::Error;
use wayfind_core::{AdjacencyGraph, Cell, GridGraph, Node};
use wayfind_search::{SearchError, is_connected};

/// Connectivity attempts made by [`GraphGen::small_world`] before giving up.
pub const SMALL_WORLD_TRIES: usize = 100;

/// Failure of a generator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenError {
    #[error("invalid {name}: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },

    #[error("no connected small-world graph after {tries} attempts")]
    NotConnected { tries: usize },

    #[error(transparent)]
    Search(#[from] SearchError<Node>),
}

/// Random input generator driven by `rng`.
pub struct GraphGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> GraphGen<R> {
    /// Create a generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Erdős–Rényi graph: nodes `0..n`, each pair joined with probability
    /// `p` (clamped to `0.0..=1.0`).
    pub fn gnp(&mut self, n: usize, p: f64) -> AdjacencyGraph<Node> {
        let p = p.clamp(0.0, 1.0);
        let mut g = AdjacencyGraph::new();
        for i in 0..n {
            g.add_node(indexed(i));
        }
        for a in 0..n {
            for b in a + 1..n {
                if self.rng.random::<f64>() < p {
                    g.add_edge(indexed(a), indexed(b));
                }
            }
        }
        g
    }

    /// Connected small-world graph on `n` nodes.
    ///
    /// Each node starts joined to its `k / 2` nearest neighbours on either
    /// side of a ring; every lattice edge is then rewired to a random
    /// endpoint with probability `beta`. Up to [`SMALL_WORLD_TRIES`] graphs
    /// are drawn until one is connected. `k` must be smaller than `n`.
    pub fn small_world(
        &mut self,
        n: usize,
        k: usize,
        beta: f64,
    ) -> Result<AdjacencyGraph<Node>, GenError> {
        if k >= n {
            return Err(GenError::InvalidParameter {
                name: "k",
                reason: "must be smaller than the node count",
            });
        }
        for attempt in 1..=SMALL_WORLD_TRIES {
            let g = self.rewired_ring(n, k, beta.clamp(0.0, 1.0));
            if is_connected(&g)? {
                log::debug!("small-world graph connected after {attempt} attempt(s)");
                return Ok(g);
            }
        }
        Err(GenError::NotConnected {
            tries: SMALL_WORLD_TRIES,
        })
    }

    /// G(n, p) graph, replaced by a [`small_world`](Self::small_world)
    /// graph with parameters `k` and `beta` if it comes out disconnected.
    pub fn connected_gnp(
        &mut self,
        n: usize,
        p: f64,
        k: usize,
        beta: f64,
    ) -> Result<AdjacencyGraph<Node>, GenError> {
        let g = self.gnp(n, p);
        if is_connected(&g)? {
            return Ok(g);
        }
        log::debug!(
            "G({n}, {p}) disconnected with {} edges, falling back to small world",
            g.edge_count()
        );
        self.small_world(n, k, beta)
    }

    /// Turn each open cell of `grid` not listed in `keep` into a wall with
    /// probability `pct`. Returns the number of walls added.
    pub fn scatter_walls(&mut self, grid: &mut GridGraph, pct: f64, keep: &[Cell]) -> usize {
        let pct = pct.clamp(0.0, 1.0);
        let open: Vec<Cell> = grid.cells().filter(|c| !keep.contains(c)).collect();
        let mut added = 0;
        for c in open {
            if self.rng.random::<f64>() < pct && grid.set_wall(c, true) {
                added += 1;
            }
        }
        log::trace!(
            "scattered {added} walls over {}x{} grid",
            grid.rows(),
            grid.cols()
        );
        added
    }

    /// A uniformly chosen open cell, or `None` if the grid has none.
    pub fn random_cell(&mut self, grid: &GridGraph) -> Option<Cell> {
        let len = grid.len();
        if len == 0 {
            return None;
        }
        let i = self.rng.random_range(0..len);
        grid.cells().nth(i)
    }

    /// Two entries of `nodes` at distinct positions, for use as start and
    /// goal. `None` if there are fewer than two.
    pub fn distinct_pair<N: Clone>(&mut self, nodes: &[N]) -> Option<(N, N)> {
        if nodes.len() < 2 {
            return None;
        }
        let start = self.rng.random_range(0..nodes.len());
        let mut goal = self.rng.random_range(0..nodes.len());
        while goal == start {
            goal = self.rng.random_range(0..nodes.len());
        }
        Some((nodes[start].clone(), nodes[goal].clone()))
    }

    // ------------------------------------------------------------------
    // Internal helpers
    // ------------------------------------------------------------------

    fn rewired_ring(&mut self, n: usize, k: usize, beta: f64) -> AdjacencyGraph<Node> {
        let mut adj: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];
        for j in 1..=k / 2 {
            for u in 0..n {
                let v = (u + j) % n;
                adj[u].insert(v);
                adj[v].insert(u);
            }
        }

        for j in 1..=k / 2 {
            for u in 0..n {
                if self.rng.random::<f64>() >= beta {
                    continue;
                }
                // u is already joined to everything else.
                if adj[u].len() >= n - 1 {
                    continue;
                }
                let v = (u + j) % n;
                let w = loop {
                    let w = self.rng.random_range(0..n);
                    if w != u && !adj[u].contains(&w) {
                        break w;
                    }
                };
                adj[u].remove(&v);
                adj[v].remove(&u);
                adj[u].insert(w);
                adj[w].insert(u);
            }
        }

        let mut g = AdjacencyGraph::new();
        for u in 0..n {
            g.add_node(indexed(u));
        }
        for (u, targets) in adj.iter().enumerate() {
            for &v in targets.range(u + 1..) {
                g.add_edge(indexed(u), indexed(v));
            }
        }
        g
    }
}

#[inline]
fn indexed(i: usize) -> Node {
    Node::Indexed(i as i64)
}
