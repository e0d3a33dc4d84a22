//! The search driver: one run of BFS, DFS or greedy best-first search.

use std::collections::{HashMap, HashSet};

use crate::error::{Endpoint, SearchError};
use crate::frontier::{Frontier, StrategyFrontier};
use crate::strategy::Strategy;
use crate::trace::{SearchTrace, Status, StepSnapshot};
use crate::traits::{Graph, Heuristic};

/// State of a single search run.
///
/// A `Searcher` owns its frontier, visited set and parent map; nothing is
/// shared between runs, so independent searches over the same graph may run
/// concurrently. Drive it with [`step`](Self::step) for one expansion at a
/// time or [`run`](Self::run) to completion.
pub struct Searcher<'a, G: Graph + ?Sized> {
    graph: &'a G,
    heuristic: Option<&'a dyn Heuristic<G::Node>>,
    strategy: Strategy,
    start: G::Node,
    goal: G::Node,
    frontier: StrategyFrontier<G::Node>,
    visited: HashSet<G::Node>,
    order: Vec<G::Node>,
    parent: HashMap<G::Node, Option<G::Node>>,
    status: Status,
    // scratch buffer for neighbour queries
    nbuf: Vec<G::Node>,
}

impl<'a, G: Graph + ?Sized> Searcher<'a, G> {
    /// Validate the inputs and create a searcher in the `Ready` state.
    ///
    /// Fails with [`SearchError::NodeNotFound`] if `start` or `goal` is not
    /// in the graph and with [`SearchError::MissingHeuristic`] if greedy
    /// search is requested without a heuristic.
    pub fn new(
        graph: &'a G,
        start: G::Node,
        goal: G::Node,
        strategy: Strategy,
        heuristic: Option<&'a dyn Heuristic<G::Node>>,
    ) -> Result<Self, SearchError<G::Node>> {
        if !graph.contains(&start) {
            return Err(SearchError::NodeNotFound {
                endpoint: Endpoint::Start,
                node: start,
            });
        }
        if !graph.contains(&goal) {
            return Err(SearchError::NodeNotFound {
                endpoint: Endpoint::Goal,
                node: goal,
            });
        }
        if strategy.is_informed() && heuristic.is_none() {
            return Err(SearchError::MissingHeuristic);
        }
        Ok(Self {
            graph,
            heuristic,
            strategy,
            start,
            goal,
            frontier: StrategyFrontier::new(strategy),
            visited: HashSet::new(),
            order: Vec::new(),
            parent: HashMap::new(),
            status: Status::Ready,
            nbuf: Vec::new(),
        })
    }

    /// Current lifecycle state.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Strategy of this run.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Pending frontier.
    #[inline]
    pub fn frontier(&self) -> &StrategyFrontier<G::Node> {
        &self.frontier
    }

    /// Expanded nodes.
    #[inline]
    pub fn visited(&self) -> &HashSet<G::Node> {
        &self.visited
    }

    /// First-discoverer map built so far.
    #[inline]
    pub fn parent(&self) -> &HashMap<G::Node, Option<G::Node>> {
        &self.parent
    }

    /// Advance by one expansion and return a snapshot of the new state.
    ///
    /// Returns `Ok(None)` once the run is over. Popped entries that were
    /// already visited are discarded without producing a snapshot.
    pub fn step(&mut self) -> Result<Option<StepSnapshot<G::Node>>, SearchError<G::Node>> {
        let Some(current) = self.advance()? else {
            return Ok(None);
        };
        Ok(Some(StepSnapshot {
            step: self.order.len(),
            current,
            frontier: self.frontier.snapshot(),
            visited: self.order.clone(),
            status: self.status,
        }))
    }

    /// Drive the search to completion and return its trace.
    pub fn run(mut self) -> Result<SearchTrace<G::Node>, SearchError<G::Node>> {
        while self.advance()?.is_some() {}
        Ok(self.into_trace())
    }

    /// Consume the searcher and return the trace as it stands.
    ///
    /// `found` is `true` only if the goal has been expanded.
    pub fn into_trace(self) -> SearchTrace<G::Node> {
        SearchTrace {
            start: self.start,
            goal: self.goal,
            visited: self.visited,
            order: self.order,
            parent: self.parent,
            found: self.status == Status::Found,
        }
    }

    /// One iteration of the main loop. Returns the expanded node, or `None`
    /// when the run has reached a terminal state.
    fn advance(&mut self) -> Result<Option<G::Node>, SearchError<G::Node>> {
        match self.status {
            Status::Ready => {
                self.status = Status::Running;
                log::debug!(
                    "{} search from {:?} to {:?}",
                    self.strategy,
                    self.start,
                    self.goal
                );
                self.parent.insert(self.start.clone(), None);
                if self.start == self.goal {
                    let start = self.start.clone();
                    self.visit(start.clone());
                    self.status = Status::Found;
                    log::debug!("start is goal, nothing to expand");
                    return Ok(Some(start));
                }
                let priority = self.priority(&self.start);
                self.frontier.push(self.start.clone(), priority);
            }
            Status::Running => {}
            Status::Found | Status::Exhausted | Status::Failed => return Ok(None),
        }

        loop {
            let Some(current) = self.frontier.pop() else {
                self.status = Status::Exhausted;
                log::debug!(
                    "frontier exhausted after {} expansions, goal {:?} unreachable",
                    self.order.len(),
                    self.goal
                );
                return Ok(None);
            };

            if self.visited.contains(&current) {
                continue;
            }
            self.visit(current.clone());

            if current == self.goal {
                self.status = Status::Found;
                log::debug!(
                    "goal {:?} found after {} expansions",
                    self.goal,
                    self.order.len()
                );
                return Ok(Some(current));
            }

            log::trace!("expanding {current:?}");
            if let Err(err) = self.expand(&current) {
                self.status = Status::Failed;
                return Err(err);
            }
            return Ok(Some(current));
        }
    }

    fn visit(&mut self, node: G::Node) {
        self.visited.insert(node.clone());
        self.order.push(node);
    }

    fn expand(&mut self, current: &G::Node) -> Result<(), SearchError<G::Node>> {
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        let res = self.graph.neighbors(current, &mut nbuf);

        if res.is_ok() {
            for n in nbuf.drain(..) {
                if self.visited.contains(&n) {
                    continue;
                }
                if self.frontier.dedupes() && self.frontier.contains(&n) {
                    continue;
                }
                // First discoverer wins.
                self.parent
                    .entry(n.clone())
                    .or_insert_with(|| Some(current.clone()));
                let priority = self.priority(&n);
                self.frontier.push(n, priority);
            }
        }

        self.nbuf = nbuf;
        res.map_err(SearchError::from)
    }

    fn priority(&self, node: &G::Node) -> f64 {
        match self.heuristic {
            Some(h) if self.strategy.is_informed() => h.estimate(node, &self.goal),
            _ => 0.0,
        }
    }
}

/// Run a complete search from `start` to `goal`.
///
/// `heuristic` is required for [`Strategy::GreedyBestFirst`] and ignored by
/// the uninformed strategies. Reaching an empty frontier is reported as
/// `found() == false`, not as an error.
pub fn search<G: Graph + ?Sized>(
    graph: &G,
    start: G::Node,
    goal: G::Node,
    strategy: Strategy,
    heuristic: Option<&dyn Heuristic<G::Node>>,
) -> Result<SearchTrace<G::Node>, SearchError<G::Node>> {
    Searcher::new(graph, start, goal, strategy, heuristic)?.run()
}
