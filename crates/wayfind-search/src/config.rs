//! Strategy and heuristic selection as plain data.

use crate::distance::HeuristicKind;
use crate::driver::search;
use crate::error::SearchError;
use crate::steps::{Steps, iterate_steps};
use crate::strategy::Strategy;
use crate::trace::SearchTrace;
use crate::traits::{Graph, Heuristic};

/// Strategy and heuristic chosen by configuration.
///
/// The heuristic is only consulted by [`Strategy::GreedyBestFirst`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub strategy: Strategy,
    pub heuristic: HeuristicKind,
}

impl SearchConfig {
    /// Create a configuration.
    pub fn new(strategy: Strategy, heuristic: HeuristicKind) -> Self {
        Self {
            strategy,
            heuristic,
        }
    }

    /// Replace the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Replace the heuristic.
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }
}

/// [`search`] with strategy and heuristic taken from `config`.
pub fn search_with<G>(
    graph: &G,
    start: G::Node,
    goal: G::Node,
    config: &SearchConfig,
) -> Result<SearchTrace<G::Node>, SearchError<G::Node>>
where
    G: Graph + ?Sized,
    HeuristicKind: Heuristic<G::Node>,
{
    let heuristic: &dyn Heuristic<G::Node> = &config.heuristic;
    search(graph, start, goal, config.strategy, Some(heuristic))
}

/// [`iterate_steps`] with strategy and heuristic taken from `config`.
pub fn steps_with<'a, G>(
    graph: &'a G,
    start: G::Node,
    goal: G::Node,
    config: &'a SearchConfig,
) -> Result<Steps<'a, G>, SearchError<G::Node>>
where
    G: Graph + ?Sized,
    HeuristicKind: Heuristic<G::Node>,
{
    let heuristic: &'a dyn Heuristic<G::Node> = &config.heuristic;
    iterate_steps(graph, start, goal, config.strategy, Some(heuristic))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_core::{Cell, GridGraph};

    #[test]
    fn defaults() {
        let c = SearchConfig::default();
        assert_eq!(c.strategy, Strategy::BreadthFirst);
        assert_eq!(c.heuristic, HeuristicKind::Manhattan);
        let c = c
            .with_strategy(Strategy::GreedyBestFirst)
            .with_heuristic(HeuristicKind::Euclidean);
        assert_eq!(
            c,
            SearchConfig::new(Strategy::GreedyBestFirst, HeuristicKind::Euclidean)
        );
    }

    #[test]
    fn search_with_each_strategy() {
        let g = GridGraph::new(4, 4);
        for strategy in Strategy::ALL {
            let config = SearchConfig::default().with_strategy(strategy);
            let trace = search_with(&g, Cell::new(1, 1), Cell::new(4, 4), &config).unwrap();
            assert!(trace.found(), "{strategy} did not reach the goal");
            let path = trace.path().unwrap();
            assert_eq!(path.first(), Some(&Cell::new(1, 1)));
            assert_eq!(path.last(), Some(&Cell::new(4, 4)));
        }
    }

    #[test]
    fn steps_with_ends_at_goal() {
        let g = GridGraph::new(3, 3);
        let config = SearchConfig::new(Strategy::GreedyBestFirst, HeuristicKind::Euclidean);
        let last = steps_with(&g, Cell::new(1, 1), Cell::new(3, 3), &config)
            .unwrap()
            .map(Result::unwrap)
            .last()
            .unwrap();
        assert_eq!(last.current, Cell::new(3, 3));
    }
}
