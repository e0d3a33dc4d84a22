//! Pull-based step trace for animated consumers.

use std::iter::FusedIterator;

use crate::driver::Searcher;
use crate::error::SearchError;
use crate::strategy::Strategy;
use crate::trace::{SearchTrace, Status, StepSnapshot};
use crate::traits::{Graph, Heuristic};

/// Lazy, one-shot sequence of [`StepSnapshot`]s for one search run.
///
/// Each call to `next` performs exactly one expansion. The sequence ends
/// after the goal snapshot or when the frontier runs empty; a graph error
/// is yielded once and also ends it. Dropping the iterator early cancels
/// the search.
pub struct Steps<'a, G: Graph + ?Sized> {
    searcher: Searcher<'a, G>,
    done: bool,
}

impl<'a, G: Graph + ?Sized> Steps<'a, G> {
    /// Wrap an existing searcher.
    pub fn new(searcher: Searcher<'a, G>) -> Self {
        Self {
            searcher,
            done: false,
        }
    }

    /// Current lifecycle state of the underlying run.
    #[inline]
    pub fn status(&self) -> Status {
        self.searcher.status()
    }

    /// Stop iterating and return the trace as it stands.
    pub fn into_trace(self) -> SearchTrace<G::Node> {
        self.searcher.into_trace()
    }
}

impl<G: Graph + ?Sized> Iterator for Steps<'_, G> {
    type Item = Result<StepSnapshot<G::Node>, SearchError<G::Node>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.searcher.step() {
            Ok(Some(snapshot)) => Some(Ok(snapshot)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<G: Graph + ?Sized> FusedIterator for Steps<'_, G> {}

/// Start a search that yields one snapshot per expansion.
///
/// Input validation happens here, before the first snapshot, with the same
/// errors as [`search`](crate::search).
pub fn iterate_steps<'a, G: Graph + ?Sized>(
    graph: &'a G,
    start: G::Node,
    goal: G::Node,
    strategy: Strategy,
    heuristic: Option<&'a dyn Heuristic<G::Node>>,
) -> Result<Steps<'a, G>, SearchError<G::Node>> {
    Ok(Steps::new(Searcher::new(
        graph, start, goal, strategy, heuristic,
    )?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Manhattan;
    use wayfind_core::{AdjacencyGraph, Cell, GridGraph};

    fn diamond() -> AdjacencyGraph<i64> {
        AdjacencyGraph::from_edges([(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)])
    }

    #[test]
    fn breadth_first_snapshots() {
        let g = diamond();
        let snaps: Vec<_> = iterate_steps(&g, 1, 4, Strategy::BreadthFirst, None)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        let currents: Vec<i64> = snaps.iter().map(|s| s.current).collect();
        assert_eq!(currents, vec![1, 2, 3, 4]);

        assert_eq!(snaps[0].frontier, vec![2, 3]);
        assert_eq!(snaps[1].frontier, vec![3, 4]);
        assert_eq!(snaps[2].frontier, vec![4]);
        assert_eq!(snaps[3].visited, vec![1, 2, 3, 4]);
        assert_eq!(snaps[3].step, 4);
        assert_eq!(snaps[3].status, Status::Found);
        assert!(snaps[..3].iter().all(|s| s.status == Status::Running));
    }

    #[test]
    fn start_is_goal_yields_one_snapshot() {
        let g = diamond();
        let mut steps = iterate_steps(&g, 2, 2, Strategy::DepthFirst, None).unwrap();
        let only = steps.next().unwrap().unwrap();
        assert_eq!(only.current, 2);
        assert!(only.frontier.is_empty());
        assert_eq!(only.visited, vec![2]);
        assert_eq!(only.status, Status::Found);
        assert!(steps.next().is_none());
        assert!(steps.next().is_none());
        assert!(steps.into_trace().found());
    }

    #[test]
    fn exhaustion_ends_sequence() {
        let mut g = diamond();
        g.add_node(42);
        let mut steps = iterate_steps(&g, 1, 42, Strategy::BreadthFirst, None).unwrap();
        let count = steps.by_ref().count();
        assert_eq!(count, 5);
        assert_eq!(steps.status(), Status::Exhausted);
        let trace = steps.into_trace();
        assert!(!trace.found());
        assert_eq!(trace.visited().len(), 5);
    }

    #[test]
    fn discarded_duplicates_do_not_yield() {
        let mut g = AdjacencyGraph::from_edges([(1i64, 2i64), (1, 3), (2, 3)]);
        g.add_node(9);
        let steps = iterate_steps(&g, 1, 9, Strategy::DepthFirst, None).unwrap();
        let currents: Vec<i64> = steps.map(|s| s.unwrap().current).collect();
        assert_eq!(currents, vec![1, 3, 2]);
    }

    #[test]
    fn greedy_frontier_in_pop_order() {
        let g = GridGraph::new(3, 3);
        let h: &dyn Heuristic<Cell> = &Manhattan;
        let mut steps = iterate_steps(
            &g,
            Cell::new(1, 1),
            Cell::new(3, 3),
            Strategy::GreedyBestFirst,
            Some(h),
        )
        .unwrap();
        let first = steps.next().unwrap().unwrap();
        assert_eq!(first.frontier, vec![Cell::new(2, 1), Cell::new(1, 2)]);
        let second = steps.next().unwrap().unwrap();
        assert_eq!(second.current, Cell::new(2, 1));
        // (3,1) and (2,2) tie at 2 and beat (1,2) at 3.
        assert_eq!(
            second.frontier,
            vec![Cell::new(3, 1), Cell::new(2, 2), Cell::new(1, 2)]
        );
    }

    #[test]
    fn dropping_early_cancels() {
        let g = GridGraph::new(10, 10);
        let (start, goal) = (Cell::new(1, 1), Cell::new(10, 10));
        let mut steps = iterate_steps(&g, start, goal, Strategy::BreadthFirst, None).unwrap();
        assert_eq!(steps.by_ref().take(3).count(), 3);
        assert_eq!(steps.status(), Status::Running);
        let partial = steps.into_trace();
        assert!(!partial.found());
        assert_eq!(partial.order().len(), 3);
    }

    #[test]
    fn validation_happens_up_front() {
        let g = diamond();
        assert!(matches!(
            iterate_steps(&g, 1, 77, Strategy::BreadthFirst, None),
            Err(SearchError::NodeNotFound { node: 77, .. })
        ));
        assert!(matches!(
            iterate_steps(&g, 1, 5, Strategy::GreedyBestFirst, None),
            Err(SearchError::MissingHeuristic)
        ));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use wayfind_core::{AdjacencyGraph, Node};

    #[test]
    fn snapshot_and_trace_serialize() {
        let (a, b) = (Node::Indexed(1), Node::Indexed(2));
        let g = AdjacencyGraph::from_edges([(a, b)]);
        let mut steps = iterate_steps(&g, a, b, Strategy::BreadthFirst, None).unwrap();
        let snap = steps.next().unwrap().unwrap();
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["current"], serde_json::json!({"Indexed": 1}));
        assert_eq!(json["status"], "running");

        steps.by_ref().for_each(drop);
        let trace = serde_json::to_value(steps.into_trace()).unwrap();
        assert_eq!(trace["found"], true);
        assert_eq!(trace["parent"].as_array().map(Vec::len), Some(2));
    }
}
