//! Uninformed and informed graph search.
//!
//! This crate runs three frontier disciplines over any [`Graph`]:
//!
//! - **Breadth-first** over a FIFO queue ([`Strategy::BreadthFirst`])
//! - **Depth-first** over a LIFO stack ([`Strategy::DepthFirst`])
//! - **Greedy best-first** over a stable min-priority queue keyed by a
//!   [`Heuristic`] ([`Strategy::GreedyBestFirst`])
//!
//! [`search`] returns a [`SearchTrace`] (visited set, parent map, found
//! flag), [`reconstruct_path`] turns the parent map into a path, and
//! [`iterate_steps`] yields one [`StepSnapshot`] per expansion for
//! renderers that animate the search.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Graph`] | every strategy, reachability |
//! | [`Heuristic`] | greedy best-first |
//! | [`Frontier`] | pluggable frontier storage |

mod config;
mod distance;
mod driver;
mod error;
mod frontier;
mod graphs;
mod path;
mod reach;
mod steps;
mod strategy;
mod trace;
mod traits;

pub use config::{SearchConfig, search_with, steps_with};
pub use distance::{Euclidean, HeuristicKind, Manhattan, euclidean, manhattan};
pub use driver::{Searcher, search};
pub use error::{Endpoint, GraphError, SearchError};
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier, StrategyFrontier};
pub use path::reconstruct_path;
pub use reach::{is_connected, reachable};
pub use steps::{Steps, iterate_steps};
pub use strategy::{ParseStrategyError, Strategy};
pub use trace::{SearchTrace, Status, StepSnapshot};
pub use traits::{FnHeuristic, Graph, Heuristic, heuristic_fn};
