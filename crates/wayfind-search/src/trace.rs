//! Search results: [`SearchTrace`], [`StepSnapshot`] and [`Status`].

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::error::SearchError;
use crate::path::reconstruct_path;

/// Lifecycle of one search run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Status {
    /// Created, nothing expanded yet.
    Ready,
    /// Frontier seeded, goal not reached.
    Running,
    /// The goal was expanded.
    Found,
    /// The frontier ran empty before the goal was reached.
    Exhausted,
    /// A graph query failed mid-search; the run cannot continue.
    Failed,
}

impl Status {
    /// Whether no further steps will be taken.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Found | Status::Exhausted | Status::Failed)
    }
}

/// Complete result of one search call.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "N: serde::Serialize + Eq + Hash"))
)]
pub struct SearchTrace<N> {
    pub(crate) start: N,
    pub(crate) goal: N,
    pub(crate) visited: HashSet<N>,
    pub(crate) order: Vec<N>,
    #[cfg_attr(feature = "serde", serde(serialize_with = "ser::parent_pairs"))]
    pub(crate) parent: HashMap<N, Option<N>>,
    pub(crate) found: bool,
}

impl<N: Clone + Eq + Hash> SearchTrace<N> {
    /// Start node of the search.
    #[inline]
    pub fn start(&self) -> &N {
        &self.start
    }

    /// Goal node of the search.
    #[inline]
    pub fn goal(&self) -> &N {
        &self.goal
    }

    /// Expanded nodes.
    #[inline]
    pub fn visited(&self) -> &HashSet<N> {
        &self.visited
    }

    /// Expanded nodes in expansion order.
    #[inline]
    pub fn order(&self) -> &[N] {
        &self.order
    }

    /// First-discoverer map. The start node maps to `None`.
    #[inline]
    pub fn parent(&self) -> &HashMap<N, Option<N>> {
        &self.parent
    }

    /// Whether the goal was reached.
    #[inline]
    pub fn found(&self) -> bool {
        self.found
    }

    /// Path from start to the recorded goal, or empty if the goal was never
    /// discovered.
    pub fn path(&self) -> Result<Vec<N>, SearchError<N>> {
        reconstruct_path(&self.parent, &self.goal)
    }

    /// Split into `(visited, parent, found)`.
    pub fn into_parts(self) -> (HashSet<N>, HashMap<N, Option<N>>, bool) {
        (self.visited, self.parent, self.found)
    }
}

impl<N: Eq + Hash> PartialEq for SearchTrace<N> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.goal == other.goal
            && self.found == other.found
            && self.order == other.order
            && self.visited == other.visited
            && self.parent == other.parent
    }
}

impl<N: Eq + Hash> Eq for SearchTrace<N> {}

/// State of the driver after one expansion, for renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StepSnapshot<N> {
    /// 1-based count of expansions so far.
    pub step: usize,
    /// The node just expanded.
    pub current: N,
    /// Pending entries, next-to-pop first.
    pub frontier: Vec<N>,
    /// Expanded nodes in expansion order, `current` last.
    pub visited: Vec<N>,
    /// Status after this step.
    pub status: Status,
}

#[cfg(feature = "serde")]
mod ser {
    use std::collections::HashMap;

    use serde::Serializer;

    // JSON object keys must be strings, so the map goes out as pairs.
    pub(super) fn parent_pairs<N, S>(
        map: &HashMap<N, Option<N>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        N: serde::Serialize,
        S: Serializer,
    {
        serializer.collect_seq(map.iter())
    }
}
