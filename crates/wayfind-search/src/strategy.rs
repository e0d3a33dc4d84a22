//! The three frontier disciplines.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Frontier discipline used by a search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// FIFO queue.
    #[default]
    BreadthFirst,
    /// LIFO stack.
    DepthFirst,
    /// Min-priority queue on the heuristic estimate, ties broken by
    /// insertion order.
    GreedyBestFirst,
}

impl Strategy {
    /// All strategies, in declaration order.
    pub const ALL: [Strategy; 3] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::GreedyBestFirst,
    ];

    /// Whether the strategy orders its frontier by a heuristic.
    #[inline]
    pub fn is_informed(self) -> bool {
        matches!(self, Strategy::GreedyBestFirst)
    }

    /// Short name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirst => "dfs",
            Strategy::GreedyBestFirst => "greedy",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown search strategy {0:?} (expected bfs, dfs or greedy)")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" | "breadth_first" => Ok(Strategy::BreadthFirst),
            "dfs" | "depth-first" | "depth_first" => Ok(Strategy::DepthFirst),
            "greedy" | "best-first" | "greedy-best-first" | "greedy_best_first" => {
                Ok(Strategy::GreedyBestFirst)
            }
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("bfs".parse(), Ok(Strategy::BreadthFirst));
        assert_eq!("Depth-First".parse(), Ok(Strategy::DepthFirst));
        assert_eq!(" greedy ".parse(), Ok(Strategy::GreedyBestFirst));
        assert_eq!(
            "astar".parse::<Strategy>(),
            Err(ParseStrategyError("astar".into()))
        );
    }

    #[test]
    fn display_round_trips() {
        for s in Strategy::ALL {
            assert_eq!(s.to_string().parse(), Ok(s));
        }
        assert!(Strategy::GreedyBestFirst.is_informed());
        assert!(!Strategy::DepthFirst.is_informed());
    }
}
