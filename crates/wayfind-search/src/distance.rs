//! Distance functions and the heuristics built on them.

use wayfind_core::{Cell, Node};

use crate::traits::Heuristic;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i64 {
    let dr = i64::from(a.row) - i64::from(b.row);
    let dc = i64::from(a.col) - i64::from(b.col);
    dr.abs() + dc.abs()
}

/// Euclidean (L2) distance between two cells.
#[inline]
pub fn euclidean(a: Cell, b: Cell) -> f64 {
    let dr = f64::from(a.row) - f64::from(b.row);
    let dc = f64::from(a.col) - f64::from(b.col);
    dr.hypot(dc)
}

/// Manhattan heuristic.
///
/// On integer identifiers this degenerates to `|a - b|`, which is only
/// meaningful when the numbering carries some notion of locality.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

/// Euclidean heuristic. On integer identifiers it is the 1-D distance
/// `|a - b|`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Heuristic<Cell> for Manhattan {
    #[inline]
    fn estimate(&self, node: &Cell, goal: &Cell) -> f64 {
        manhattan(*node, *goal) as f64
    }
}

impl Heuristic<i64> for Manhattan {
    #[inline]
    fn estimate(&self, node: &i64, goal: &i64) -> f64 {
        node.abs_diff(*goal) as f64
    }
}

// Mixed Indexed/Grid pairs have no spatial relation and sort last.
impl Heuristic<Node> for Manhattan {
    fn estimate(&self, node: &Node, goal: &Node) -> f64 {
        match (node, goal) {
            (Node::Grid(a), Node::Grid(b)) => Heuristic::<Cell>::estimate(self, a, b),
            (Node::Indexed(a), Node::Indexed(b)) => Heuristic::<i64>::estimate(self, a, b),
            _ => f64::INFINITY,
        }
    }
}

impl Heuristic<Cell> for Euclidean {
    #[inline]
    fn estimate(&self, node: &Cell, goal: &Cell) -> f64 {
        euclidean(*node, *goal)
    }
}

impl Heuristic<i64> for Euclidean {
    #[inline]
    fn estimate(&self, node: &i64, goal: &i64) -> f64 {
        node.abs_diff(*goal) as f64
    }
}

impl Heuristic<Node> for Euclidean {
    fn estimate(&self, node: &Node, goal: &Node) -> f64 {
        match (node, goal) {
            (Node::Grid(a), Node::Grid(b)) => Heuristic::<Cell>::estimate(self, a, b),
            (Node::Indexed(a), Node::Indexed(b)) => Heuristic::<i64>::estimate(self, a, b),
            _ => f64::INFINITY,
        }
    }
}

/// A heuristic chosen by configuration rather than by type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HeuristicKind {
    #[default]
    Manhattan,
    Euclidean,
}

macro_rules! impl_heuristic_kind {
    ($($t:ty),*) => {$(
        impl Heuristic<$t> for HeuristicKind {
            #[inline]
            fn estimate(&self, node: &$t, goal: &$t) -> f64 {
                match self {
                    HeuristicKind::Manhattan => Heuristic::<$t>::estimate(&Manhattan, node, goal),
                    HeuristicKind::Euclidean => Heuristic::<$t>::estimate(&Euclidean, node, goal),
                }
            }
        }
    )*};
}

impl_heuristic_kind!(Cell, i64, Node);
