//! The two node representations a search can run over.

use std::fmt;

use crate::geom::Cell;

/// A graph node: either a plain integer identifier or a grid cell.
///
/// Heuristics dispatch on the variant, so a graph should hold a single
/// variant throughout. Mixing them is allowed but spatial heuristics treat
/// a mixed pair as infinitely far apart.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// Node of a general graph, identified by an integer.
    Indexed(i64),
    /// Node of a grid graph.
    Grid(Cell),
}

impl Node {
    /// Shorthand for `Node::Grid(Cell::new(row, col))`.
    #[inline]
    pub const fn grid(row: i32, col: i32) -> Self {
        Node::Grid(Cell::new(row, col))
    }

    /// The integer identifier, if this is an `Indexed` node.
    #[inline]
    pub fn as_index(&self) -> Option<i64> {
        match *self {
            Node::Indexed(i) => Some(i),
            Node::Grid(_) => None,
        }
    }

    /// The cell, if this is a `Grid` node.
    #[inline]
    pub fn as_cell(&self) -> Option<Cell> {
        match *self {
            Node::Grid(c) => Some(c),
            Node::Indexed(_) => None,
        }
    }
}

impl From<i64> for Node {
    #[inline]
    fn from(i: i64) -> Self {
        Node::Indexed(i)
    }
}

impl From<Cell> for Node {
    #[inline]
    fn from(c: Cell) -> Self {
        Node::Grid(c)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Indexed(i) => write!(f, "{i}"),
            Node::Grid(c) => c.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let a = Node::from(7);
        let b = Node::grid(1, 2);
        assert_eq!(a.as_index(), Some(7));
        assert_eq!(a.as_cell(), None);
        assert_eq!(b.as_cell(), Some(Cell::new(1, 2)));
        assert_eq!(b.as_index(), None);
    }

    #[test]
    fn display() {
        assert_eq!(Node::Indexed(-3).to_string(), "-3");
        assert_eq!(Node::grid(4, 5).to_string(), "(4, 5)");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn node_round_trip() {
        for node in [Node::Indexed(12), Node::grid(3, 1)] {
            let json = serde_json::to_string(&node).unwrap();
            let back: Node = serde_json::from_str(&json).unwrap();
            assert_eq!(node, back);
        }
    }
}
