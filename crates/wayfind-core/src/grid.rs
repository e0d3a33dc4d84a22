//! Rectangular grid graphs with 4-neighbour adjacency.

use std::collections::HashSet;

use crate::adjacency::AdjacencyGraph;
use crate::geom::Cell;

/// A `rows × cols` grid whose cells are addressed 1-based, from `(1, 1)` to
/// `(rows, cols)`.
///
/// Each open cell is connected to its open north, south, west and east
/// neighbours. Wall cells are not part of the graph at all.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawGrid"))]
pub struct GridGraph {
    rows: i32,
    cols: i32,
    walls: HashSet<Cell>,
}

/// Unchecked wire form of [`GridGraph`], normalised on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    rows: i32,
    cols: i32,
    #[serde(default)]
    walls: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl From<RawGrid> for GridGraph {
    fn from(raw: RawGrid) -> Self {
        Self::with_walls(raw.rows, raw.cols, raw.walls)
    }
}

impl GridGraph {
    /// Create a grid without walls. Negative sizes are clamped to zero.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: rows.max(0),
            cols: cols.max(0),
            walls: HashSet::new(),
        }
    }

    /// Create a grid with the given wall cells. Walls outside the grid are
    /// ignored.
    pub fn with_walls(rows: i32, cols: i32, walls: impl IntoIterator<Item = Cell>) -> Self {
        let mut g = Self::new(rows, cols);
        for w in walls {
            g.set_wall(w, true);
        }
        g
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Whether `c` lies within the grid bounds, wall or not.
    #[inline]
    pub fn in_bounds(&self, c: Cell) -> bool {
        c.row >= 1 && c.row <= self.rows && c.col >= 1 && c.col <= self.cols
    }

    /// Mark or clear a wall. Returns `false` if `c` is out of bounds.
    pub fn set_wall(&mut self, c: Cell, wall: bool) -> bool {
        if !self.in_bounds(c) {
            return false;
        }
        if wall {
            self.walls.insert(c);
        } else {
            self.walls.remove(&c);
        }
        true
    }

    /// Whether `c` is a wall.
    #[inline]
    pub fn is_wall(&self, c: Cell) -> bool {
        self.walls.contains(&c)
    }

    /// Number of wall cells.
    #[inline]
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Whether `c` is an open cell, i.e. a node of the graph.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.in_bounds(c) && !self.is_wall(c)
    }

    /// Open cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (1..=self.rows)
            .flat_map(move |row| (1..=self.cols).map(move |col| Cell::new(row, col)))
            .filter(move |&c| !self.is_wall(c))
    }

    /// Open neighbours of `c` in north, south, west, east order.
    ///
    /// The result is empty when `c` itself is not an open cell.
    pub fn neighbors(&self, c: Cell) -> impl Iterator<Item = Cell> + '_ {
        let own = self.contains(c);
        // Bounds are checked before stepping so edge cells never overflow.
        let candidates = [
            (c.row > 1).then(|| Cell::new(c.row - 1, c.col)),
            (c.row < self.rows).then(|| Cell::new(c.row + 1, c.col)),
            (c.col > 1).then(|| Cell::new(c.row, c.col - 1)),
            (c.col < self.cols).then(|| Cell::new(c.row, c.col + 1)),
        ];
        candidates
            .into_iter()
            .flatten()
            .filter(move |&n| own && !self.is_wall(n))
    }

    /// Number of open cells.
    pub fn len(&self) -> usize {
        let area = (self.rows.max(0) as usize) * (self.cols.max(0) as usize);
        area.saturating_sub(self.walls.len())
    }

    /// Whether the grid has no open cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert into an explicit adjacency-list graph over the same cells.
    pub fn to_adjacency(&self) -> AdjacencyGraph<Cell> {
        let mut g = AdjacencyGraph::new();
        for c in self.cells() {
            g.add_node(c);
        }
        for c in self.cells() {
            for n in self.neighbors(c) {
                g.add_edge(c, n);
            }
        }
        g
    }
}
