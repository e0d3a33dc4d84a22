//! Grid coordinates: [`Cell`].
//!
//! Cells are addressed by `(row, col)`. Rows grow downwards and columns grow
//! to the right, so "up" is `row - 1`.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A `(row, col)` grid coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours: up, down, left, right.
    ///
    /// Grid graphs enumerate neighbours in this order, which fixes the
    /// discovery order of every search strategy.
    #[inline]
    pub fn neighbors_4(self) -> [Cell; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_arithmetic() {
        let a = Cell::new(1, 2);
        let b = Cell::new(3, 4);
        assert_eq!(a + b, Cell::new(4, 6));
        assert_eq!(b - a, Cell::new(2, 2));
        assert_eq!(a.shift(-1, 3), Cell::new(0, 5));
    }

    #[test]
    fn cell_order_is_row_major() {
        let mut cells = vec![Cell::new(2, 1), Cell::new(1, 3), Cell::new(1, 1)];
        cells.sort();
        assert_eq!(
            cells,
            vec![Cell::new(1, 1), Cell::new(1, 3), Cell::new(2, 1)]
        );
    }

    #[test]
    fn neighbors_4_order() {
        let n = Cell::new(2, 2).neighbors_4();
        assert_eq!(
            n,
            [
                Cell::new(1, 2),
                Cell::new(3, 2),
                Cell::new(2, 1),
                Cell::new(2, 3)
            ]
        );
    }

    #[test]
    fn display_and_from_tuple() {
        let c: Cell = (3, 7).into();
        assert_eq!(c.to_string(), "(3, 7)");
    }
}
