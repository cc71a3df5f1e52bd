//! Cell coordinates and cardinal moves.

use std::fmt;

/// A cell position: `(row, col)` with the origin at the top-left.
///
/// Ordering is row-major, so sets of coordinates iterate top-to-bottom,
/// left-to-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A single cardinal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Neighbor expansion order. Tie-breaking between equal-length paths
    /// depends on it, so it must not change.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Lowercase label used in console and JSON output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Parse a label produced by [`Action::label`].
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.label() == label)
    }

    /// Step `from` one cell in this direction.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    /// The upper bounds are the grid's business, not the move's.
    #[must_use]
    pub fn apply(self, from: Coord) -> Option<Coord> {
        match self {
            Self::Up => from.row.checked_sub(1).map(|row| Coord::new(row, from.col)),
            Self::Down => from.row.checked_add(1).map(|row| Coord::new(row, from.col)),
            Self::Left => from.col.checked_sub(1).map(|col| Coord::new(from.row, col)),
            Self::Right => from.col.checked_add(1).map(|col| Coord::new(from.row, col)),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
