//! The parsed maze: an immutable rectangular grid with one start and one goal.

use crate::proof::hash::{canonical_hash, ContentHash, DOMAIN_GRID};

use super::coord::{Action, Coord};
use super::glyph::{CellKind, GlyphSet, ParseOptions, RowPolicy};

/// Typed failure for maze text that does not describe a valid grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("maze has no rows")]
    Empty,
    #[error("maze has no start cell")]
    MissingStart,
    #[error("maze has no goal cell")]
    MissingGoal,
    #[error("maze has more than one start cell: {first} and {second}")]
    DuplicateStart { first: Coord, second: Coord },
    #[error("maze has more than one goal cell: {first} and {second}")]
    DuplicateGoal { first: Coord, second: Coord },
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A move sequence that cannot be replayed on the grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalkError {
    #[error("move {step} ({action}) from {from} leaves the grid")]
    OutOfBounds {
        step: usize,
        from: Coord,
        action: Action,
    },
    #[error("move {step} ({action}) from {from} runs into a wall")]
    IntoWall {
        step: usize,
        from: Coord,
        action: Action,
    },
}

/// Immutable 2-D cell grid.
///
/// Invariants (established by [`GridModel::parse`]):
/// - every row has exactly `width` cells, and there is at least one row
/// - exactly one [`CellKind::Start`] at `start` and one [`CellKind::Goal`] at `goal`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    rows: Vec<Vec<CellKind>>,
    width: usize,
    start: Coord,
    goal: Coord,
}

impl GridModel {
    /// Parse maze text, one row per line.
    ///
    /// A trailing `\r` on each line is dropped, and a final empty line
    /// (text ending in a newline) is ignored. Spaces are kept: they are
    /// open cells.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the text has no rows, ragged rows under
    /// [`RowPolicy::Strict`], or not exactly one start and one goal.
    pub fn parse(text: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        let mut lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        if lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        if lines.iter().all(|line| line.is_empty()) {
            return Err(ParseError::Empty);
        }

        let mut rows: Vec<Vec<CellKind>> = lines
            .iter()
            .map(|line| line.chars().map(|ch| options.glyphs.classify(ch)).collect())
            .collect();

        let width = match options.rows {
            RowPolicy::Strict => {
                let expected = rows[0].len();
                if let Some((row, cells)) = rows
                    .iter()
                    .enumerate()
                    .find(|(_, cells)| cells.len() != expected)
                {
                    return Err(ParseError::Ragged {
                        row,
                        expected,
                        found: cells.len(),
                    });
                }
                expected
            }
            RowPolicy::PadWithWalls => {
                let widest = rows.iter().map(Vec::len).max().unwrap_or(0);
                for cells in &mut rows {
                    cells.resize(widest, CellKind::Wall);
                }
                widest
            }
        };

        let mut start: Option<Coord> = None;
        let mut goal: Option<Coord> = None;
        for (r, cells) in rows.iter().enumerate() {
            for (c, kind) in cells.iter().enumerate() {
                let here = Coord::new(r, c);
                match kind {
                    CellKind::Start => {
                        if let Some(first) = start {
                            return Err(ParseError::DuplicateStart {
                                first,
                                second: here,
                            });
                        }
                        start = Some(here);
                    }
                    CellKind::Goal => {
                        if let Some(first) = goal {
                            return Err(ParseError::DuplicateGoal {
                                first,
                                second: here,
                            });
                        }
                        goal = Some(here);
                    }
                    CellKind::Wall | CellKind::Open => {}
                }
            }
        }

        Ok(Self {
            rows,
            width,
            start: start.ok_or(ParseError::MissingStart)?,
            goal: goal.ok_or(ParseError::MissingGoal)?,
        })
    }

    #[must_use]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[must_use]
    pub fn goal(&self) -> Coord {
        self.goal
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.height() * self.width
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<CellKind>] {
        &self.rows
    }

    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height() && coord.col < self.width
    }

    /// Cell kind at `coord`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<CellKind> {
        self.rows.get(coord.row)?.get(coord.col).copied()
    }

    /// Every passable coordinate, row-major.
    pub fn open_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, kind)| kind.is_passable())
                .map(move |(c, _)| Coord::new(r, c))
        })
    }

    /// Passable neighbors of `coord` in [`Action::ALL`] order.
    #[must_use]
    pub fn neighbors(&self, coord: Coord) -> Vec<(Action, Coord)> {
        Action::ALL
            .into_iter()
            .filter_map(|action| {
                let next = action.apply(coord)?;
                self.cell(next)
                    .filter(|kind| kind.is_passable())
                    .map(|_| (action, next))
            })
            .collect()
    }

    /// Replay `moves` from the start cell.
    ///
    /// Returns every visited coordinate, start first, so the result has
    /// `moves.len() + 1` entries.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError`] on the first move that leaves the grid or
    /// lands on a wall.
    pub fn walk(&self, moves: &[Action]) -> Result<Vec<Coord>, WalkError> {
        let mut at = self.start;
        let mut visited = Vec::with_capacity(moves.len() + 1);
        visited.push(at);
        for (step, &action) in moves.iter().enumerate() {
            let next = action
                .apply(at)
                .filter(|c| self.contains(*c))
                .ok_or(WalkError::OutOfBounds {
                    step,
                    from: at,
                    action,
                })?;
            if self.cell(next) == Some(CellKind::Wall) {
                return Err(WalkError::IntoWall {
                    step,
                    from: at,
                    action,
                });
            }
            at = next;
            visited.push(at);
        }
        Ok(visited)
    }

    /// Print the grid back to text using `glyphs`, one line per row.
    #[must_use]
    pub fn to_text(&self, glyphs: &GlyphSet) -> String {
        let mut out = String::with_capacity(self.height() * (self.width + 1));
        for cells in &self.rows {
            out.extend(cells.iter().map(|kind| glyphs.glyph(*kind)));
            out.push('\n');
        }
        out
    }

    /// Content hash of the grid shape and cell kinds.
    ///
    /// Glyph choice does not affect the fingerprint.
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        let mut data = Vec::with_capacity(16 + self.cell_count());
        data.extend_from_slice(&(self.height() as u64).to_le_bytes());
        data.extend_from_slice(&(self.width as u64).to_le_bytes());
        for kind in self.rows.iter().flatten() {
            data.push(match kind {
                CellKind::Wall => 0,
                CellKind::Open => 1,
                CellKind::Start => 2,
                CellKind::Goal => 3,
            });
        }
        canonical_hash(DOMAIN_GRID, &data)
    }
}
