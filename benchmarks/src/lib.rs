//! Maze generators shared by the benchmark suites.
//!
//! Every generator is deterministic so runs are comparable.

use maze_kernel::grid::{GridModel, ParseOptions};

/// Open `size`x`size` room, start top-left, goal bottom-right.
///
/// # Panics
///
/// Panics if `size < 2`.
#[must_use]
pub fn open_room(size: usize) -> GridModel {
    assert!(size >= 2, "open room needs at least two cells per side");
    let mut rows = vec![vec!['.'; size]; size];
    rows[0][0] = 'A';
    rows[size - 1][size - 1] = 'B';
    parse(&rows)
}

/// `size`x`size` serpentine corridor: every other row is a wall with a
/// single gap, alternating sides, so the path visits every open cell.
///
/// # Panics
///
/// Panics if `size < 3`.
#[must_use]
pub fn serpentine(size: usize) -> GridModel {
    assert!(size >= 3, "serpentine needs at least three rows");
    let mut rows = vec![vec!['.'; size]; size];
    for (r, row) in rows.iter_mut().enumerate().skip(1).step_by(2) {
        row.fill('#');
        let gap = if (r / 2) % 2 == 0 { size - 1 } else { 0 };
        row[gap] = '.';
    }
    rows[0][0] = 'A';
    let last = size - 1;
    let goal_row = if last % 2 == 1 { last - 1 } else { last };
    rows[goal_row][last] = 'B';
    parse(&rows)
}

/// `size`x`size` room whose goal is walled in: an exhaustive search.
///
/// # Panics
///
/// Panics if `size < 3`.
#[must_use]
pub fn sealed_goal(size: usize) -> GridModel {
    assert!(size >= 3, "sealed goal needs at least three cells per side");
    let mut rows = vec![vec!['.'; size]; size];
    let last = size - 1;
    rows[0][0] = 'A';
    rows[last][last] = 'B';
    rows[last - 1][last] = '#';
    rows[last][last - 1] = '#';
    rows[last - 1][last - 1] = '#';
    parse(&rows)
}

fn parse(rows: &[Vec<char>]) -> GridModel {
    let text: Vec<String> = rows.iter().map(|r| r.iter().collect()).collect();
    GridModel::parse(&text.join("\n"), &ParseOptions::with_wall('#'))
        .unwrap_or_else(|e| panic!("generated maze does not parse: {e}"))
}
