//! Shared helpers for the lock tests: fixture loading and an independent
//! shortest-distance oracle.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::path::PathBuf;

use maze_kernel::grid::{Coord, GridModel, ParseOptions};

/// Fixtures drawn with the default full-block wall glyph.
pub const BLOCK_FIXTURES: &[&str] = &["maze1.txt", "maze2.txt"];

/// Fixtures drawn with `#` walls.
pub const HASH_FIXTURES: &[&str] = &["open_3x3.txt", "walled_3x3.txt", "enclosed_goal.txt"];

#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// # Panics
///
/// Panics if the fixture is missing. Fixtures ship with the crate.
#[must_use]
pub fn fixture_text(name: &str) -> String {
    let path = fixture_path(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", path.display()))
}

/// Parse options matching a fixture's wall glyph.
#[must_use]
pub fn fixture_options(name: &str) -> ParseOptions {
    if BLOCK_FIXTURES.contains(&name) {
        ParseOptions::default()
    } else {
        ParseOptions::with_wall('#')
    }
}

/// # Panics
///
/// Panics if the fixture does not parse.
#[must_use]
pub fn load_fixture(name: &str) -> GridModel {
    GridModel::parse(&fixture_text(name), &fixture_options(name))
        .unwrap_or_else(|e| panic!("fixture {name} does not parse: {e}"))
}

/// Shortest move count from start to every reachable cell.
///
/// Computed by relaxing every cell against its neighbors until nothing
/// changes. No frontier is involved, so it shares no logic with the engine.
#[must_use]
pub fn reference_distances(grid: &GridModel) -> BTreeMap<Coord, usize> {
    let cells: Vec<Coord> = grid.open_cells().collect();
    let mut dist: BTreeMap<Coord, usize> = BTreeMap::new();
    dist.insert(grid.start(), 0);
    loop {
        let mut changed = false;
        for &cell in &cells {
            let best = grid
                .neighbors(cell)
                .into_iter()
                .filter_map(|(_, n)| dist.get(&n).map(|d| d + 1))
                .min();
            if let Some(candidate) = best {
                let entry = dist.entry(cell).or_insert(usize::MAX);
                if candidate < *entry {
                    *entry = candidate;
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}

/// Shortest move count from start to goal, or `None` if unreachable.
#[must_use]
pub fn reference_distance(grid: &GridModel) -> Option<usize> {
    reference_distances(grid).get(&grid.goal()).copied()
}
