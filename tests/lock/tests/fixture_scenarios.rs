//! End-to-end scenarios on the fixture mazes: parse, solve, compare against
//! hand-verified paths and counts.

use lock_tests::{fixture_text, load_fixture, reference_distance};
use maze_kernel::grid::{Action, Coord, GridModel, ParseError, ParseOptions};
use maze_search::engine::{solve, Termination};
use maze_search::policy::{ExploredCheck, SearchConfig};
use maze_search::report::SearchReport;
use serde_json::json;

use Action::{Down, Right, Up};

fn on_insert() -> SearchConfig {
    SearchConfig::default().with_explored_check(ExploredCheck::OnInsert)
}

// ---------------------------------------------------------------------------
// 3x3 grids
// ---------------------------------------------------------------------------

#[test]
fn walled_three_by_three_has_no_path() {
    // "A.#\n.#.\n#.B": the goal's neighbors (1,2) and (2,1) are open, but
    // nothing connects them to the start's corner.
    let grid = load_fixture("walled_3x3.txt");
    assert_eq!(grid.start(), Coord::new(0, 0));
    assert_eq!(grid.goal(), Coord::new(2, 2));

    let outcome = solve(&grid, SearchConfig::default());
    assert_eq!(outcome.termination, Termination::Exhausted);
    assert_eq!(reference_distance(&grid), None);
}

#[test]
fn open_three_by_three_path_is_four_moves() {
    let grid = load_fixture("open_3x3.txt");
    let outcome = solve(&grid, SearchConfig::default());
    assert_eq!(outcome.moves(), Some(&[Down, Down, Right, Right][..]));
    assert_eq!(outcome.num_explored, 10);
    assert_eq!(reference_distance(&grid), Some(4));
}

// ---------------------------------------------------------------------------
// Block-glyph mazes
// ---------------------------------------------------------------------------

#[test]
fn maze1_shortest_path() {
    let grid = load_fixture("maze1.txt");
    let outcome = solve(&grid, SearchConfig::default());
    assert_eq!(
        outcome.moves(),
        Some(&[Up, Right, Right, Right, Right, Up, Up, Right, Up, Up][..])
    );
    assert_eq!(outcome.num_explored, 19);

    let strict = solve(&grid, on_insert());
    assert_eq!(strict.moves(), outcome.moves());
    assert_eq!(strict.num_explored, 11);
}

#[test]
fn maze1_report_pins_grid_and_solution() {
    let grid = load_fixture("maze1.txt");
    let config = SearchConfig::default();
    let outcome = solve(&grid, config);
    let report = SearchReport::from_outcome(&grid, &config, &outcome);
    let json = report.as_json();

    assert_eq!(json["grid"]["fingerprint"], grid.fingerprint().as_str());
    assert_eq!(json["grid"]["start"], json!([5, 0]));
    assert_eq!(json["grid"]["goal"], json!([0, 5]));
    assert_eq!(json["num_explored"], 19);
    assert_eq!(json["termination"]["length"], 10);
    assert_eq!(json["termination"]["moves"][0], "up");

    let bytes = report.to_canonical_json_bytes().unwrap();
    let reparsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(&reparsed, json);
}

#[test]
fn maze2_matches_reference_distance() {
    let grid = load_fixture("maze2.txt");
    assert_eq!(grid.height(), 16);
    assert_eq!(grid.width(), 29);

    let outcome = solve(&grid, SearchConfig::default());
    let moves = outcome.moves().expect("maze2 is solvable");
    assert_eq!(moves.len(), 30);
    assert_eq!(Some(moves.len()), reference_distance(&grid));
    assert_eq!(outcome.num_explored, 149);
    assert_eq!(outcome.explored.len(), 76);

    let cells = grid.walk(moves).unwrap();
    assert_eq!(cells.last(), Some(&grid.goal()));
}

#[test]
fn block_fixture_needs_block_wall_glyph() {
    // Read with '#' walls, every block is an open cell.
    let text = fixture_text("maze1.txt");
    let wrong = GridModel::parse(&text, &ParseOptions::with_wall('#')).unwrap();
    assert_eq!(wrong.open_cells().count(), wrong.cell_count());

    let right = load_fixture("maze1.txt");
    assert!(right.open_cells().count() < right.cell_count());
    assert_ne!(wrong.fingerprint(), right.fingerprint());
}

// ---------------------------------------------------------------------------
// Enclosed goal
// ---------------------------------------------------------------------------

#[test]
fn enclosed_goal_exhausts_after_reachable_cells() {
    let grid = load_fixture("enclosed_goal.txt");
    let reachable = lock_tests::reference_distances(&grid).len();
    assert_eq!(reachable, 16);

    let outcome = solve(&grid, on_insert());
    assert_eq!(outcome.termination, Termination::Exhausted);
    let count = usize::try_from(outcome.num_explored).unwrap();
    assert_eq!(count, reachable);
    assert_eq!(outcome.explored.len(), reachable);

    // Reference counting removes duplicates late, so it counts more, but
    // expands exactly the same cells.
    let late = solve(&grid, SearchConfig::default());
    assert_eq!(late.termination, Termination::Exhausted);
    assert_eq!(late.explored, outcome.explored);
    assert_eq!(late.num_explored, 33);
}

// ---------------------------------------------------------------------------
// Malformed input
// ---------------------------------------------------------------------------

#[test]
fn two_starts_fail_to_parse() {
    let err = GridModel::parse(&fixture_text("two_starts.txt"), &ParseOptions::with_wall('#'))
        .unwrap_err();
    assert_eq!(
        err,
        ParseError::DuplicateStart {
            first: Coord::new(0, 0),
            second: Coord::new(1, 1),
        }
    );
}

#[test]
fn ragged_rows_strict_then_padded() {
    // Row 1 is two cells wide; its third cell would have been read past
    // the end of the row.
    let text = fixture_text("ragged.txt");
    let strict = GridModel::parse(&text, &ParseOptions::with_wall('#')).unwrap_err();
    assert_eq!(
        strict,
        ParseError::Ragged {
            row: 1,
            expected: 4,
            found: 2,
        }
    );

    let grid = GridModel::parse(&text, &ParseOptions::with_wall('#').padded()).unwrap();
    assert_eq!(grid.width(), 4);
    assert_eq!(grid.goal(), Coord::new(2, 3));
    assert!(grid
        .neighbors(Coord::new(1, 1))
        .iter()
        .all(|(_, c)| *c != Coord::new(1, 2)));

    let outcome = solve(&grid, SearchConfig::default());
    assert_eq!(outcome.moves().map(<[Action]>::len), reference_distance(&grid));
    assert_eq!(reference_distance(&grid), Some(5));
}
