//! Human-readable console report.

use std::fmt::Write as _;

use maze_kernel::grid::{GlyphSet, GridModel};
use maze_search::engine::SearchOutcome;

/// Maze, exploration count, and the solution moves one per line.
#[must_use]
pub fn console_report(grid: &GridModel, outcome: &SearchOutcome, glyphs: &GlyphSet) -> String {
    let mut out = String::new();
    out.push_str("Maze:\n");
    out.push_str(&grid.to_text(glyphs));
    out.push_str("Solving...\n");
    let _ = writeln!(out, "States Explored: {}", outcome.num_explored);
    match outcome.moves() {
        Some(moves) => {
            out.push_str("Solution:\n");
            for action in moves {
                let _ = writeln!(out, "{action}");
            }
        }
        None => out.push_str("No solution.\n"),
    }
    out
}
