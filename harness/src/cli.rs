//! Command-line surface of `maze-solve`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use maze_kernel::grid::{GlyphSet, ParseOptions, RowPolicy, DEFAULT_WALL_GLYPH};
use maze_search::frontier::FrontierKind;
use maze_search::policy::{ExploredCheck, SearchConfig};

use crate::config::{RunConfig, DEFAULT_OUTPUT};
use crate::render::RenderOptions;

/// Solve a text maze by graph search and render the result as a PNG.
#[derive(Debug, Parser)]
#[command(name = "maze-solve", version)]
pub struct Cli {
    /// Maze file: one row per line, `A` marks the start, `B` the goal.
    pub maze: PathBuf,

    /// Where to write the rendered image.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Character that marks a wall; anything else except A/B is open.
    #[arg(long, default_value_t = DEFAULT_WALL_GLYPH)]
    pub wall_glyph: char,

    /// Frontier discipline.
    #[arg(long, value_enum, default_value_t = FrontierArg::Queue)]
    pub frontier: FrontierArg,

    /// When to skip already-explored cells.
    #[arg(long, value_enum, default_value_t = ExploredCheckArg::OnRemove)]
    pub explored_check: ExploredCheckArg,

    /// Pad short rows with walls instead of rejecting the maze.
    #[arg(long)]
    pub pad_ragged: bool,

    /// Do not highlight the solution path.
    #[arg(long)]
    pub hide_solution: bool,

    /// Do not highlight explored cells.
    #[arg(long)]
    pub hide_explored: bool,

    /// Also write the canonical JSON search report to this path.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FrontierArg {
    /// Breadth-first (shortest path).
    Queue,
    /// Depth-first.
    Stack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExploredCheckArg {
    OnRemove,
    OnInsert,
}

impl Cli {
    #[must_use]
    pub fn into_config(self) -> RunConfig {
        let frontier = match self.frontier {
            FrontierArg::Queue => FrontierKind::Queue,
            FrontierArg::Stack => FrontierKind::Stack,
        };
        let explored_check = match self.explored_check {
            ExploredCheckArg::OnRemove => ExploredCheck::OnRemove,
            ExploredCheckArg::OnInsert => ExploredCheck::OnInsert,
        };
        RunConfig {
            maze_path: self.maze,
            output_path: self.output,
            report_path: self.report,
            parse: ParseOptions {
                glyphs: GlyphSet::with_wall(self.wall_glyph),
                rows: if self.pad_ragged {
                    RowPolicy::PadWithWalls
                } else {
                    RowPolicy::Strict
                },
            },
            search: SearchConfig {
                frontier,
                explored_check,
            },
            render: RenderOptions {
                show_solution: !self.hide_solution,
                show_explored: !self.hide_explored,
            },
        }
    }
}
