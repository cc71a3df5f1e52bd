//! Run configuration: one struct per stage, collected in [`RunConfig`].

use std::path::PathBuf;

use maze_kernel::grid::ParseOptions;
use maze_search::policy::SearchConfig;

use crate::render::RenderOptions;

/// Default image path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "maze_solution.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub maze_path: PathBuf,
    pub output_path: PathBuf,
    /// Where to write the canonical JSON search report, if anywhere.
    pub report_path: Option<PathBuf>,
    pub parse: ParseOptions,
    pub search: SearchConfig,
    pub render: RenderOptions,
}

impl RunConfig {
    /// Defaults for everything except the maze file.
    #[must_use]
    pub fn new(maze_path: impl Into<PathBuf>) -> Self {
        Self {
            maze_path: maze_path.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            report_path: None,
            parse: ParseOptions::default(),
            search: SearchConfig::default(),
            render: RenderOptions::default(),
        }
    }
}
