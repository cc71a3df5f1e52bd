//! Run pipeline: read → parse → solve → report → render.
//!
//! Parse and input failures abort before any search. Once the search has
//! run, its console report is written first; rendering happens last and
//! its failure is carried in [`RunSummary::render`] rather than discarding
//! the search results.

use std::io::Write;
use std::path::PathBuf;

use maze_kernel::grid::{GridModel, ParseError, ParseOptions, WalkError};
use maze_kernel::proof::canon::CanonError;
use maze_kernel::proof::hash::ContentHash;
use maze_search::engine::{solve, SearchOutcome};
use maze_search::report::SearchReport;
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::console::console_report;
use crate::render::{encode_png, image_digest, render, FileSink, ImageSink, RenderError};

/// Exit status for malformed maze data (`EX_DATAERR`).
pub const EXIT_DATA_ERROR: u8 = 65;
/// Exit status for an unreadable maze file (`EX_NOINPUT`).
pub const EXIT_NO_INPUT: u8 = 66;
/// Exit status for output that could not be written (`EX_IOERR`).
pub const EXIT_IO_ERROR: u8 = 74;

/// Failure that stops a run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("cannot read maze file {}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid maze {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error("cannot write console report")]
    Console(#[source] std::io::Error),
    #[error("cannot encode search report")]
    Canon(#[from] CanonError),
    #[error("cannot write search report {}", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("solution does not replay on the grid")]
    Walk(#[from] WalkError),
}

impl RunError {
    /// Process exit status for this failure.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ReadInput { .. } => EXIT_NO_INPUT,
            Self::Parse { .. } | Self::Walk(_) => EXIT_DATA_ERROR,
            Self::Console(_) | Self::Canon(_) | Self::WriteReport { .. } => EXIT_IO_ERROR,
        }
    }
}

/// Results of a run that got as far as searching.
#[derive(Debug)]
pub struct RunSummary {
    pub grid: GridModel,
    pub outcome: SearchOutcome,
    pub report_digest: ContentHash,
    /// Digest of the PNG written, or why it could not be.
    pub render: Result<ContentHash, RenderError>,
}

/// Read and parse a maze file.
///
/// # Errors
///
/// Returns [`RunError::ReadInput`] or [`RunError::Parse`].
pub fn load_grid(path: &std::path::Path, options: &ParseOptions) -> Result<GridModel, RunError> {
    let text = std::fs::read_to_string(path).map_err(|source| RunError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    GridModel::parse(&text, options).map_err(|source| RunError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Run the pipeline, writing the image to `config.output_path`.
///
/// # Errors
///
/// See [`run_with_sink`].
pub fn run(config: &RunConfig, out: &mut dyn Write) -> Result<RunSummary, RunError> {
    let mut sink = FileSink::new(&config.output_path);
    run_with_sink(config, out, &mut sink)
}

/// Run the pipeline with an explicit image destination.
///
/// # Errors
///
/// Returns [`RunError`] for input, parse, console, or report failures.
/// Image failures are returned inside [`RunSummary::render`].
pub fn run_with_sink(
    config: &RunConfig,
    out: &mut dyn Write,
    sink: &mut dyn ImageSink,
) -> Result<RunSummary, RunError> {
    let grid = load_grid(&config.maze_path, &config.parse)?;
    info!(
        path = %config.maze_path.display(),
        rows = grid.height(),
        cols = grid.width(),
        "maze loaded"
    );

    let outcome = solve(&grid, config.search);
    info!(
        solved = outcome.is_solved(),
        num_explored = outcome.num_explored,
        "search finished"
    );

    out.write_all(console_report(&grid, &outcome, &config.parse.glyphs).as_bytes())
        .and_then(|()| out.flush())
        .map_err(RunError::Console)?;

    let report = SearchReport::from_outcome(&grid, &config.search, &outcome);
    let report_bytes = report.to_canonical_json_bytes()?;
    let report_digest = report.digest()?;
    debug!(digest = %report_digest, "search report");
    if let Some(path) = &config.report_path {
        std::fs::write(path, &report_bytes).map_err(|source| RunError::WriteReport {
            path: path.clone(),
            source,
        })?;
    }

    let path_cells = outcome.moves().map(|moves| grid.walk(moves)).transpose()?;
    let rendered = render(&grid, &outcome.explored, path_cells.as_deref(), config.render)
        .and_then(|img| encode_png(&img))
        .and_then(|png| {
            sink.write_png(&png)?;
            Ok(image_digest(&png))
        });
    if let Ok(digest) = &rendered {
        info!(path = %config.output_path.display(), %digest, "image written");
    }

    Ok(RunSummary {
        grid,
        outcome,
        report_digest,
        render: rendered,
    })
}
