//! Grid → PNG renderer.
//!
//! Each cell is a solid rectangle on a black background: a
//! [`CELL_SIZE`]-pixel square inset by [`CELL_BORDER`] pixels on every side.
//! Colors follow a fixed precedence (start, goal, solution, explored,
//! cell kind) so output is bit-reproducible.

use std::collections::BTreeSet;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageError, ImageOutputFormat, Rgba, RgbaImage};
use maze_kernel::grid::{CellKind, Coord, GridModel};
use maze_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_RENDER};

/// Side length of one cell, in pixels.
pub const CELL_SIZE: u32 = 50;

/// Gap between a cell's rectangle and its square's edge, in pixels.
pub const CELL_BORDER: u32 = 2;

pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const WALL: Rgba<u8> = Rgba([40, 40, 40, 255]);
pub const OPEN: Rgba<u8> = Rgba([237, 240, 252, 255]);
pub const START: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const GOAL: Rgba<u8> = Rgba([0, 171, 28, 255]);
pub const SOLUTION: Rgba<u8> = Rgba([220, 235, 113, 255]);
pub const EXPLORED: Rgba<u8> = Rgba([212, 97, 85, 255]);

/// Which search overlays to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_solution: bool,
    pub show_explored: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_solution: true,
            show_explored: true,
        }
    }
}

/// Failure to produce or store an image.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("grid of {rows}x{cols} cells is too large to render")]
    TooLarge { rows: usize, cols: usize },
    #[error("PNG encoding failed")]
    Encode(#[from] ImageError),
    #[error("cannot write image {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Destination for encoded PNG bytes.
pub trait ImageSink {
    /// # Errors
    ///
    /// Returns [`RenderError::Io`] if the bytes cannot be stored.
    fn write_png(&mut self, png: &[u8]) -> Result<(), RenderError>;
}

/// Writes the PNG to a file, replacing any existing one.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSink for FileSink {
    fn write_png(&mut self, png: &[u8]) -> Result<(), RenderError> {
        std::fs::write(&self.path, png).map_err(|source| RenderError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Keeps the PNG in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub bytes: Vec<u8>,
}

impl ImageSink for MemorySink {
    fn write_png(&mut self, png: &[u8]) -> Result<(), RenderError> {
        self.bytes.clear();
        self.bytes.extend_from_slice(png);
        Ok(())
    }
}

/// Color of one cell.
#[must_use]
pub fn cell_color(
    kind: CellKind,
    on_solution: bool,
    explored: bool,
    options: RenderOptions,
) -> Rgba<u8> {
    match kind {
        CellKind::Start => START,
        CellKind::Goal => GOAL,
        CellKind::Wall => WALL,
        CellKind::Open if options.show_solution && on_solution => SOLUTION,
        CellKind::Open if options.show_explored && explored => EXPLORED,
        CellKind::Open => OPEN,
    }
}

/// Draw `grid` with the explored set and solution cells overlaid.
///
/// `solution` is the list of cells on the path (see
/// [`GridModel::walk`]); `None` draws no path.
///
/// # Errors
///
/// Returns [`RenderError::TooLarge`] if the image dimensions overflow `u32`.
pub fn render(
    grid: &GridModel,
    explored: &BTreeSet<Coord>,
    solution: Option<&[Coord]>,
    options: RenderOptions,
) -> Result<RgbaImage, RenderError> {
    let too_large = || RenderError::TooLarge {
        rows: grid.height(),
        cols: grid.width(),
    };
    let width = u32::try_from(grid.width())
        .ok()
        .and_then(|cols| cols.checked_mul(CELL_SIZE))
        .ok_or_else(too_large)?;
    let height = u32::try_from(grid.height())
        .ok()
        .and_then(|rows| rows.checked_mul(CELL_SIZE))
        .ok_or_else(too_large)?;

    let path: BTreeSet<Coord> = solution.unwrap_or_default().iter().copied().collect();
    let mut img = RgbaImage::from_pixel(width, height, BACKGROUND);

    for (r, cells) in grid.rows().iter().enumerate() {
        for (c, &kind) in cells.iter().enumerate() {
            let here = Coord::new(r, c);
            let fill = cell_color(
                kind,
                path.contains(&here),
                explored.contains(&here),
                options,
            );
            // Both dimensions fit in u32 (checked above), so the indices do too.
            let (Ok(x0), Ok(y0)) = (u32::try_from(c), u32::try_from(r)) else {
                return Err(too_large());
            };
            fill_cell(&mut img, x0 * CELL_SIZE, y0 * CELL_SIZE, fill);
        }
    }
    Ok(img)
}

/// Fill the inclusive rectangle
/// `(left + border, top + border) ..= (left + size - border, top + size - border)`,
/// clipped to the image.
fn fill_cell(img: &mut RgbaImage, left: u32, top: u32, fill: Rgba<u8>) {
    let x_end = (left + CELL_SIZE - CELL_BORDER).min(img.width() - 1);
    let y_end = (top + CELL_SIZE - CELL_BORDER).min(img.height() - 1);
    for y in top + CELL_BORDER..=y_end {
        for x in left + CELL_BORDER..=x_end {
            img.put_pixel(x, y, fill);
        }
    }
}

/// Encode as PNG.
///
/// # Errors
///
/// Returns [`RenderError::Encode`] if the encoder fails.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageOutputFormat::Png)?;
    Ok(png)
}

/// Content hash of encoded image bytes.
#[must_use]
pub fn image_digest(png: &[u8]) -> ContentHash {
    canonical_hash(DOMAIN_RENDER, png)
}
