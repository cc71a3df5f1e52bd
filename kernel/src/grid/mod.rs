//! Maze grid: coordinates, cell kinds, and the parsed [`GridModel`].

pub mod coord;
pub mod glyph;
pub mod model;

pub use coord::{Action, Coord};
pub use glyph::{CellKind, GlyphSet, ParseOptions, RowPolicy, DEFAULT_WALL_GLYPH};
pub use model::{GridModel, ParseError, WalkError};
