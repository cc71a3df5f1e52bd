//! Cell kinds and the text glyphs that encode them.

/// What occupies a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Wall,
    Open,
    Start,
    Goal,
}

impl CellKind {
    /// Whether a move may land on this cell.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// Stable name used in canonical JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Open => "open",
            Self::Start => "start",
            Self::Goal => "goal",
        }
    }
}

/// Default wall glyph: U+2588 FULL BLOCK.
pub const DEFAULT_WALL_GLYPH: char = '\u{2588}';

/// Glyph mapping between maze text and [`CellKind`].
///
/// Any character that is not `wall`, `start`, or `goal` parses as open.
/// `open` is only used when printing a grid back to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    pub wall: char,
    pub start: char,
    pub goal: char,
    pub open: char,
}

impl GlyphSet {
    /// Default glyphs with a different wall character.
    #[must_use]
    pub fn with_wall(wall: char) -> Self {
        Self {
            wall,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn classify(&self, ch: char) -> CellKind {
        if ch == self.wall {
            CellKind::Wall
        } else if ch == self.start {
            CellKind::Start
        } else if ch == self.goal {
            CellKind::Goal
        } else {
            CellKind::Open
        }
    }

    #[must_use]
    pub fn glyph(&self, kind: CellKind) -> char {
        match kind {
            CellKind::Wall => self.wall,
            CellKind::Open => self.open,
            CellKind::Start => self.start,
            CellKind::Goal => self.goal,
        }
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self {
            wall: DEFAULT_WALL_GLYPH,
            start: 'A',
            goal: 'B',
            open: ' ',
        }
    }
}

/// How rows of unequal length are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPolicy {
    /// Reject the input with [`super::ParseError::Ragged`].
    #[default]
    Strict,
    /// Right-pad short rows with walls up to the longest row.
    PadWithWalls,
}

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub glyphs: GlyphSet,
    pub rows: RowPolicy,
}

impl ParseOptions {
    #[must_use]
    pub fn with_wall(wall: char) -> Self {
        Self {
            glyphs: GlyphSet::with_wall(wall),
            rows: RowPolicy::Strict,
        }
    }

    #[must_use]
    pub fn padded(mut self) -> Self {
        self.rows = RowPolicy::PadWithWalls;
        self
    }
}
