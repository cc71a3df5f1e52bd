//! Search configuration.

use crate::frontier::FrontierKind;

/// When a coordinate's explored status is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExploredCheck {
    /// Check after a node is removed, before it is expanded. A coordinate
    /// can be enqueued several times and every removal is counted, so
    /// exploration counts match the reference diagnostics.
    #[default]
    OnRemove,
    /// Also skip children whose coordinate is explored or already pending.
    /// Each coordinate is removed at most once; counts equal the number of
    /// distinct cells reached.
    OnInsert,
}

impl ExploredCheck {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnRemove => "on_remove",
            Self::OnInsert => "on_insert",
        }
    }
}

/// Engine construction options.
///
/// The default (queue frontier, check on remove) is breadth-first search
/// with reference-compatible exploration counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    pub frontier: FrontierKind,
    pub explored_check: ExploredCheck,
}

impl SearchConfig {
    /// Depth-first configuration.
    #[must_use]
    pub fn depth_first() -> Self {
        Self {
            frontier: FrontierKind::Stack,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_explored_check(mut self, explored_check: ExploredCheck) -> Self {
        self.explored_check = explored_check;
        self
    }
}
