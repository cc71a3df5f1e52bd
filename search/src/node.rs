//! Search nodes and their structurally shared move trails.
//!
//! A node does not own its move sequence. Each move is one link in a
//! [`TrailArena`]; a node holds the id of its last link, and children
//! extend their parent's trail in O(1). The full sequence is materialized
//! once, when the goal is removed from the frontier.

use maze_kernel::grid::{Action, Coord};

/// Handle to the last move of a trail inside a [`TrailArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrailId(usize);

#[derive(Debug, Clone, Copy)]
struct TrailLink {
    parent: Option<TrailId>,
    action: Action,
}

/// Append-only store of move links. Links are never removed during a run.
#[derive(Debug, Clone, Default)]
pub struct TrailArena {
    links: Vec<TrailLink>,
}

impl TrailArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `action` after `parent` and return the new trail tip.
    pub fn extend(&mut self, parent: Option<TrailId>, action: Action) -> TrailId {
        self.links.push(TrailLink { parent, action });
        TrailId(self.links.len() - 1)
    }

    /// Ordered moves from the start up to and including `tip`.
    ///
    /// `None` is the empty trail of the start node.
    #[must_use]
    pub fn moves(&self, tip: Option<TrailId>) -> Vec<Action> {
        let mut moves = Vec::new();
        let mut current = tip;
        while let Some(TrailId(idx)) = current {
            let link = self.links[idx];
            moves.push(link.action);
            current = link.parent;
        }
        moves.reverse();
        moves
    }

    /// Number of links stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// One partial path: where it ends and how it got there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub coord: Coord,
    /// Tip of the move trail; `None` for the start node.
    pub trail: Option<TrailId>,
    /// Number of moves from the start.
    pub depth: usize,
}

impl SearchNode {
    /// The start node: no moves taken.
    #[must_use]
    pub fn root(coord: Coord) -> Self {
        Self {
            coord,
            trail: None,
            depth: 0,
        }
    }

    /// A node one move deeper than `self`, ending at `coord`.
    #[must_use]
    pub fn child(&self, coord: Coord, trail: TrailId) -> Self {
        Self {
            coord,
            trail: Some(trail),
            depth: self.depth + 1,
        }
    }
}
