//! Pending search nodes with a fixed removal discipline.
//!
//! [`StackFrontier`] removes the newest node (depth-first search),
//! [`QueueFrontier`] the oldest (breadth-first search). They are separate
//! implementations of one [`Frontier`] trait, chosen by [`FrontierKind`]
//! when the engine is built.

use std::collections::{BTreeMap, VecDeque};

use maze_kernel::grid::Coord;

use crate::error::FrontierEmpty;
use crate::node::SearchNode;

/// Container of discovered-but-unexpanded nodes.
pub trait Frontier {
    fn add(&mut self, node: SearchNode);

    /// Take the next node according to the frontier's discipline.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierEmpty`] if there is nothing to remove.
    fn remove(&mut self) -> Result<SearchNode, FrontierEmpty>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether any pending node ends at `coord`.
    fn contains_state(&self, coord: Coord) -> bool;

    /// Largest number of nodes pending at once.
    fn high_water(&self) -> usize;
}

/// Which frontier discipline to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontierKind {
    /// LIFO: depth-first, no shortest-path guarantee.
    Stack,
    /// FIFO: breadth-first, first goal removal is a shortest path.
    #[default]
    Queue,
}

impl FrontierKind {
    #[must_use]
    pub fn build(self) -> Box<dyn Frontier> {
        match self {
            Self::Stack => Box::new(StackFrontier::new()),
            Self::Queue => Box::new(QueueFrontier::new()),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Queue => "queue",
        }
    }
}

/// Per-coordinate pending counts plus the size high-water mark.
///
/// Shared bookkeeping for both disciplines.
#[derive(Debug, Default)]
struct PendingStates {
    counts: BTreeMap<Coord, usize>,
    high_water: usize,
}

impl PendingStates {
    fn added(&mut self, coord: Coord, len_after: usize) {
        *self.counts.entry(coord).or_insert(0) += 1;
        self.high_water = self.high_water.max(len_after);
    }

    fn removed(&mut self, coord: Coord) {
        if let Some(count) = self.counts.get_mut(&coord) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&coord);
            }
        }
    }

    fn contains(&self, coord: Coord) -> bool {
        self.counts.contains_key(&coord)
    }
}

/// LIFO frontier.
#[derive(Debug, Default)]
pub struct StackFrontier {
    nodes: Vec<SearchNode>,
    pending: PendingStates,
}

impl StackFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, node: SearchNode) {
        self.nodes.push(node);
        self.pending.added(node.coord, self.nodes.len());
    }

    fn remove(&mut self) -> Result<SearchNode, FrontierEmpty> {
        let node = self.nodes.pop().ok_or(FrontierEmpty)?;
        self.pending.removed(node.coord);
        Ok(node)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn contains_state(&self, coord: Coord) -> bool {
        self.pending.contains(coord)
    }

    fn high_water(&self) -> usize {
        self.pending.high_water
    }
}

/// FIFO frontier.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    nodes: VecDeque<SearchNode>,
    pending: PendingStates,
}

impl QueueFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, node: SearchNode) {
        self.nodes.push_back(node);
        self.pending.added(node.coord, self.nodes.len());
    }

    fn remove(&mut self) -> Result<SearchNode, FrontierEmpty> {
        let node = self.nodes.pop_front().ok_or(FrontierEmpty)?;
        self.pending.removed(node.coord);
        Ok(node)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn contains_state(&self, coord: Coord) -> bool {
        self.pending.contains(coord)
    }

    fn high_water(&self) -> usize {
        self.pending.high_water
    }
}
