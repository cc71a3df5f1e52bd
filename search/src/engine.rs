//! The search loop: remove, check, expand.
//!
//! Each [`SearchEngine::step`] performs one full iteration:
//!
//! 1. empty frontier → [`SearchState::Exhausted`]
//! 2. remove one node and count it
//! 3. node at the goal → record its moves, [`SearchState::Solved`]
//! 4. node already explored → discard
//! 5. otherwise mark explored and enqueue one child per neighbor, in
//!    up/down/left/right order
//!
//! With a queue frontier the first goal removal is a shortest path by move
//! count: nodes are enqueued in the removal order of their parents, so all
//! nodes at depth k leave the queue before any node at depth k + 1.

use std::collections::BTreeSet;

use maze_kernel::grid::{Action, Coord, GridModel};
use tracing::{debug, error, trace};

use crate::frontier::Frontier;
use crate::node::{SearchNode, TrailArena};
use crate::policy::{ExploredCheck, SearchConfig};

/// Engine lifecycle. `Solved` and `Exhausted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Running,
    Solved,
    Exhausted,
}

impl SearchState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// How a finished search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// Moves from start to goal.
    Solved { moves: Vec<Action> },
    /// The frontier emptied without reaching the goal.
    Exhausted,
}

/// Everything a finished search produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub termination: Termination,
    /// Number of nodes removed from the frontier, including discarded ones.
    pub num_explored: u64,
    /// Coordinates that were expanded.
    pub explored: BTreeSet<Coord>,
    pub frontier_high_water: usize,
}

impl SearchOutcome {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self.termination, Termination::Solved { .. })
    }

    /// The solution moves, or `None` if the goal was unreachable.
    #[must_use]
    pub fn moves(&self) -> Option<&[Action]> {
        match &self.termination {
            Termination::Solved { moves } => Some(moves),
            Termination::Exhausted => None,
        }
    }
}

/// Single-use search over one grid.
///
/// Owns its frontier, explored set, and counter; nothing is shared with
/// other engines, so running two engines on the same grid gives the same
/// result.
pub struct SearchEngine<'g> {
    grid: &'g GridModel,
    config: SearchConfig,
    frontier: Box<dyn Frontier>,
    trails: TrailArena,
    explored: BTreeSet<Coord>,
    num_explored: u64,
    state: SearchState,
    solution: Option<Vec<Action>>,
}

impl<'g> SearchEngine<'g> {
    /// A running engine with the start node in a fresh frontier.
    #[must_use]
    pub fn new(grid: &'g GridModel, config: SearchConfig) -> Self {
        let mut frontier = config.frontier.build();
        frontier.add(SearchNode::root(grid.start()));
        Self {
            grid,
            config,
            frontier,
            trails: TrailArena::new(),
            explored: BTreeSet::new(),
            num_explored: 0,
            state: SearchState::Running,
            solution: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    #[must_use]
    pub fn num_explored(&self) -> u64 {
        self.num_explored
    }

    #[must_use]
    pub fn explored(&self) -> &BTreeSet<Coord> {
        &self.explored
    }

    #[must_use]
    pub fn solution(&self) -> Option<&[Action]> {
        self.solution.as_deref()
    }

    /// Run one loop iteration. A terminal engine does nothing.
    pub fn step(&mut self) -> SearchState {
        if self.state.is_terminal() {
            return self.state;
        }

        if self.frontier.is_empty() {
            debug!(
                num_explored = self.num_explored,
                explored = self.explored.len(),
                "frontier exhausted, goal unreachable"
            );
            self.state = SearchState::Exhausted;
            return self.state;
        }

        let Ok(node) = self.frontier.remove() else {
            error!(
                pending = self.frontier.len(),
                "frontier reported non-empty but had nothing to remove"
            );
            self.state = SearchState::Exhausted;
            return self.state;
        };
        self.num_explored += 1;
        trace!(
            row = node.coord.row,
            col = node.coord.col,
            depth = node.depth,
            "removed node"
        );

        if node.coord == self.grid.goal() {
            let moves = self.trails.moves(node.trail);
            debug!(
                num_explored = self.num_explored,
                length = moves.len(),
                "goal reached"
            );
            self.solution = Some(moves);
            self.state = SearchState::Solved;
            return self.state;
        }

        if !self.explored.insert(node.coord) {
            return self.state;
        }

        for (action, next) in self.grid.neighbors(node.coord) {
            if self.config.explored_check == ExploredCheck::OnInsert
                && (self.explored.contains(&next) || self.frontier.contains_state(next))
            {
                continue;
            }
            let trail = self.trails.extend(node.trail, action);
            self.frontier.add(node.child(next, trail));
        }
        self.state
    }

    /// Step until terminal and return the final state.
    pub fn run(&mut self) -> SearchState {
        while !self.step().is_terminal() {}
        self.state
    }

    /// Run to completion and hand over the results.
    #[must_use]
    pub fn solve(mut self) -> SearchOutcome {
        self.run();
        let termination = match self.solution {
            Some(moves) => Termination::Solved { moves },
            None => Termination::Exhausted,
        };
        SearchOutcome {
            termination,
            num_explored: self.num_explored,
            explored: self.explored,
            frontier_high_water: self.frontier.high_water(),
        }
    }
}

/// Build an engine for `grid` and run it to completion.
#[must_use]
pub fn solve(grid: &GridModel, config: SearchConfig) -> SearchOutcome {
    SearchEngine::new(grid, config).solve()
}
