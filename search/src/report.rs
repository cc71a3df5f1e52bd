//! Canonical search report.
//!
//! A [`SearchReport`] pins one run: the grid fingerprint, the engine
//! configuration, the exploration diagnostics, and the solution. Its
//! canonical JSON bytes are stable across runs and processes, so the
//! digest can be compared to prove determinism.

use maze_kernel::grid::{Coord, GridModel};
use maze_kernel::proof::canon::{canonical_json_bytes, CanonError};
use maze_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_REPORT};
use serde_json::{json, Value};

use crate::engine::{SearchOutcome, Termination};
use crate::policy::SearchConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    value: Value,
}

impl SearchReport {
    #[must_use]
    pub fn from_outcome(grid: &GridModel, config: &SearchConfig, outcome: &SearchOutcome) -> Self {
        let value = json!({
            "config": {
                "explored_check": config.explored_check.as_str(),
                "frontier": config.frontier.as_str(),
            },
            "explored": outcome.explored.iter().copied().map(coord_to_json).collect::<Vec<_>>(),
            "frontier_high_water": outcome.frontier_high_water,
            "grid": {
                "fingerprint": grid.fingerprint().as_str(),
                "goal": coord_to_json(grid.goal()),
                "height": grid.height(),
                "start": coord_to_json(grid.start()),
                "width": grid.width(),
            },
            "num_explored": outcome.num_explored,
            "termination": termination_to_json(&outcome.termination),
        });
        Self { value }
    }

    #[must_use]
    pub fn as_json(&self) -> &Value {
        &self.value
    }

    /// # Errors
    ///
    /// Returns [`CanonError`] if the report cannot be canonicalized.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.value)
    }

    /// Domain-separated hash of the canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the report cannot be canonicalized.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_REPORT, &bytes))
    }
}

fn coord_to_json(c: Coord) -> Value {
    json!([c.row, c.col])
}

fn termination_to_json(t: &Termination) -> Value {
    match t {
        Termination::Solved { moves } => json!({
            "length": moves.len(),
            "moves": moves.iter().map(|a| a.label()).collect::<Vec<_>>(),
            "type": "solved",
        }),
        Termination::Exhausted => json!({"type": "exhausted"}),
    }
}
