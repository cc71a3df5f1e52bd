//! Typed search errors.
//!
//! Exhausting the frontier without reaching the goal is not an error; it is
//! reported through [`crate::engine::Termination::Exhausted`].

/// `remove` was called on an empty frontier.
///
/// The engine checks `is_empty` before every `remove`, so this only
/// surfaces when a caller drives a [`crate::frontier::Frontier`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("remove called on an empty frontier")]
pub struct FrontierEmpty;
