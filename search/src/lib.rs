//! Maze search: frontier disciplines and the search loop.
//!
//! # Crate dependency graph
//!
//! ```text
//! maze_kernel  ←  maze_search  ←  maze_harness
//! (grid, proof)   (frontier,       (render, runner, CLI)
//!                  engine, report)
//! ```
//!
//! # Key types
//!
//! - [`frontier::Frontier`]: pending nodes; [`frontier::StackFrontier`]
//!   (LIFO) and [`frontier::QueueFrontier`] (FIFO)
//! - [`node::SearchNode`]: a coordinate plus a shared move trail
//! - [`engine::SearchEngine`]: the remove/check/expand state machine
//! - [`report::SearchReport`]: canonical, hashable summary of a run

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod engine;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod report;
