//! Maze harness: wires the kernel and search crates into a runnable tool.
//!
//! The harness owns everything outside the search itself: reading maze
//! files, the console report, PNG rendering, the canonical report file,
//! and the `maze-solve` command line.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod config;
pub mod console;
pub mod render;
pub mod runner;
