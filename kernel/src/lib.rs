//! Maze kernel: the grid model and the hashing primitives that pin it.
//!
//! # Module Dependency Direction
//!
//! `proof` ← `grid`
//!
//! `grid` parses maze text into an immutable [`grid::GridModel`] and answers
//! neighbor queries. `proof` provides canonical JSON and domain-separated
//! SHA-256 digests used for fingerprints and reports.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod grid;
pub mod proof;
