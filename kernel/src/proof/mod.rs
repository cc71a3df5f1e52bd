//! Determinism evidence: canonical JSON and content hashing.

pub mod canon;
pub mod hash;
