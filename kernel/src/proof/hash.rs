//! Content hashing with domain separation.
//!
//! Every digest is `SHA-256(domain_prefix || data)`, rendered as
//! `"sha256:<hex>"`. Domain prefixes are null-terminated so no prefix is a
//! prefix of another.

use sha2::{Digest, Sha256};

/// Domain prefix for grid fingerprints.
pub const DOMAIN_GRID: &[u8] = b"MAZE::GRID::V1\0";

/// Domain prefix for canonical search report bytes.
pub const DOMAIN_SEARCH_REPORT: &[u8] = b"MAZE::SEARCH_REPORT::V1\0";

/// Domain prefix for rendered image bytes.
pub const DOMAIN_RENDER: &[u8] = b"MAZE::RENDER::V1\0";

/// Every domain prefix in use.
pub const ALL_DOMAINS: &[&[u8]] = &[DOMAIN_GRID, DOMAIN_SEARCH_REPORT, DOMAIN_RENDER];

/// A content-addressed hash with algorithm identifier.
///
/// Invariant: the inner string contains exactly one `:` with non-empty
/// text on both sides (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 || s[colon + 1..].contains(':') {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Hash `data` under `domain`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let full = format!("sha256:{}", hex::encode(hasher.finalize()));
    ContentHash { full, colon: 6 }
}
