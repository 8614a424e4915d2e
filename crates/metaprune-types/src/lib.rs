//! Core value types for the delete-metadata planner.
//!
//! Everything here is ephemeral: values are computed fresh for one planning
//! run and carry no identity beyond it. Serde derives exist for diagnostic
//! dumps only; no wire format depends on them.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Token family key
// ---------------------------------------------------------------------------

/// A token family key: the raw identifier minus its serial suffix
/// (`ticker + "-" + randomSequence`).
///
/// Ordering is the plain byte-wise string order; it is the stable sort key
/// for the whole run.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenKey(String);

impl TokenKey {
    /// Wrap an already-validated token family key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The raw bytes of the key, as fed to the wire encoder.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TokenKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for TokenKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

// ---------------------------------------------------------------------------
// Ranges and packer input
// ---------------------------------------------------------------------------

/// A closed interval `[start, end]` of serial numbers, `start <= end`.
///
/// Within one token the compressor guarantees ranges are non-overlapping,
/// ascending by `start`, and that their union equals the token's input
/// serial set exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonceRange {
    /// First serial number covered, inclusive.
    pub start: u64,
    /// Last serial number covered, inclusive.
    pub end: u64,
}

impl NonceRange {
    /// Build a range; `start` must not exceed `end`.
    #[must_use]
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start <= end, "range start must not exceed end");
        Self { start, end }
    }

    /// A range covering a single serial number.
    #[must_use]
    pub const fn single(value: u64) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    /// Number of serial numbers this range references (`end - start + 1`).
    #[must_use]
    pub const fn nonce_count(&self) -> u64 {
        self.end - self.start + 1
    }
}

/// One packer input entry: a token family plus one of its compressed ranges.
///
/// The ordered sequence of entries across all tokens is the single input
/// stream of the bulk packer; order is significant and determines bulk
/// contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRangeEntry {
    /// Token family the range belongs to.
    pub token: TokenKey,
    /// One contiguous run of that token's serial numbers.
    pub range: NonceRange,
}

// ---------------------------------------------------------------------------
// Bulks
// ---------------------------------------------------------------------------

/// All fragments of one token that landed in one bulk, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkGroup {
    /// Token family of every range in this group.
    pub token: TokenKey,
    /// Range fragments in the order the packer emitted them. Not re-sorted:
    /// a fragment split off late in the input stays late in the list.
    pub ranges: Vec<NonceRange>,
}

/// One capacity-bounded batch of token range fragments, destined to become a
/// single instruction payload.
///
/// Groups keep first-arrival order; every fragment of a given token within
/// the bulk coalesces into that token's single group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bulk {
    /// Per-token groups in first-arrival order.
    pub groups: Vec<BulkGroup>,
}

impl Bulk {
    /// Whether the bulk holds no fragments at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total serial numbers referenced by every range in the bulk.
    #[must_use]
    pub fn nonce_count(&self) -> u64 {
        self.groups
            .iter()
            .flat_map(|group| group.ranges.iter())
            .map(NonceRange::nonce_count)
            .sum()
    }

    /// Add one fragment, coalescing into the token's existing group when the
    /// token is already present in this bulk.
    pub fn push_fragment(&mut self, token: &TokenKey, range: NonceRange) {
        if let Some(group) = self.groups.iter_mut().find(|group| &group.token == token) {
            group.ranges.push(range);
        } else {
            self.groups.push(BulkGroup {
                token: token.clone(),
                ranges: vec![range],
            });
        }
    }

    /// Groups in ascending token-key order, as the wire encoder walks them.
    #[must_use]
    pub fn sorted_groups(&self) -> Vec<&BulkGroup> {
        let mut groups: Vec<&BulkGroup> = self.groups.iter().collect();
        groups.sort_by(|a, b| a.token.cmp(&b.token));
        groups
    }
}
