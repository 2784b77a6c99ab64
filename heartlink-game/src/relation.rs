//! Failed-attempt bookkeeping
//!
//! Failed pairings are stored as a single set of unordered name pairs, so
//! "A attempted B" and "B attempted A" are the same entry and the symmetry
//! of the relation holds by construction rather than by careful updates.
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An unordered pair of participant names, stored in normalised order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey(String, String);

impl PairKey {
    #[must_use]
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self(a.to_string(), b.to_string())
        } else {
            Self(b.to_string(), a.to_string())
        }
    }
}

/// The set of pairings that have been tried and failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRelation {
    failed: HashSet<PairKey>,
}

impl AttemptRelation {
    /// Record a failed attempt between `a` and `b`. Returns false if the
    /// pair was already recorded.
    pub fn record(&mut self, a: &str, b: &str) -> bool {
        self.failed.insert(PairKey::new(a, b))
    }

    #[must_use]
    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.failed.contains(&PairKey::new(a, b))
    }

    /// Drop every entry touching `name`, restoring mutual eligibility for
    /// anyone who had failed with it.
    pub fn forget(&mut self, name: &str) {
        self.failed.retain(|PairKey(x, y)| x != name && y != name);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failed.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.failed.len()
    }
}
