//! Attempt reports and the end-of-game summary
use serde::{Deserialize, Serialize};

/// Caller-declared outcome of a pairing attempt. The game is played in the
/// room; the shell only reports whether the pair hit it off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

/// A settled pairing, in the order it was proposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub first: String,
    pub second: String,
}

impl Pair {
    #[must_use]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

/// What a single attempt did to the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingReport {
    pub pair: Pair,
    pub outcome: Outcome,
    /// Participants whose candidate list this attempt emptied. They stay
    /// on the roster, merely ineligible in practice.
    pub newly_exhausted: Vec<String>,
    /// True when no valid pairing remains anywhere in the roster.
    pub game_over: bool,
}

/// What removing a participant did to the rest of the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalReport {
    pub name: String,
    /// A removal can exhaust a bystander whose last candidate just left.
    pub newly_exhausted: Vec<String>,
}

/// End-of-game report, rendered by the shell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Unpaired participants, in roster order.
    pub unmatched: Vec<String>,
    /// The most recent successful pairing of the session, if any.
    pub last_success: Option<Pair>,
    /// Completed pairs, one entry each, ordered by the roster position of
    /// the earlier-added member.
    pub pairs: Vec<Pair>,
}

impl GameSummary {
    /// The sole unmatched participant, when exactly one remains. Game
    /// flavour: they earn the doubled bonus.
    #[must_use]
    pub fn sole_unmatched(&self) -> Option<&str> {
        match self.unmatched.as_slice() {
            [name] => Some(name),
            _ => None,
        }
    }

    /// The closing pairing, called out only when nobody was left unmatched.
    #[must_use]
    pub fn closing_pair(&self) -> Option<&Pair> {
        if self.unmatched.is_empty() {
            self.last_success.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sole_unmatched_requires_exactly_one() {
        let mut summary = GameSummary {
            unmatched: vec!["Sora".to_string()],
            ..GameSummary::default()
        };
        assert_eq!(summary.sole_unmatched(), Some("Sora"));

        summary.unmatched.push("Kai".to_string());
        assert_eq!(summary.sole_unmatched(), None);

        summary.unmatched.clear();
        assert_eq!(summary.sole_unmatched(), None);
    }

    #[test]
    fn closing_pair_only_when_everyone_matched() {
        let pair = Pair::new("Mei", "Ren");
        let summary = GameSummary {
            unmatched: Vec::new(),
            last_success: Some(pair.clone()),
            pairs: vec![pair.clone()],
        };
        assert_eq!(summary.closing_pair(), Some(&pair));

        let summary = GameSummary {
            unmatched: vec!["Sora".to_string()],
            last_success: Some(pair),
            pairs: Vec::new(),
        };
        assert_eq!(summary.closing_pair(), None);
    }
}
