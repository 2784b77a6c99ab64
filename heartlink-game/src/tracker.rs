//! Pairing state tracker
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::TrackerError;
use crate::participant::Participant;
use crate::relation::AttemptRelation;
use crate::result::{GameSummary, Outcome, Pair, PairingReport, RemovalReport};

/// Owns the roster and the attempt relation and enforces every pairing
/// rule. One tracker per game session, held by whichever shell drives it;
/// commands are applied one at a time and run to completion.
///
/// Retention policy: pairing or running out of candidates never deletes a
/// participant. Only an explicit [`remove`](Self::remove) frees a name.
/// Paired participants stay on the roster so the final summary can list
/// every completed pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PairingTracker {
    /// Insertion order, kept for display and summary enumeration.
    roster: Vec<String>,
    participants: HashMap<String, Participant>,
    attempts: AttemptRelation,
    last_success: Option<Pair>,
}

impl PairingTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a participant. The name is trimmed of surrounding whitespace and
    /// must be non-empty and unused; matching is case-sensitive. The
    /// newcomer starts eligible against everyone already tracked.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::EmptyName`] or [`TrackerError::DuplicateName`].
    pub fn add(&mut self, name: &str) -> Result<String, TrackerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::EmptyName);
        }
        if self.participants.contains_key(name) {
            return Err(TrackerError::DuplicateName {
                name: name.to_string(),
            });
        }
        self.roster.push(name.to_string());
        self.participants
            .insert(name.to_string(), Participant::new(name));
        Ok(name.to_string())
    }

    /// Remove a participant and every failed-attempt entry touching them,
    /// restoring mutual eligibility for anyone who had failed with them.
    /// The freed name may be re-added later as a fresh participant.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotFound`] for an unknown name.
    pub fn remove(&mut self, name: &str) -> Result<RemovalReport, TrackerError> {
        let name = name.trim();
        if !self.participants.contains_key(name) {
            return Err(TrackerError::NotFound {
                name: name.to_string(),
            });
        }
        let exhausted_before = self.exhausted_names();
        self.participants.remove(name);
        self.roster.retain(|n| n != name);
        self.attempts.forget(name);
        Ok(RemovalReport {
            name: name.to_string(),
            newly_exhausted: self.newly_exhausted(&exhausted_before),
        })
    }

    /// Remaining valid partners for `name`, in roster insertion order:
    /// every other eligible participant the asker has not already failed
    /// with. A paired asker has no candidates.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotFound`] for an unknown name.
    pub fn candidates_for(&self, name: &str) -> Result<Vec<String>, TrackerError> {
        let name = name.trim();
        let asker = self
            .participants
            .get(name)
            .ok_or_else(|| TrackerError::NotFound {
                name: name.to_string(),
            })?;
        Ok(self.candidates_of(asker))
    }

    fn candidates_of(&self, asker: &Participant) -> Vec<String> {
        if asker.paired {
            return Vec::new();
        }
        self.roster
            .iter()
            .filter(|other| **other != asker.name)
            .filter(|other| {
                self.participants
                    .get(*other)
                    .is_some_and(Participant::is_eligible)
            })
            .filter(|other| !self.attempts.contains(&asker.name, other.as_str()))
            .cloned()
            .collect()
    }

    /// Apply one pairing attempt between `selector` and `target` with the
    /// outcome the shell observed.
    ///
    /// On success both participants are paired with each other for the rest
    /// of the session and every failed-attempt entry touching either name
    /// is dropped; their history is dead weight once they are retired. On
    /// failure the pair is recorded so it can never be retried.
    ///
    /// # Errors
    ///
    /// Checked in order: [`TrackerError::SelfPairing`],
    /// [`TrackerError::UnknownParticipant`],
    /// [`TrackerError::AlreadyAttempted`], [`TrackerError::NotEligible`].
    /// A rejected attempt leaves the tracker untouched.
    pub fn attempt_pair(
        &mut self,
        selector: &str,
        target: &str,
        outcome: Outcome,
    ) -> Result<PairingReport, TrackerError> {
        let selector = selector.trim();
        let target = target.trim();
        if selector == target {
            return Err(TrackerError::SelfPairing {
                name: selector.to_string(),
            });
        }
        for name in [selector, target] {
            if !self.participants.contains_key(name) {
                return Err(TrackerError::UnknownParticipant {
                    name: name.to_string(),
                });
            }
        }
        if self.attempts.contains(selector, target) {
            return Err(TrackerError::AlreadyAttempted {
                selector: selector.to_string(),
                target: target.to_string(),
            });
        }
        for name in [selector, target] {
            if self.participants.get(name).is_some_and(|p| p.paired) {
                return Err(TrackerError::NotEligible {
                    name: name.to_string(),
                });
            }
        }

        let exhausted_before = self.exhausted_names();
        let pair = Pair::new(selector, target);
        match outcome {
            Outcome::Success => {
                for (name, partner) in [(selector, target), (target, selector)] {
                    if let Some(p) = self.participants.get_mut(name) {
                        p.paired = true;
                        p.partner = Some(partner.to_string());
                    }
                }
                self.attempts.forget(selector);
                self.attempts.forget(target);
                self.last_success = Some(pair.clone());
            }
            Outcome::Failure => {
                self.attempts.record(selector, target);
            }
        }

        Ok(PairingReport {
            pair,
            outcome,
            newly_exhausted: self.newly_exhausted(&exhausted_before),
            game_over: self.is_game_over(),
        })
    }

    /// True iff no valid pairing remains: every participant is paired or
    /// has an empty candidate list. Evaluated across the whole roster, not
    /// just the last attempt's pair, since a removal or failure can exhaust
    /// an uninvolved third party.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.roster.iter().all(|name| {
            self.participants
                .get(name)
                .is_none_or(|p| p.paired || self.candidates_of(p).is_empty())
        })
    }

    /// Build the end-of-game report. Completed pairs are enumerated once
    /// each, ordered by the roster position of the earlier-added member.
    /// A pairing whose other member was removed later is still listed via
    /// the surviving member, even when the freed name has since been
    /// reused by a fresh participant; only a live mutual pairing already
    /// emitted at the partner's earlier position is skipped.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        let unmatched = self
            .roster
            .iter()
            .filter(|name| {
                self.participants
                    .get(*name)
                    .is_some_and(Participant::is_eligible)
            })
            .cloned()
            .collect();

        let mut pairs = Vec::new();
        for (idx, name) in self.roster.iter().enumerate() {
            if let Some(p) = self.participants.get(name)
                && let Some(partner) = &p.partner
            {
                let already_listed = self.roster.iter().take(idx).any(|earlier| {
                    earlier == partner
                        && self
                            .participants
                            .get(earlier)
                            .is_some_and(|q| q.partner.as_deref() == Some(name.as_str()))
                });
                if !already_listed {
                    pairs.push(Pair::new(name, partner));
                }
            }
        }

        GameSummary {
            unmatched,
            last_success: self.last_success.clone(),
            pairs,
        }
    }

    /// Roster in insertion order.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.roster
            .iter()
            .filter_map(|name| self.participants.get(name))
    }

    #[must_use]
    pub fn participant(&self, name: &str) -> Option<&Participant> {
        self.participants.get(name.trim())
    }

    /// Whether the pair `a`/`b` has a recorded failed attempt, queried in
    /// either order.
    #[must_use]
    pub fn has_attempted(&self, a: &str, b: &str) -> bool {
        self.attempts.contains(a.trim(), b.trim())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roster.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Eligible participants with an empty candidate list, roster order.
    fn exhausted_names(&self) -> Vec<String> {
        self.roster
            .iter()
            .filter(|name| {
                self.participants
                    .get(*name)
                    .is_some_and(|p| p.is_eligible() && self.candidates_of(p).is_empty())
            })
            .cloned()
            .collect()
    }

    fn newly_exhausted(&self, before: &[String]) -> Vec<String> {
        self.exhausted_names()
            .into_iter()
            .filter(|name| !before.contains(name))
            .collect()
    }
}
