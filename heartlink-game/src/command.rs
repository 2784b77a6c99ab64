//! Fixed command surface for presentation shells
//!
//! Shells translate menu picks or widget events into [`Command`] values and
//! render the structured [`CommandReply`]; the tracker never produces
//! display text of its own.
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::result::{GameSummary, Outcome, PairingReport};
use crate::tracker::PairingTracker;

/// One shell request against the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Add {
        name: String,
    },
    Remove {
        name: String,
    },
    Attempt {
        selector: String,
        target: String,
        outcome: Outcome,
    },
    ListCandidates {
        name: String,
    },
    Summary,
}

/// Structured reply to a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reply", rename_all = "snake_case")]
pub enum CommandReply {
    Added {
        name: String,
    },
    Removed {
        name: String,
        newly_exhausted: Vec<String>,
    },
    Attempted(PairingReport),
    Candidates {
        name: String,
        partners: Vec<String>,
    },
    Summary {
        game_over: bool,
        summary: GameSummary,
    },
}

impl PairingTracker {
    /// Dispatch one command. Commands are applied one at a time; a shell
    /// exposing the tracker to several callers must serialize its calls.
    ///
    /// # Errors
    ///
    /// Propagates the [`TrackerError`] of the underlying operation.
    pub fn apply(&mut self, command: Command) -> Result<CommandReply, TrackerError> {
        match command {
            Command::Add { name } => self.add(&name).map(|name| CommandReply::Added { name }),
            Command::Remove { name } => self.remove(&name).map(|report| CommandReply::Removed {
                name: report.name,
                newly_exhausted: report.newly_exhausted,
            }),
            Command::Attempt {
                selector,
                target,
                outcome,
            } => self
                .attempt_pair(&selector, &target, outcome)
                .map(CommandReply::Attempted),
            Command::ListCandidates { name } => {
                let name = name.trim().to_string();
                self.candidates_for(&name)
                    .map(|partners| CommandReply::Candidates { name, partners })
            }
            Command::Summary => Ok(CommandReply::Summary {
                game_over: self.is_game_over(),
                summary: self.summary(),
            }),
        }
    }
}
