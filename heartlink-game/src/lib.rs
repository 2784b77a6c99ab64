//! Heartlink Pairing Engine
//!
//! Platform-agnostic core logic for the colour hearts-link party game.
//! The tracker owns the roster, remembers which pairings have already
//! failed so they are never retried, retires participants on a successful
//! match, and decides when no further pairing is possible. Presentation
//! shells (console prompt loop, GUI event handlers, test harnesses) drive
//! it through the [`Command`] interface and render the structured replies.

pub mod command;
pub mod error;
pub mod participant;
pub mod relation;
pub mod result;
pub mod tracker;

// Re-export commonly used types
pub use command::{Command, CommandReply};
pub use error::TrackerError;
pub use participant::Participant;
pub use relation::{AttemptRelation, PairKey};
pub use result::{GameSummary, Outcome, Pair, PairingReport, RemovalReport};
pub use tracker::PairingTracker;
