//! Tracker command errors
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a tracker command is rejected.
///
/// Every variant is an expected, user-correctable input problem. The
/// tracker never aborts the session: invalid requests leave state
/// untouched and the shell prompts the user to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum TrackerError {
    /// Add rejected: nothing left of the name after trimming whitespace.
    #[error("participant name cannot be empty")]
    EmptyName,
    /// Add rejected: the name is already on the roster.
    #[error("participant '{name}' already exists")]
    DuplicateName { name: String },
    /// Remove or candidate query named someone not on the roster.
    #[error("participant '{name}' is not on the roster")]
    NotFound { name: String },
    /// Attempt rejected: selector and target are the same participant.
    #[error("'{name}' cannot pair with themselves")]
    SelfPairing { name: String },
    /// Attempt rejected: one side of the pair is not on the roster.
    #[error("unknown participant '{name}'")]
    UnknownParticipant { name: String },
    /// Attempt rejected: this pair has already failed and may not retry.
    #[error("'{selector}' has already attempted to pair with '{target}'")]
    AlreadyAttempted { selector: String, target: String },
    /// Attempt rejected: the named participant is already paired.
    #[error("'{name}' is already paired")]
    NotEligible { name: String },
}
