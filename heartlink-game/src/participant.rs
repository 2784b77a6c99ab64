//! Participant model
use serde::{Deserialize, Serialize};

/// One named entry on the roster.
///
/// `partner` is set exactly once, on the participant's successful pairing,
/// and never cleared while the participant remains tracked. Failed-attempt
/// history lives in the tracker's [`AttemptRelation`](crate::AttemptRelation),
/// not here, so the symmetry of that relation cannot drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub paired: bool,
    pub partner: Option<String>,
}

impl Participant {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            paired: false,
            partner: None,
        }
    }

    /// Eligible participants are those not yet successfully paired.
    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        !self.paired
    }
}
