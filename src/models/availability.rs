use serde::{Deserialize, Serialize};

/// An explicit answer from the availability webhook.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum AvailabilityVerdict {
    Available { open_slots: Option<u32> },
    Unavailable,
}

/// Where a session stands with respect to the current date selection.
///
/// Any input change moves the session back to `Idle` or into a fresh
/// `Checking`, so a result can only land on the selection it was issued for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AvailabilityState {
    #[default]
    Idle,
    Checking { seq: u64 },
    Available { open_slots: Option<u32> },
    Unavailable,
    /// The check failed or came back unreadable. Submission is allowed.
    Unverified,
}

impl AvailabilityState {
    pub fn permits_submission(&self) -> bool {
        matches!(
            self,
            AvailabilityState::Available { .. } | AvailabilityState::Unverified
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityState::Idle => "idle",
            AvailabilityState::Checking { .. } => "checking",
            AvailabilityState::Available { .. } => "available",
            AvailabilityState::Unavailable => "unavailable",
            AvailabilityState::Unverified => "unverified",
        }
    }
}

impl From<Option<AvailabilityVerdict>> for AvailabilityState {
    fn from(verdict: Option<AvailabilityVerdict>) -> Self {
        match verdict {
            Some(AvailabilityVerdict::Available { open_slots }) => {
                AvailabilityState::Available { open_slots }
            }
            Some(AvailabilityVerdict::Unavailable) => AvailabilityState::Unavailable,
            None => AvailabilityState::Unverified,
        }
    }
}
