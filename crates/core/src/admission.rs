//! Admission status state machine for residents.
//!
//! A resident is created `Pending` and an admin moves them to `Active`
//! or `Rejected`. Those transitions are one-directional: the only way
//! out of a decided status is an explicit reset back to `Pending`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Admission status of a resident.
///
/// Serialized capitalized (`"Pending"`, `"Active"`, `"Rejected"`) to
/// match the admin dashboard's wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdmissionStatus {
    Pending,
    Active,
    Rejected,
}

impl AdmissionStatus {
    /// Return the status name as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Active => "Active",
            Self::Rejected => "Rejected",
        }
    }

    /// Parse a status string. Returns `None` for unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(Self::Pending),
            "Active" => Some(Self::Active),
            "Rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// All valid status values.
    pub const ALL: &'static [&'static str] = &["Pending", "Active", "Rejected"];
}

impl std::fmt::Display for AdmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `from -> to` is a legal admission transition.
///
/// Allowed edges: `Pending -> Active`, `Pending -> Rejected`, and an
/// explicit reset of any status back to `Pending`. Setting a status to
/// its current value is a no-op and always allowed.
pub fn can_transition(from: AdmissionStatus, to: AdmissionStatus) -> bool {
    use AdmissionStatus::{Active, Pending, Rejected};
    match (from, to) {
        _ if from == to => true,
        (Pending, Active) | (Pending, Rejected) => true,
        (_, Pending) => true,
        (Active, Rejected) | (Rejected, Active) => false,
        _ => false,
    }
}

/// Validate a transition, producing the error surfaced to the caller.
pub fn validate_transition(from: AdmissionStatus, to: AdmissionStatus) -> Result<(), CoreError> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(CoreError::InvalidState(format!(
            "Cannot change admission status from {from} to {to}; reset to Pending first"
        )))
    }
}
