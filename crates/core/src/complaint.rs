//! Complaint workflow rules.
//!
//! Admins may move a complaint between any of the three statuses at any
//! time; the only hard rule is on deletion, where a resident may remove
//! their own complaint only while it is still `pending`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::roles::ROLE_ADMIN;

/// Status of a complaint. `resolved` is not terminal -- an admin may
/// reopen at will.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplaintStatus {
    Pending,
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "in-progress" => Some(Self::InProgress),
            "resolved" => Some(Self::Resolved),
            _ => None,
        }
    }

    pub const ALL: &'static [&'static str] = &["pending", "in-progress", "resolved"];
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complaint priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplaintPriority {
    Low,
    Medium,
    High,
}

impl ComplaintPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl Default for ComplaintPriority {
    fn default() -> Self {
        Self::Medium
    }
}

impl std::fmt::Display for ComplaintPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complaint category. Wire values are capitalized, matching the
/// resident dashboard's category picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintCategory {
    Maintenance,
    Plumbing,
    Electrical,
    Internet,
    Cleaning,
    Security,
    Other,
}

impl ComplaintCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Maintenance => "Maintenance",
            Self::Plumbing => "Plumbing",
            Self::Electrical => "Electrical",
            Self::Internet => "Internet",
            Self::Cleaning => "Cleaning",
            Self::Security => "Security",
            Self::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Maintenance" => Some(Self::Maintenance),
            "Plumbing" => Some(Self::Plumbing),
            "Electrical" => Some(Self::Electrical),
            "Internet" => Some(Self::Internet),
            "Cleaning" => Some(Self::Cleaning),
            "Security" => Some(Self::Security),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl Default for ComplaintCategory {
    fn default() -> Self {
        Self::Maintenance
    }
}

impl std::fmt::Display for ComplaintCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a delete request against the ownership/status rule.
///
/// Admins delete unconditionally. The owning resident may delete only
/// while the complaint is still `pending`; anyone else is refused.
pub fn validate_delete(
    requester_role: &str,
    is_owner: bool,
    status: ComplaintStatus,
) -> Result<(), CoreError> {
    if requester_role == ROLE_ADMIN {
        return Ok(());
    }
    if !is_owner {
        return Err(CoreError::Forbidden(
            "Only the complaint owner or an admin may delete a complaint".into(),
        ));
    }
    if status != ComplaintStatus::Pending {
        return Err(CoreError::Forbidden(format!(
            "A {status} complaint can no longer be deleted by its owner"
        )));
    }
    Ok(())
}
