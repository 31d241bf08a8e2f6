//! Payment ledger status rules.
//!
//! A payment is created `pending` and may be marked `paid` or `failed`
//! exactly once; both are terminal. Ledger entries are never deleted.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Status of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

impl PaymentStatus {
    /// Return the status name as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Failed => "failed",
        }
    }

    /// Parse a status string. Returns `None` for unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "paid" => Some(Self::Paid),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    /// `paid` and `failed` are terminal.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// All valid status values.
    pub const ALL: &'static [&'static str] = &["pending", "paid", "failed"];
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate marking a payment `paid` or `failed`.
///
/// Only `pending` payments may transition; re-marking a terminal payment
/// is rejected loudly rather than silently succeeding.
pub fn validate_mark(current: PaymentStatus, target: PaymentStatus) -> Result<(), CoreError> {
    if target == PaymentStatus::Pending {
        return Err(CoreError::InvalidState(
            "A payment cannot be moved back to pending".into(),
        ));
    }
    if current.is_terminal() {
        return Err(CoreError::InvalidState(format!(
            "Payment is already {current} and cannot be marked {target}"
        )));
    }
    Ok(())
}

/// Validate a ledger amount: must be strictly positive.
pub fn validate_amount(amount: i64) -> Result<(), CoreError> {
    if amount <= 0 {
        return Err(CoreError::Validation(
            "Payment amount must be positive".into(),
        ));
    }
    Ok(())
}
