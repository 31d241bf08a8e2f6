//! Payment ledger model and DTOs.

use hostelease_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full payment row from the `payments` table.
///
/// `resident_id` is nulled if the resident record is deleted; the name
/// snapshot keeps the ledger entry readable.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: DbId,
    pub resident_id: Option<DbId>,
    pub resident_name: String,
    pub amount: i64,
    #[serde(rename = "type")]
    pub payment_type: String,
    pub payment_method: String,
    pub status: String,
    pub due_date: String,
    pub paid_date: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a due. `user_id` is resolved to a resident whose
/// name is snapshotted at insert time.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayment {
    pub user_id: DbId,
    pub amount: i64,
    pub due_date: String,
    #[serde(rename = "type")]
    pub payment_type: String,
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
}

fn default_payment_method() -> String {
    "cash".to_string()
}

/// Aggregate ledger totals, recomputed per request.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    pub total_amount: i64,
    pub pending_amount: i64,
    pub paid_amount: i64,
}
