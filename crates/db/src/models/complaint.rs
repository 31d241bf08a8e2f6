//! Complaint entity model and DTOs.

use hostelease_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full complaint row from the `complaints` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: DbId,
    pub resident_id: Option<DbId>,
    pub resident_name: String,
    /// Room number snapshot at filing time, if the resident had one.
    pub room: Option<String>,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: String,
    pub status: String,
    pub admin_notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for filing a complaint. Resident identity and room come from the
/// authenticated principal, not the body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComplaint {
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub priority: Option<String>,
}

/// DTO for the admin status update.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComplaintStatus {
    pub status: String,
    pub admin_notes: Option<String>,
}
