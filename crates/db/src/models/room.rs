//! Room entity model and DTOs.

use hostelease_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full room row from the `rooms` table.
///
/// `is_available` is derived from `current_occupants < capacity`; it is
/// recomputed on every mutation and never set by callers.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: DbId,
    pub room_number: String,
    pub room_type: String,
    pub capacity: i64,
    pub price: i64,
    pub current_occupants: i64,
    pub is_available: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new room. Occupancy always starts at zero.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoom {
    pub room_number: String,
    #[serde(default = "default_room_type")]
    pub room_type: String,
    pub capacity: i64,
    pub price: i64,
}

fn default_room_type() -> String {
    "single".to_string()
}

/// DTO for updating an existing room. All fields are optional; there is
/// deliberately no `isAvailable` field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoom {
    pub room_number: Option<String>,
    pub room_type: Option<String>,
    pub capacity: Option<i64>,
    pub price: Option<i64>,
    pub current_occupants: Option<i64>,
}
