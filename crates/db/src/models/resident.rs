//! Resident entity model and DTOs.

use hostelease_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full resident row from the `residents` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`ResidentResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Resident {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub role: String,
    pub status: String,
    pub room_id: Option<DbId>,
    pub check_in_date: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub profession: String,
    pub company_name: String,
    pub emergency_contact: String,
    pub id_proof: String,
    pub room_preference: String,
    pub special_requirements: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Resident {
    /// Full display name, used for ledger and complaint snapshots.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Safe resident representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentResponse {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub status: String,
    pub room_id: Option<DbId>,
    pub check_in_date: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub profession: String,
    pub company_name: String,
    pub emergency_contact: String,
    pub id_proof: String,
    pub room_preference: String,
    pub special_requirements: Option<String>,
    pub created_at: Timestamp,
}

impl From<Resident> for ResidentResponse {
    fn from(r: Resident) -> Self {
        Self {
            id: r.id,
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            phone: r.phone,
            role: r.role,
            status: r.status,
            room_id: r.room_id,
            check_in_date: r.check_in_date,
            address: r.address,
            city: r.city,
            state: r.state,
            profession: r.profession,
            company_name: r.company_name,
            emergency_contact: r.emergency_contact,
            id_proof: r.id_proof,
            room_preference: r.room_preference,
            special_requirements: r.special_requirements,
            created_at: r.created_at,
        }
    }
}

/// DTO for inserting a new resident. The password arrives here already
/// hashed; validation happened against the raw registration form.
#[derive(Debug)]
pub struct CreateResident {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub check_in_date: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub profession: String,
    pub company_name: String,
    pub emergency_contact: String,
    pub id_proof: String,
    pub room_preference: String,
    pub special_requirements: Option<String>,
}
