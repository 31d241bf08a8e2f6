//! Public registration handler.
//!
//! The raw password never goes past this module: it is validated
//! against the form rules, hashed with argon2, and only the hash is
//! handed to the store.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHasher};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use hostelease_core::error::CoreError;
use hostelease_core::validation::{validate_registration, RegistrationForm};
use hostelease_db::models::resident::{CreateResident, Resident, ResidentResponse};
use hostelease_db::repositories::ResidentRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Flattened three-step registration form.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub check_in_date: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub profession: String,
    pub company_name: String,
    pub emergency_contact: String,
    /// Opaque reference to the uploaded document (storage is external).
    pub id_proof: String,
    pub room_preference: String,
    pub special_requirements: Option<String>,
}

/// POST /api/v1/register
///
/// Creates a `Pending` resident. Returns 400 with the first broken form
/// rule, 409 if the email is already registered.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ResidentResponse>)> {
    validate_registration(&RegistrationForm {
        first_name: &req.first_name,
        last_name: &req.last_name,
        email: &req.email,
        phone: &req.phone,
        password: &req.password,
        confirm_password: &req.confirm_password,
        check_in_date: &req.check_in_date,
        address: &req.address,
        city: &req.city,
        state: &req.state,
        profession: &req.profession,
        company_name: &req.company_name,
        emergency_contact: &req.emergency_contact,
        id_proof: &req.id_proof,
        room_preference: &req.room_preference,
    })?;

    if ResidentRepo::find_by_email(&state.pool, &req.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "A resident with this email already exists".into(),
        )));
    }

    let password_hash = hash_password(&req.password)?;
    let resident: Resident = ResidentRepo::create(
        &state.pool,
        &CreateResident {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            password_hash,
            check_in_date: req.check_in_date,
            address: req.address,
            city: req.city,
            state: req.state,
            profession: req.profession,
            company_name: req.company_name,
            emergency_contact: req.emergency_contact,
            id_proof: req.id_proof,
            room_preference: req.room_preference,
            special_requirements: req.special_requirements,
        },
    )
    .await?;

    tracing::info!(resident_id = resident.id, "resident registered");
    Ok((StatusCode::CREATED, Json(resident.into())))
}

fn hash_password(raw: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(raw.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))
}
