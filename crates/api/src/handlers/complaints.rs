//! Handlers for the `/complaints` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use hostelease_core::complaint::{
    self, ComplaintCategory, ComplaintPriority, ComplaintStatus,
};
use hostelease_core::error::CoreError;
use hostelease_core::types::DbId;
use hostelease_db::models::complaint::{Complaint, CreateComplaint, UpdateComplaintStatus};
use hostelease_db::repositories::complaint_repo::NewComplaint;
use hostelease_db::repositories::{ComplaintRepo, ResidentRepo, RoomRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// Query parameters for complaint listing.
#[derive(Debug, Deserialize)]
pub struct ComplaintListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

/// POST /api/v1/complaints
///
/// Files a complaint for the authenticated resident, snapshotting
/// their name and current room number.
pub async fn create(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<CreateComplaint>,
) -> AppResult<(StatusCode, Json<Complaint>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title is required".into(),
        )));
    }
    if input.description.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Description is required".into(),
        )));
    }
    let category = match input.category.as_deref() {
        None => ComplaintCategory::default(),
        Some(c) => ComplaintCategory::parse(c).ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!("Unknown category: {c}")))
        })?,
    };
    let priority = match input.priority.as_deref() {
        None => ComplaintPriority::default(),
        Some(p) => ComplaintPriority::parse(p).ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!("Unknown priority: {p}")))
        })?,
    };

    let resident = ResidentRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resident",
            id: user.user_id,
        }))?;
    let room_number = match resident.room_id {
        Some(room_id) => RoomRepo::find_by_id(&state.pool, room_id)
            .await?
            .map(|r| r.room_number),
        None => None,
    };

    let complaint = ComplaintRepo::create(
        &state.pool,
        &NewComplaint {
            resident_id: resident.id,
            resident_name: &resident.full_name(),
            room: room_number.as_deref(),
            title: input.title.trim(),
            description: input.description.trim(),
            category: category.as_str(),
            priority: priority.as_str(),
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(complaint)))
}

/// GET /api/v1/complaints
pub async fn list(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<ComplaintListParams>,
) -> AppResult<Json<Vec<Complaint>>> {
    let status = match params.status.as_deref() {
        None | Some("all") => None,
        Some(s) => Some(
            ComplaintStatus::parse(s)
                .ok_or_else(|| {
                    AppError::Core(CoreError::Validation(format!(
                        "Unknown complaint status: {s}"
                    )))
                })?
                .as_str(),
        ),
    };
    let priority = match params.priority.as_deref() {
        None | Some("all") => None,
        Some(p) => Some(
            ComplaintPriority::parse(p)
                .ok_or_else(|| {
                    AppError::Core(CoreError::Validation(format!("Unknown priority: {p}")))
                })?
                .as_str(),
        ),
    };
    let complaints =
        ComplaintRepo::list(&state.pool, params.search.as_deref(), status, priority).await?;
    Ok(Json(complaints))
}

/// GET /api/v1/complaints/user/{userId}
///
/// A resident may view only their own complaints; admins may view any.
pub async fn list_by_user(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<Complaint>>> {
    if !user.is_admin() && user.user_id != user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You may only view your own complaints".into(),
        )));
    }
    let complaints = ComplaintRepo::list_by_resident(&state.pool, user_id).await?;
    Ok(Json(complaints))
}

/// PUT /api/v1/complaints/{id}/status
///
/// Admins may move a complaint between any of the three statuses;
/// `resolved` is not terminal.
pub async fn update_status(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateComplaintStatus>,
) -> AppResult<Json<Complaint>> {
    let status = ComplaintStatus::parse(&input.status).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "Unknown complaint status: {}",
            input.status
        )))
    })?;
    let complaint = ComplaintRepo::update_status(
        &state.pool,
        id,
        status.as_str(),
        input.admin_notes.as_deref(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Complaint",
        id,
    }))?;
    Ok(Json(complaint))
}

/// DELETE /api/v1/complaints/{id}
///
/// Admins delete unconditionally; the owning resident only while the
/// complaint is still `pending`.
pub async fn delete(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = ComplaintRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Complaint",
            id,
        }))?;
    let status = ComplaintStatus::parse(&existing.status).ok_or_else(|| {
        AppError::InternalError(format!("Corrupt complaint status: {}", existing.status))
    })?;
    let is_owner = existing.resident_id == Some(user.user_id);
    complaint::validate_delete(&user.role, is_owner, status)?;

    ComplaintRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
