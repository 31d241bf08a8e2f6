//! Handlers for the `/admin/users` resource (admission workflow).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use hostelease_core::admission::{validate_transition, AdmissionStatus};
use hostelease_core::error::CoreError;
use hostelease_core::types::DbId;
use hostelease_db::models::resident::{Resident, ResidentResponse};
use hostelease_db::repositories::{ResidentRepo, RoomRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query parameters for resident listing.
#[derive(Debug, Deserialize)]
pub struct ResidentListParams {
    pub search: Option<String>,
}

/// Optional approval body: a room to assign alongside the approval.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveRequest {
    pub room_id: Option<DbId>,
}

/// Body for the generic status update.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: String,
}

/// The stored status strings come from a closed vocabulary; anything
/// else means the row predates a schema change and is a server fault,
/// not a client one.
fn stored_status(resident: &Resident) -> Result<AdmissionStatus, AppError> {
    AdmissionStatus::parse(&resident.status).ok_or_else(|| {
        AppError::InternalError(format!("Corrupt admission status: {}", resident.status))
    })
}

/// GET /api/v1/admin/users
pub async fn list(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<ResidentListParams>,
) -> AppResult<Json<Vec<ResidentResponse>>> {
    let residents = ResidentRepo::list(&state.pool, params.search.as_deref()).await?;
    Ok(Json(residents.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/admin/users/{id}
pub async fn get_by_id(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ResidentResponse>> {
    let resident = ResidentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resident",
            id,
        }))?;
    Ok(Json(resident.into()))
}

/// PUT /api/v1/admin/users/{id}/approve
///
/// Moves a `Pending` resident to `Active`, optionally assigning a room
/// in the same transaction. If the room is full the whole approval
/// fails and the resident stays `Pending`.
pub async fn approve(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<ApproveRequest>>,
) -> AppResult<Json<ResidentResponse>> {
    let room_id = body.and_then(|Json(b)| b.room_id);

    let mut tx = state.pool.begin().await?;
    let resident = ResidentRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resident",
            id,
        }))?;
    validate_transition(stored_status(&resident)?, AdmissionStatus::Active)?;

    let assigned_room = match room_id {
        None => resident.room_id,
        Some(room_id) => {
            if resident.room_id.is_some() {
                return Err(AppError::Core(CoreError::Conflict(format!(
                    "{} already has a room assigned",
                    resident.full_name()
                ))));
            }
            let room = RoomRepo::find_by_id(&mut *tx, room_id).await?.ok_or(
                AppError::Core(CoreError::NotFound {
                    entity: "Room",
                    id: room_id,
                }),
            )?;
            if !RoomRepo::try_assign(&mut *tx, room_id).await? {
                return Err(AppError::Core(CoreError::Capacity(format!(
                    "Room {} is already at capacity",
                    room.room_number
                ))));
            }
            Some(room_id)
        }
    };

    let resident = ResidentRepo::set_status_and_room(&mut *tx, id, "Active", assigned_room)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resident",
            id,
        }))?;
    tx.commit().await?;

    tracing::info!(resident_id = id, room_id = ?assigned_room, "resident approved");
    Ok(Json(resident.into()))
}

/// PUT /api/v1/admin/users/{id}/reject
///
/// Moves a `Pending` resident to `Rejected`. Any held room is released
/// in the same transaction.
pub async fn reject(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ResidentResponse>> {
    set_status_inner(&state, id, AdmissionStatus::Rejected).await
}

/// PUT /api/v1/admin/users/{id}
///
/// Generic status update under the transition rules. Setting the same
/// status is a no-op; moving between the two terminal-ish states
/// (`Active` <-> `Rejected`) requires a reset to `Pending` first.
pub async fn set_status(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<SetStatusRequest>,
) -> AppResult<Json<ResidentResponse>> {
    let target = AdmissionStatus::parse(&body.status).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "Unknown admission status: {}",
            body.status
        )))
    })?;
    set_status_inner(&state, id, target).await
}

/// Shared transition body: validates, releases any held room when the
/// resident stops being `Active`, and commits both sides together.
async fn set_status_inner(
    state: &AppState,
    id: DbId,
    target: AdmissionStatus,
) -> AppResult<Json<ResidentResponse>> {
    let mut tx = state.pool.begin().await?;
    let resident = ResidentRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resident",
            id,
        }))?;
    let current = stored_status(&resident)?;

    if current == target {
        return Ok(Json(resident.into()));
    }
    validate_transition(current, target)?;

    let room_id = match (resident.room_id, target) {
        (Some(room_id), AdmissionStatus::Active) => Some(room_id),
        (Some(room_id), _) => {
            RoomRepo::release(&mut *tx, room_id).await?;
            None
        }
        (None, _) => None,
    };

    let resident = ResidentRepo::set_status_and_room(&mut *tx, id, target.as_str(), room_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resident",
            id,
        }))?;
    tx.commit().await?;

    tracing::info!(resident_id = id, status = %target, "admission status changed");
    Ok(Json(resident.into()))
}

/// DELETE /api/v1/admin/users/{id}
///
/// Deletes the resident and releases any held room as one transaction.
/// Ledger entries and complaints keep their snapshots.
pub async fn delete(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ResidentRepo::delete_with_release(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Resident",
            id,
        }));
    }
    tracing::info!(resident_id = id, "resident deleted");
    Ok(StatusCode::NO_CONTENT)
}
