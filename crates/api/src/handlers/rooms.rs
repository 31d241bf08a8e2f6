//! Handlers for the `/admin/rooms` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use hostelease_core::error::CoreError;
use hostelease_core::occupancy::{
    self, AvailabilityFilter, RoomSortKey,
};
use hostelease_core::types::DbId;
use hostelease_db::models::resident::ResidentResponse;
use hostelease_db::models::room::{CreateRoom, Room, UpdateRoom};
use hostelease_db::repositories::{ResidentRepo, RoomRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query parameters for room listing.
#[derive(Debug, Deserialize)]
pub struct RoomListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub sort_by: Option<String>,
}

/// Body for assign/release: which resident moves.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyChange {
    pub resident_id: DbId,
}

/// Both sides of an occupancy change, so clients can refresh in one go.
#[derive(Debug, Serialize)]
pub struct OccupancyResponse {
    pub room: Room,
    pub resident: ResidentResponse,
}

/// GET /api/v1/admin/rooms
pub async fn list(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<RoomListParams>,
) -> AppResult<Json<Vec<Room>>> {
    let availability = match params.status.as_deref() {
        None => AvailabilityFilter::default(),
        Some(s) => AvailabilityFilter::parse(s).ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Unknown availability filter: {s}"
            )))
        })?,
    };
    let sort = match params.sort_by.as_deref() {
        None => RoomSortKey::default(),
        Some(s) => RoomSortKey::parse(s).ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!("Unknown sort key: {s}")))
        })?,
    };
    let rooms = RoomRepo::list(&state.pool, params.search.as_deref(), availability, sort).await?;
    Ok(Json(rooms))
}

/// POST /api/v1/admin/rooms
pub async fn create(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateRoom>,
) -> AppResult<(StatusCode, Json<Room>)> {
    if input.room_number.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Room number is required".into(),
        )));
    }
    occupancy::validate_capacity(input.capacity)?;
    occupancy::validate_price(input.price)?;

    let room = RoomRepo::create(&state.pool, &input).await.map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Core(CoreError::Conflict(format!(
                "Room number {} is already in use",
                input.room_number
            )))
        } else {
            AppError::Database(e)
        }
    })?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// GET /api/v1/admin/rooms/{id}
pub async fn get_by_id(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Room>> {
    let room = RoomRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;
    Ok(Json(room))
}

/// PUT /api/v1/admin/rooms/{id}
///
/// Applies a partial update. The effective occupant count may not
/// exceed the effective capacity, and availability is recomputed from
/// them; there is no way for a client to set it directly.
pub async fn update(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRoom>,
) -> AppResult<Json<Room>> {
    let current = RoomRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;

    let capacity = input.capacity.unwrap_or(current.capacity);
    let occupants = input.current_occupants.unwrap_or(current.current_occupants);
    occupancy::validate_capacity(capacity)?;
    occupancy::validate_price(input.price.unwrap_or(current.price))?;
    occupancy::validate_occupants(occupants, capacity)?;
    if let Some(number) = &input.room_number {
        if number.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Room number is required".into(),
            )));
        }
    }

    let room = RoomRepo::update(&state.pool, id, &input)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Core(CoreError::Conflict(
                    "Another room already uses that room number".into(),
                ))
            } else {
                AppError::Database(e)
            }
        })?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;
    Ok(Json(room))
}

/// DELETE /api/v1/admin/rooms/{id}
///
/// Refuses while the room is occupied.
pub async fn delete(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let room = RoomRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;
    if room.current_occupants > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Room {} is occupied; release its residents first",
            room.room_number
        ))));
    }
    if !RoomRepo::delete_if_unoccupied(&state.pool, id).await? {
        // Lost a race with an assignment.
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Room {} is occupied; release its residents first",
            room.room_number
        ))));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/rooms/{id}/assign
///
/// Assigns an `Active`, unassigned resident to the room. The guarded
/// occupancy increment and the resident's room association commit
/// together or not at all.
pub async fn assign(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<OccupancyChange>,
) -> AppResult<Json<OccupancyResponse>> {
    let mut tx = state.pool.begin().await?;

    let room = RoomRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;
    let resident = ResidentRepo::find_by_id(&mut *tx, body.resident_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resident",
            id: body.resident_id,
        }))?;

    if resident.status != "Active" {
        return Err(AppError::Core(CoreError::InvalidState(format!(
            "Only Active residents can be assigned a room; {} is {}",
            resident.full_name(),
            resident.status
        ))));
    }
    if resident.room_id.is_some() {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "{} already has a room assigned",
            resident.full_name()
        ))));
    }
    if !RoomRepo::try_assign(&mut *tx, id).await? {
        return Err(AppError::Core(CoreError::Capacity(format!(
            "Room {} is already at capacity",
            room.room_number
        ))));
    }
    let resident = ResidentRepo::set_status_and_room(&mut *tx, body.resident_id, "Active", Some(id))
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resident",
            id: body.resident_id,
        }))?;
    let room = RoomRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;

    tx.commit().await?;
    Ok(Json(OccupancyResponse {
        room,
        resident: resident.into(),
    }))
}

/// POST /api/v1/admin/rooms/{id}/release
///
/// Removes a resident from the room: decrement (floored at zero), clear
/// the association, recompute availability. One transaction.
pub async fn release(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<OccupancyChange>,
) -> AppResult<Json<OccupancyResponse>> {
    let mut tx = state.pool.begin().await?;

    RoomRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;
    let resident = ResidentRepo::find_by_id(&mut *tx, body.resident_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resident",
            id: body.resident_id,
        }))?;
    if resident.room_id != Some(id) {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "{} does not occupy this room",
            resident.full_name()
        ))));
    }

    RoomRepo::release(&mut *tx, id).await?;
    let status = resident.status.clone();
    let resident = ResidentRepo::set_status_and_room(&mut *tx, body.resident_id, &status, None)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resident",
            id: body.resident_id,
        }))?;
    let room = RoomRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;

    tx.commit().await?;
    Ok(Json(OccupancyResponse {
        room,
        resident: resident.into(),
    }))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
