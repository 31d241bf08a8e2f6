//! Handlers for the `/payments` ledger.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use hostelease_core::error::CoreError;
use hostelease_core::payment::{self, PaymentStatus};
use hostelease_core::types::DbId;
use hostelease_db::models::payment::{CreatePayment, Payment, PaymentSummary};
use hostelease_db::repositories::{PaymentRepo, ResidentRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// Query parameters for ledger listing.
#[derive(Debug, Deserialize)]
pub struct PaymentListParams {
    pub search: Option<String>,
    pub status: Option<String>,
}

/// GET /api/v1/payments
///
/// Admins see the whole ledger; a resident principal sees only their
/// own entries.
pub async fn list(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<PaymentListParams>,
) -> AppResult<Json<Vec<Payment>>> {
    let status = match params.status.as_deref() {
        None | Some("all") => None,
        Some(s) => Some(
            PaymentStatus::parse(s)
                .ok_or_else(|| {
                    AppError::Core(CoreError::Validation(format!(
                        "Unknown payment status: {s}"
                    )))
                })?
                .as_str(),
        ),
    };
    let scope = if user.is_admin() { None } else { Some(user.user_id) };
    let payments =
        PaymentRepo::list(&state.pool, params.search.as_deref(), status, scope).await?;
    Ok(Json(payments))
}

/// POST /api/v1/payments
///
/// Creates a `pending` due for a resident, snapshotting their name.
pub async fn create(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreatePayment>,
) -> AppResult<(StatusCode, Json<Payment>)> {
    payment::validate_amount(input.amount)?;
    if input.due_date.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Due date is required".into(),
        )));
    }
    if input.payment_type.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Payment type is required".into(),
        )));
    }

    let resident = ResidentRepo::find_by_id(&state.pool, input.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resident",
            id: input.user_id,
        }))?;

    let created = PaymentRepo::create(&state.pool, &input, &resident.full_name()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/payments/summary
pub async fn summary(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<PaymentSummary>> {
    Ok(Json(PaymentRepo::summary(&state.pool).await?))
}

/// PUT /api/v1/payments/{id}/mark-paid
pub async fn mark_paid(
    admin: RequireAdmin,
    state: State<AppState>,
    id: Path<DbId>,
) -> AppResult<Json<Payment>> {
    mark(admin, state, id, PaymentStatus::Paid).await
}

/// PUT /api/v1/payments/{id}/mark-failed
pub async fn mark_failed(
    admin: RequireAdmin,
    state: State<AppState>,
    id: Path<DbId>,
) -> AppResult<Json<Payment>> {
    mark(admin, state, id, PaymentStatus::Failed).await
}

/// Shared terminal transition: only `pending` entries may move, and the
/// UPDATE itself is status-guarded against races.
async fn mark(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    target: PaymentStatus,
) -> AppResult<Json<Payment>> {
    let current = PaymentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Payment",
            id,
        }))?;
    let current_status = PaymentStatus::parse(&current.status).ok_or_else(|| {
        AppError::InternalError(format!("Corrupt payment status: {}", current.status))
    })?;
    payment::validate_mark(current_status, target)?;

    let stamp_paid_date = target == PaymentStatus::Paid;
    let updated = PaymentRepo::mark(&state.pool, id, target.as_str(), stamp_paid_date)
        .await?
        .ok_or_else(|| {
            // Settled between the fetch and the guarded update.
            AppError::Core(CoreError::InvalidState(
                "Payment has already been settled".into(),
            ))
        })?;

    tracing::info!(payment_id = id, status = %target, "payment marked");
    Ok(Json(updated))
}
