//! Principal extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use hostelease_core::error::CoreError;
use hostelease_core::roles::{ROLE_ADMIN, ROLE_RESIDENT};
use hostelease_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// Authenticated principal forwarded by the gateway via the
/// `x-user-id` and `x-user-role` headers.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The principal's internal database id.
    pub user_id: DbId,
    /// The principal's role (`"admin"` or `"resident"`).
    pub role: String,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id: DbId = parts
            .headers
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing or malformed x-user-id header".into(),
                ))
            })?;

        let role = parts
            .headers
            .get("x-user-role")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Missing x-user-role header".into()))
            })?;

        if role != ROLE_ADMIN && role != ROLE_RESIDENT {
            return Err(AppError::Core(CoreError::Unauthorized(format!(
                "Unknown role: {role}"
            ))));
        }

        Ok(AuthUser {
            user_id,
            role: role.to_string(),
        })
    }
}
