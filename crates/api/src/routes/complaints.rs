//! Route definitions for the complaint workflow.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::complaints;
use crate::state::AppState;

/// Routes mounted at `/complaints`.
///
/// ```text
/// POST   /               file a complaint (any authenticated principal)
/// GET    /               list with filters (admin)
/// GET    /user/{userId}  a resident's own complaints (or any, for admins)
/// PUT    /{id}/status    set status + admin notes (admin)
/// DELETE /{id}           owner while pending, or admin unconditionally
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(complaints::list).post(complaints::create))
        .route("/user/{user_id}", get(complaints::list_by_user))
        .route("/{id}/status", put(complaints::update_status))
        .route("/{id}", delete(complaints::delete))
}
