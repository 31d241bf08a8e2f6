//! Route definitions for room management.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::rooms;
use crate::state::AppState;

/// Routes mounted at `/admin/rooms` (all admin-only).
///
/// ```text
/// GET    /                list (search / availability / sort)
/// POST   /                create
/// GET    /{id}            get_by_id
/// PUT    /{id}            update
/// DELETE /{id}            delete (only while unoccupied)
/// POST   /{id}/assign     assign resident
/// POST   /{id}/release    release resident
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(rooms::list).post(rooms::create))
        .route(
            "/{id}",
            get(rooms::get_by_id)
                .put(rooms::update)
                .delete(rooms::delete),
        )
        .route("/{id}/assign", post(rooms::assign))
        .route("/{id}/release", post(rooms::release))
}
