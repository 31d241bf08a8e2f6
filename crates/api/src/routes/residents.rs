//! Route definitions for the admission workflow.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::residents;
use crate::state::AppState;

/// Routes mounted at `/admin/users` (all admin-only).
///
/// ```text
/// GET    /               list (search on name / email)
/// GET    /{id}           get_by_id
/// PUT    /{id}           set_status (transition rules apply)
/// DELETE /{id}           delete (+ room release, one transaction)
/// PUT    /{id}/approve   approve, optionally assigning a room
/// PUT    /{id}/reject    reject (+ room release)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(residents::list))
        .route(
            "/{id}",
            get(residents::get_by_id)
                .put(residents::set_status)
                .delete(residents::delete),
        )
        .route("/{id}/approve", put(residents::approve))
        .route("/{id}/reject", put(residents::reject))
}
