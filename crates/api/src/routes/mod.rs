pub mod complaints;
pub mod health;
pub mod menu;
pub mod payments;
pub mod residents;
pub mod rooms;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /register                          register (public)
///
/// /admin/rooms                       list, create (admin only)
/// /admin/rooms/{id}                  get, update, delete
/// /admin/rooms/{id}/assign           assign resident (POST)
/// /admin/rooms/{id}/release          release resident (POST)
///
/// /admin/users                       list (admin only)
/// /admin/users/{id}                  get, set status, delete
/// /admin/users/{id}/approve          approve, optionally with a room (PUT)
/// /admin/users/{id}/reject           reject (PUT)
///
/// /payments                          list (authed), create due (admin)
/// /payments/summary                  aggregate totals (admin)
/// /payments/{id}/mark-paid           terminal transition (PUT, admin)
/// /payments/{id}/mark-failed         terminal transition (PUT, admin)
///
/// /complaints                        file (authed), list (admin)
/// /complaints/user/{userId}          a resident's own complaints
/// /complaints/{id}/status            status + notes (PUT, admin)
/// /complaints/{id}                   delete (owner while pending, or admin)
///
/// /menu                              whole catalog (GET)
/// /menu/item                         add, rename, remove (admin)
/// /menu/meal                         serving time, remove section (admin)
/// /menu/search                       item name search (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::registration::register))
        .nest("/admin/rooms", rooms::router())
        .nest("/admin/users", residents::router())
        .nest("/payments", payments::router())
        .nest("/complaints", complaints::router())
        .nest("/menu", menu::router())
}
