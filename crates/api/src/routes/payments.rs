//! Route definitions for the payment ledger.
//!
//! There is deliberately no DELETE route: the ledger is an audit trail.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::payments;
use crate::state::AppState;

/// Routes mounted at `/payments`.
///
/// ```text
/// GET  /                  list (admin: all; resident: own entries)
/// POST /                  create due (admin)
/// GET  /summary           aggregate totals (admin)
/// PUT  /{id}/mark-paid    terminal transition (admin)
/// PUT  /{id}/mark-failed  terminal transition (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(payments::list).post(payments::create))
        .route("/summary", get(payments::summary))
        .route("/{id}/mark-paid", put(payments::mark_paid))
        .route("/{id}/mark-failed", put(payments::mark_failed))
}
