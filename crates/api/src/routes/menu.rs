//! Route definitions for the menu catalog.
//!
//! Items and sections are addressed by (day, meal, name) in the request
//! body, so `/item` and `/meal` each carry several verbs.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::menu;
use crate::state::AppState;

/// Routes mounted at `/menu`. Reads are open; mutations are admin-only.
///
/// ```text
/// GET    /         whole catalog, day -> meal -> {time, items}
/// POST   /item     add item
/// PUT    /item     rename item (position preserved)
/// DELETE /item     remove item
/// PUT    /meal     set serving-time text
/// DELETE /meal     remove section and its items
/// GET    /search   case-insensitive item name search (?q=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(menu::catalog))
        .route(
            "/item",
            post(menu::add_item)
                .put(menu::rename_item)
                .delete(menu::remove_item),
        )
        .route("/meal", put(menu::set_meal_time).delete(menu::remove_meal))
        .route("/search", get(menu::search))
}
