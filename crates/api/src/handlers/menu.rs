//! Handlers for the `/menu` catalog.
//!
//! Item and section operations are addressed by (day, meal, name) in
//! the request body rather than by numeric id, matching the dashboard
//! clients. Day and meal keys are validated against the closed
//! vocabularies before touching the store.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use hostelease_core::error::CoreError;
use hostelease_core::menu::{validate_item_name, Meal, MenuDay};
use hostelease_db::models::menu::{MenuCatalog, MenuHit};
use hostelease_db::repositories::MenuRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Body addressing one item within a section.
#[derive(Debug, Deserialize)]
pub struct ItemRequest {
    pub day: String,
    pub meal: String,
    pub item: String,
}

/// Body for renaming an item in place.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameItemRequest {
    pub day: String,
    pub meal: String,
    pub old_item: String,
    pub new_item: String,
}

/// Body for setting a section's serving time.
#[derive(Debug, Deserialize, Serialize)]
pub struct MealTimeRequest {
    pub day: String,
    pub meal: String,
    pub time: String,
}

/// Body addressing a whole section.
#[derive(Debug, Deserialize)]
pub struct MealRequest {
    pub day: String,
    pub meal: String,
}

/// Query for item search.
#[derive(Debug, Deserialize)]
pub struct MenuSearchParams {
    pub q: String,
}

/// Echo of a successful item mutation.
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub day: String,
    pub meal: String,
    pub item: String,
}

fn parse_day(day: &str) -> Result<MenuDay, AppError> {
    MenuDay::parse(day)
        .ok_or_else(|| AppError::Core(CoreError::Validation(format!("Unknown day: {day}"))))
}

fn parse_meal(meal: &str) -> Result<Meal, AppError> {
    Meal::parse(meal)
        .ok_or_else(|| AppError::Core(CoreError::Validation(format!("Unknown meal: {meal}"))))
}

/// GET /api/v1/menu
pub async fn catalog(State(state): State<AppState>) -> AppResult<Json<MenuCatalog>> {
    Ok(Json(MenuRepo::catalog(&state.pool).await?))
}

/// POST /api/v1/menu/item
///
/// Appends an item to a (day, meal) section. Names are case-sensitive
/// and must be unique within the section.
pub async fn add_item(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(body): Json<ItemRequest>,
) -> AppResult<(StatusCode, Json<ItemResponse>)> {
    let day = parse_day(&body.day)?;
    let meal = parse_meal(&body.meal)?;
    validate_item_name(&body.item)?;

    MenuRepo::add_item(&state.pool, day.as_str(), meal.as_str(), &body.item)
        .await
        .map_err(|e| duplicate_item_error(e, &body.item, day, meal))?;
    Ok((
        StatusCode::CREATED,
        Json(ItemResponse {
            day: day.to_string(),
            meal: meal.to_string(),
            item: body.item,
        }),
    ))
}

/// PUT /api/v1/menu/item
///
/// Renames an item in place, keeping its position in the section.
pub async fn rename_item(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(body): Json<RenameItemRequest>,
) -> AppResult<Json<ItemResponse>> {
    let day = parse_day(&body.day)?;
    let meal = parse_meal(&body.meal)?;
    validate_item_name(&body.new_item)?;

    let renamed = MenuRepo::rename_item(
        &state.pool,
        day.as_str(),
        meal.as_str(),
        &body.old_item,
        &body.new_item,
    )
    .await
    .map_err(|e| duplicate_item_error(e, &body.new_item, day, meal))?;
    if !renamed {
        return Err(missing_item_error(&body.old_item, day, meal));
    }
    Ok(Json(ItemResponse {
        day: day.to_string(),
        meal: meal.to_string(),
        item: body.new_item,
    }))
}

/// DELETE /api/v1/menu/item
pub async fn remove_item(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(body): Json<ItemRequest>,
) -> AppResult<StatusCode> {
    let day = parse_day(&body.day)?;
    let meal = parse_meal(&body.meal)?;

    if !MenuRepo::remove_item(&state.pool, day.as_str(), meal.as_str(), &body.item).await? {
        return Err(missing_item_error(&body.item, day, meal));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/menu/meal
///
/// Sets a section's serving-time text, creating the section if absent.
pub async fn set_meal_time(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(body): Json<MealTimeRequest>,
) -> AppResult<Json<MealTimeRequest>> {
    let day = parse_day(&body.day)?;
    let meal = parse_meal(&body.meal)?;

    MenuRepo::set_meal_time(&state.pool, day.as_str(), meal.as_str(), &body.time).await?;
    Ok(Json(MealTimeRequest {
        day: day.to_string(),
        meal: meal.to_string(),
        time: body.time,
    }))
}

/// DELETE /api/v1/menu/meal
///
/// Removes a whole section; its items go with it.
pub async fn remove_meal(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Json(body): Json<MealRequest>,
) -> AppResult<StatusCode> {
    let day = parse_day(&body.day)?;
    let meal = parse_meal(&body.meal)?;

    if !MenuRepo::remove_meal(&state.pool, day.as_str(), meal.as_str()).await? {
        return Err(AppError::NotFound(format!(
            "No {meal} section on the {day} menu"
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/menu/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<MenuSearchParams>,
) -> AppResult<Json<Vec<MenuHit>>> {
    Ok(Json(MenuRepo::search(&state.pool, &params.q).await?))
}

fn duplicate_item_error(err: sqlx::Error, item: &str, day: MenuDay, meal: Meal) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => AppError::Core(
            CoreError::Conflict(format!("'{item}' is already on the {day} {meal} menu")),
        ),
        _ => AppError::Database(err),
    }
}

fn missing_item_error(item: &str, day: MenuDay, meal: Meal) -> AppError {
    AppError::NotFound(format!("No item '{item}' on the {day} {meal} menu"))
}
