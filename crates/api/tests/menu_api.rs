//! Menu catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{active_resident, body_json, delete_json, get, post_json, put_json, ADMIN};
use serde_json::json;
use sqlx::SqlitePool;

async fn add_item(app: &axum::Router, day: &str, meal: &str, item: &str) {
    let response = post_json(
        app,
        "/api/v1/menu/item",
        Some(ADMIN),
        json!({ "day": day, "meal": meal, "item": item }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn catalog_groups_by_day_and_meal_in_insertion_order(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    add_item(&app, "monday", "breakfast", "Tea").await;
    add_item(&app, "monday", "breakfast", "Poha").await;
    add_item(&app, "monday", "breakfast", "Idli").await;
    add_item(&app, "monday", "lunch", "Dal").await;

    // Catalog is readable without a principal.
    let response = get(&app, "/api/v1/menu").await;
    assert_eq!(response.status(), StatusCode::OK);
    let catalog = body_json(response).await;

    let breakfast = &catalog["monday"]["breakfast"];
    assert_eq!(breakfast["items"], json!(["Tea", "Poha", "Idli"]));
    assert_eq!(breakfast["time"], "");
    assert_eq!(catalog["monday"]["lunch"]["items"], json!(["Dal"]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_item_in_a_section_is_a_conflict(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    add_item(&app, "monday", "breakfast", "Tea").await;

    let response = post_json(
        &app,
        "/api/v1/menu/item",
        Some(ADMIN),
        json!({ "day": "monday", "meal": "breakfast", "item": "Tea" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "'Tea' is already on the monday breakfast menu");

    // The same name in a different section is fine.
    add_item(&app, "monday", "dinner", "Tea").await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_day_or_meal_is_a_validation_error(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/menu/item",
        Some(ADMIN),
        json!({ "day": "funday", "meal": "breakfast", "item": "Tea" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Unknown day: funday");

    let response = post_json(
        &app,
        "/api/v1/menu/item",
        Some(ADMIN),
        json!({ "day": "monday", "meal": "brunch", "item": "Tea" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Unknown meal: brunch");

    let response = post_json(
        &app,
        "/api/v1/menu/item",
        Some(ADMIN),
        json!({ "day": "monday", "meal": "breakfast", "item": "  " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rename_keeps_position_and_checks_collisions(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    add_item(&app, "monday", "breakfast", "Tea").await;
    add_item(&app, "monday", "breakfast", "Poha").await;

    let response = put_json(
        &app,
        "/api/v1/menu/item",
        Some(ADMIN),
        json!({ "day": "monday", "meal": "breakfast", "oldItem": "Tea", "newItem": "Coffee" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let catalog = body_json(get(&app, "/api/v1/menu").await).await;
    assert_eq!(
        catalog["monday"]["breakfast"]["items"],
        json!(["Coffee", "Poha"])
    );

    // Renaming a missing item is a 404.
    let response = put_json(
        &app,
        "/api/v1/menu/item",
        Some(ADMIN),
        json!({ "day": "monday", "meal": "breakfast", "oldItem": "Tea", "newItem": "Chai" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "No item 'Tea' on the monday breakfast menu"
    );

    // Renaming onto an existing name is a conflict.
    let response = put_json(
        &app,
        "/api/v1/menu/item",
        Some(ADMIN),
        json!({ "day": "monday", "meal": "breakfast", "oldItem": "Coffee", "newItem": "Poha" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn remove_item_then_404_on_retry(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    add_item(&app, "monday", "breakfast", "Tea").await;

    let body = json!({ "day": "monday", "meal": "breakfast", "item": "Tea" });
    let response = delete_json(&app, "/api/v1/menu/item", ADMIN, body.clone()).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_json(&app, "/api/v1/menu/item", ADMIN, body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn meal_time_upserts(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    // Setting the time creates the section if absent.
    let response = put_json(
        &app,
        "/api/v1/menu/meal",
        Some(ADMIN),
        json!({ "day": "monday", "meal": "breakfast", "time": "7:30 - 9:00 AM" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["time"], "7:30 - 9:00 AM");

    add_item(&app, "monday", "breakfast", "Tea").await;

    let response = put_json(
        &app,
        "/api/v1/menu/meal",
        Some(ADMIN),
        json!({ "day": "monday", "meal": "breakfast", "time": "8:00 - 9:30 AM" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let catalog = body_json(get(&app, "/api/v1/menu").await).await;
    assert_eq!(catalog["monday"]["breakfast"]["time"], "8:00 - 9:30 AM");
    assert_eq!(catalog["monday"]["breakfast"]["items"], json!(["Tea"]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn removing_a_meal_takes_its_items(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    add_item(&app, "monday", "breakfast", "Tea").await;
    add_item(&app, "monday", "lunch", "Dal").await;

    let response = delete_json(
        &app,
        "/api/v1/menu/meal",
        ADMIN,
        json!({ "day": "monday", "meal": "breakfast" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let catalog = body_json(get(&app, "/api/v1/menu").await).await;
    assert!(catalog["monday"].get("breakfast").is_none());
    assert_eq!(catalog["monday"]["lunch"]["items"], json!(["Dal"]));

    // Deleting an absent section is a 404.
    let response = delete_json(
        &app,
        "/api/v1/menu/meal",
        ADMIN,
        json!({ "day": "monday", "meal": "breakfast" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "No breakfast section on the monday menu"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn search_is_case_insensitive_and_public(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    add_item(&app, "monday", "breakfast", "Masala Tea").await;
    add_item(&app, "tuesday", "dinner", "Tea").await;
    add_item(&app, "monday", "lunch", "Dal").await;

    let response = get(&app, "/api/v1/menu/search?q=tea").await;
    assert_eq!(response.status(), StatusCode::OK);
    let hits = body_json(response).await;
    assert_eq!(hits.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn mutations_require_admin(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let resident_id = active_resident(&app, "asha@example.com").await;

    let response = post_json(
        &app,
        "/api/v1/menu/item",
        Some((resident_id, "resident")),
        json!({ "day": "monday", "meal": "breakfast", "item": "Tea" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["code"], "FORBIDDEN");
}
