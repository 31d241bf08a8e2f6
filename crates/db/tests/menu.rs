//! Menu catalog behaviour: ordering, duplicate names, renames, and
//! section lifecycle.

use hostelease_db::repositories::MenuRepo;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "./migrations")]
async fn test_items_keep_insertion_order(pool: SqlitePool) {
    MenuRepo::add_item(&pool, "monday", "breakfast", "Tea").await.unwrap();
    MenuRepo::add_item(&pool, "monday", "breakfast", "Poha").await.unwrap();
    MenuRepo::add_item(&pool, "monday", "breakfast", "Idli").await.unwrap();

    let catalog = MenuRepo::catalog(&pool).await.unwrap();
    let section = &catalog["monday"]["breakfast"];
    assert_eq!(section.items, vec!["Tea", "Poha", "Idli"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_name_in_same_section_is_a_conflict(pool: SqlitePool) {
    MenuRepo::add_item(&pool, "monday", "breakfast", "Tea").await.unwrap();
    let err = MenuRepo::add_item(&pool, "monday", "breakfast", "Tea")
        .await
        .unwrap_err();
    assert!(err.as_database_error().unwrap().is_unique_violation());

    // Same name in another meal is fine.
    MenuRepo::add_item(&pool, "monday", "dinner", "Tea").await.unwrap();
}

#[sqlx::test(migrations = "./migrations")]
async fn test_rename_preserves_position_and_detects_collisions(pool: SqlitePool) {
    MenuRepo::add_item(&pool, "monday", "breakfast", "Tea").await.unwrap();
    MenuRepo::add_item(&pool, "monday", "breakfast", "Poha").await.unwrap();

    assert!(MenuRepo::rename_item(&pool, "monday", "breakfast", "Tea", "Coffee")
        .await
        .unwrap());
    let catalog = MenuRepo::catalog(&pool).await.unwrap();
    assert_eq!(catalog["monday"]["breakfast"].items, vec!["Coffee", "Poha"]);

    // Renaming something absent reports false.
    assert!(!MenuRepo::rename_item(&pool, "monday", "breakfast", "Tea", "Chai")
        .await
        .unwrap());

    // Renaming onto an existing name is a conflict.
    let err = MenuRepo::rename_item(&pool, "monday", "breakfast", "Coffee", "Poha")
        .await
        .unwrap_err();
    assert!(err.as_database_error().unwrap().is_unique_violation());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_meal_time_upsert_and_section_cascade(pool: SqlitePool) {
    MenuRepo::set_meal_time(&pool, "monday", "breakfast", "7:30 - 9:00").await.unwrap();
    MenuRepo::add_item(&pool, "monday", "breakfast", "Tea").await.unwrap();
    MenuRepo::set_meal_time(&pool, "monday", "breakfast", "8:00 - 9:30").await.unwrap();

    let catalog = MenuRepo::catalog(&pool).await.unwrap();
    let section = &catalog["monday"]["breakfast"];
    assert_eq!(section.time, "8:00 - 9:30");
    assert_eq!(section.items, vec!["Tea"]);

    assert!(MenuRepo::remove_meal(&pool, "monday", "breakfast").await.unwrap());
    let catalog = MenuRepo::catalog(&pool).await.unwrap();
    assert!(catalog.get("monday").is_none_or(|day| !day.contains_key("breakfast")));
    let hits = MenuRepo::search(&pool, "tea").await.unwrap();
    assert!(hits.is_empty(), "cascade removed the section's items");

    assert!(!MenuRepo::remove_meal(&pool, "monday", "breakfast").await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_item_removal_and_search(pool: SqlitePool) {
    MenuRepo::add_item(&pool, "monday", "breakfast", "Masala Tea").await.unwrap();
    MenuRepo::add_item(&pool, "friday", "dinner", "Paneer Tikka").await.unwrap();

    let hits = MenuRepo::search(&pool, "TEA").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].day, "monday");
    assert_eq!(hits[0].meal, "breakfast");
    assert_eq!(hits[0].item, "Masala Tea");

    assert!(MenuRepo::remove_item(&pool, "monday", "breakfast", "Masala Tea")
        .await
        .unwrap());
    assert!(!MenuRepo::remove_item(&pool, "monday", "breakfast", "Masala Tea")
        .await
        .unwrap());
}
