//! Guarded occupancy behaviour: assignments never over-fill a room and
//! releases floor at zero, with availability derived throughout.

use hostelease_core::occupancy::{AvailabilityFilter, RoomSortKey};
use hostelease_db::models::room::{CreateRoom, UpdateRoom};
use hostelease_db::repositories::RoomRepo;
use sqlx::SqlitePool;

fn double_room(number: &str) -> CreateRoom {
    CreateRoom {
        room_number: number.to_string(),
        room_type: "double".to_string(),
        capacity: 2,
        price: 8500,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_capacity_two_room_fills_and_refuses_a_third(pool: SqlitePool) {
    let room = RoomRepo::create(&pool, &double_room("101")).await.unwrap();
    assert_eq!(room.current_occupants, 0);
    assert!(room.is_available);

    assert!(RoomRepo::try_assign(&pool, room.id).await.unwrap());
    let after_one = RoomRepo::find_by_id(&pool, room.id).await.unwrap().unwrap();
    assert_eq!(after_one.current_occupants, 1);
    assert!(after_one.is_available, "one of two slots is still free");

    assert!(RoomRepo::try_assign(&pool, room.id).await.unwrap());
    let full = RoomRepo::find_by_id(&pool, room.id).await.unwrap().unwrap();
    assert_eq!(full.current_occupants, 2);
    assert!(!full.is_available);

    // Third assignment must refuse and leave the count unchanged.
    assert!(!RoomRepo::try_assign(&pool, room.id).await.unwrap());
    let still_full = RoomRepo::find_by_id(&pool, room.id).await.unwrap().unwrap();
    assert_eq!(still_full.current_occupants, 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_release_restores_availability_and_floors_at_zero(pool: SqlitePool) {
    let room = RoomRepo::create(&pool, &double_room("102")).await.unwrap();
    RoomRepo::try_assign(&pool, room.id).await.unwrap();
    RoomRepo::try_assign(&pool, room.id).await.unwrap();

    RoomRepo::release(&pool, room.id).await.unwrap();
    let after = RoomRepo::find_by_id(&pool, room.id).await.unwrap().unwrap();
    assert_eq!(after.current_occupants, 1);
    assert!(after.is_available);

    RoomRepo::release(&pool, room.id).await.unwrap();
    RoomRepo::release(&pool, room.id).await.unwrap();
    let floored = RoomRepo::find_by_id(&pool, room.id).await.unwrap().unwrap();
    assert_eq!(floored.current_occupants, 0, "release floors at zero");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_recomputes_availability_from_capacity(pool: SqlitePool) {
    let room = RoomRepo::create(&pool, &double_room("103")).await.unwrap();
    RoomRepo::try_assign(&pool, room.id).await.unwrap();
    RoomRepo::try_assign(&pool, room.id).await.unwrap();

    // Raising capacity on a full room frees it again.
    let patch = UpdateRoom {
        room_number: None,
        room_type: None,
        capacity: Some(3),
        price: None,
        current_occupants: None,
    };
    let updated = RoomRepo::update(&pool, room.id, &patch).await.unwrap().unwrap();
    assert_eq!(updated.capacity, 3);
    assert!(updated.is_available);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_room_number_is_a_conflict(pool: SqlitePool) {
    RoomRepo::create(&pool, &double_room("104")).await.unwrap();
    let err = RoomRepo::create(&pool, &double_room("104")).await.unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert!(db_err.is_unique_violation());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_occupied_room_cannot_be_deleted(pool: SqlitePool) {
    let room = RoomRepo::create(&pool, &double_room("105")).await.unwrap();
    RoomRepo::try_assign(&pool, room.id).await.unwrap();

    assert!(!RoomRepo::delete_if_unoccupied(&pool, room.id).await.unwrap());

    RoomRepo::release(&pool, room.id).await.unwrap();
    assert!(RoomRepo::delete_if_unoccupied(&pool, room.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_filters_and_sorts(pool: SqlitePool) {
    RoomRepo::create(&pool, &double_room("201")).await.unwrap();
    let single = CreateRoom {
        room_number: "105".to_string(),
        room_type: "single".to_string(),
        capacity: 1,
        price: 12000,
    };
    let full = RoomRepo::create(&pool, &single).await.unwrap();
    RoomRepo::try_assign(&pool, full.id).await.unwrap();

    let available = RoomRepo::list(
        &pool,
        None,
        AvailabilityFilter::Available,
        RoomSortKey::RoomNumber,
    )
    .await
    .unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].room_number, "201");

    let by_price = RoomRepo::list(&pool, None, AvailabilityFilter::All, RoomSortKey::Price)
        .await
        .unwrap();
    assert_eq!(by_price[0].room_number, "201", "cheaper room sorts first");

    let searched = RoomRepo::list(
        &pool,
        Some("SING"),
        AvailabilityFilter::All,
        RoomSortKey::RoomNumber,
    )
    .await
    .unwrap();
    assert_eq!(searched.len(), 1, "search is case-insensitive on type");
}
