//! Repository for the `rooms` table.

use hostelease_core::occupancy::{AvailabilityFilter, RoomSortKey};
use hostelease_core::types::DbId;
use sqlx::{SqliteExecutor, SqlitePool};

use crate::models::room::{CreateRoom, Room, UpdateRoom};
use crate::repositories::SQL_NOW;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, room_number, room_type, capacity, price, \
    current_occupants, is_available, created_at, updated_at";

/// Provides CRUD and occupancy operations for rooms.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a new room. Occupancy starts at zero, so a fresh room is
    /// always available (capacity is validated positive before insert).
    pub async fn create(pool: &SqlitePool, input: &CreateRoom) -> Result<Room, sqlx::Error> {
        let query = format!(
            "INSERT INTO rooms (room_number, room_type, capacity, price, current_occupants, is_available)
             VALUES (?, ?, ?, ?, 0, 1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(&input.room_number)
            .bind(&input.room_type)
            .bind(input.capacity)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Find a room by internal ID.
    pub async fn find_by_id(
        executor: impl SqliteExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = ?");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List rooms with optional search (case-insensitive substring on
    /// room number or type), availability filter, and sort key. Ties
    /// break by insertion order.
    pub async fn list(
        pool: &SqlitePool,
        search: Option<&str>,
        availability: AvailabilityFilter,
        sort: RoomSortKey,
    ) -> Result<Vec<Room>, sqlx::Error> {
        let mut clauses: Vec<&str> = Vec::new();
        if search.is_some() {
            clauses.push("(LOWER(room_number) LIKE ? OR LOWER(room_type) LIKE ?)");
        }
        match availability {
            AvailabilityFilter::All => {}
            AvailabilityFilter::Available => clauses.push("is_available = 1"),
            AvailabilityFilter::Occupied => clauses.push("is_available = 0"),
        }
        let where_clause = if clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", clauses.join(" AND "))
        };
        let order_column = match sort {
            RoomSortKey::RoomNumber => "room_number",
            RoomSortKey::Price => "price",
            RoomSortKey::Capacity => "capacity",
        };
        let query =
            format!("SELECT {COLUMNS} FROM rooms{where_clause} ORDER BY {order_column}, id");

        let mut q = sqlx::query_as::<_, Room>(&query);
        if let Some(s) = search {
            let pattern = format!("%{}%", s.to_lowercase());
            q = q.bind(pattern.clone()).bind(pattern);
        }
        q.fetch_all(pool).await
    }

    /// Update a room. Only non-`None` fields in `input` are applied;
    /// availability is always recomputed from the effective count and
    /// capacity, never taken from the caller.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateRoom,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!(
            "UPDATE rooms SET
                room_number = COALESCE(?, room_number),
                room_type = COALESCE(?, room_type),
                capacity = COALESCE(?, capacity),
                price = COALESCE(?, price),
                current_occupants = COALESCE(?, current_occupants),
                is_available = CASE
                    WHEN COALESCE(?, current_occupants) < COALESCE(?, capacity) THEN 1
                    ELSE 0
                END,
                updated_at = {SQL_NOW}
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(&input.room_number)
            .bind(&input.room_type)
            .bind(input.capacity)
            .bind(input.price)
            .bind(input.current_occupants)
            .bind(input.current_occupants)
            .bind(input.capacity)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a room, but only while it is unoccupied.
    ///
    /// Returns `true` if the row was deleted.
    pub async fn delete_if_unoccupied(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = ? AND current_occupants = 0")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Guarded occupancy increment: succeeds only while the room has a
    /// free slot, so concurrent assignments cannot over-fill it.
    ///
    /// Returns `false` when the room is full (or missing).
    pub async fn try_assign(
        executor: impl SqliteExecutor<'_>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "UPDATE rooms SET
                current_occupants = current_occupants + 1,
                is_available = CASE WHEN current_occupants + 1 < capacity THEN 1 ELSE 0 END,
                updated_at = {SQL_NOW}
             WHERE id = ? AND current_occupants < capacity"
        );
        let result = sqlx::query(&query).bind(id).execute(executor).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Occupancy decrement, floored at zero, with availability recomputed.
    pub async fn release(executor: impl SqliteExecutor<'_>, id: DbId) -> Result<(), sqlx::Error> {
        let query = format!(
            "UPDATE rooms SET
                current_occupants = MAX(current_occupants - 1, 0),
                is_available = CASE WHEN MAX(current_occupants - 1, 0) < capacity THEN 1 ELSE 0 END,
                updated_at = {SQL_NOW}
             WHERE id = ?"
        );
        sqlx::query(&query).bind(id).execute(executor).await?;
        Ok(())
    }
}
