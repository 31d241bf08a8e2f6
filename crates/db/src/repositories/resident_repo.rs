//! Repository for the `residents` table.

use hostelease_core::types::DbId;
use sqlx::{SqliteExecutor, SqlitePool};

use crate::models::resident::{CreateResident, Resident};
use crate::repositories::{RoomRepo, SQL_NOW};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, email, phone, password_hash, \
    role, status, room_id, check_in_date, address, city, state, profession, \
    company_name, emergency_contact, id_proof, room_preference, \
    special_requirements, created_at, updated_at";

/// Provides CRUD and admission operations for residents.
pub struct ResidentRepo;

impl ResidentRepo {
    /// Insert a new resident. Status defaults to `Pending`, role to
    /// `resident`, and no room is held.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateResident,
    ) -> Result<Resident, sqlx::Error> {
        let query = format!(
            "INSERT INTO residents
                (first_name, last_name, email, phone, password_hash, check_in_date,
                 address, city, state, profession, company_name, emergency_contact,
                 id_proof, room_preference, special_requirements)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resident>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.password_hash)
            .bind(&input.check_in_date)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.profession)
            .bind(&input.company_name)
            .bind(&input.emergency_contact)
            .bind(&input.id_proof)
            .bind(&input.room_preference)
            .bind(&input.special_requirements)
            .fetch_one(pool)
            .await
    }

    /// Find a resident by internal ID.
    pub async fn find_by_id(
        executor: impl SqliteExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Resident>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM residents WHERE id = ?");
        sqlx::query_as::<_, Resident>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a resident by email (case-sensitive).
    pub async fn find_by_email(
        pool: &SqlitePool,
        email: &str,
    ) -> Result<Option<Resident>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM residents WHERE email = ?");
        sqlx::query_as::<_, Resident>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List residents, newest first, with optional case-insensitive
    /// search on first name, last name, or email.
    pub async fn list(
        pool: &SqlitePool,
        search: Option<&str>,
    ) -> Result<Vec<Resident>, sqlx::Error> {
        let query = if search.is_some() {
            format!(
                "SELECT {COLUMNS} FROM residents
                 WHERE LOWER(first_name) LIKE ? OR LOWER(last_name) LIKE ? OR LOWER(email) LIKE ?
                 ORDER BY created_at DESC, id DESC"
            )
        } else {
            format!("SELECT {COLUMNS} FROM residents ORDER BY created_at DESC, id DESC")
        };
        let mut q = sqlx::query_as::<_, Resident>(&query);
        if let Some(s) = search {
            let pattern = format!("%{}%", s.to_lowercase());
            q = q.bind(pattern.clone()).bind(pattern.clone()).bind(pattern);
        }
        q.fetch_all(pool).await
    }

    /// Set admission status and room association in one statement.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_status_and_room(
        executor: impl SqliteExecutor<'_>,
        id: DbId,
        status: &str,
        room_id: Option<DbId>,
    ) -> Result<Option<Resident>, sqlx::Error> {
        let query = format!(
            "UPDATE residents SET status = ?, room_id = ?, updated_at = {SQL_NOW}
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resident>(&query)
            .bind(status)
            .bind(room_id)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Delete a resident and release any held room, as one transaction.
    ///
    /// Ledger entries and complaints keep their name snapshots; their
    /// resident references are nulled by the foreign keys.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn delete_with_release(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let Some(resident) = Self::find_by_id(&mut *tx, id).await? else {
            return Ok(false);
        };
        if let Some(room_id) = resident.room_id {
            RoomRepo::release(&mut *tx, room_id).await?;
        }
        sqlx::query("DELETE FROM residents WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(true)
    }
}
