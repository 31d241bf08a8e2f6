//! Repository for the `complaints` table.

use hostelease_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::complaint::Complaint;
use crate::repositories::SQL_NOW;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, resident_id, resident_name, room, title, description, \
    category, priority, status, admin_notes, created_at, updated_at";

/// Insert shape with principal-derived fields already resolved.
#[derive(Debug)]
pub struct NewComplaint<'a> {
    pub resident_id: DbId,
    pub resident_name: &'a str,
    pub room: Option<&'a str>,
    pub title: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub priority: &'a str,
}

/// Provides CRUD operations for complaints.
pub struct ComplaintRepo;

impl ComplaintRepo {
    /// File a new complaint. Status starts `pending`.
    pub async fn create(
        pool: &SqlitePool,
        input: &NewComplaint<'_>,
    ) -> Result<Complaint, sqlx::Error> {
        let query = format!(
            "INSERT INTO complaints
                (resident_id, resident_name, room, title, description, category, priority)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(input.resident_id)
            .bind(input.resident_name)
            .bind(input.room)
            .bind(input.title)
            .bind(input.description)
            .bind(input.category)
            .bind(input.priority)
            .fetch_one(pool)
            .await
    }

    /// Find a complaint by internal ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Complaint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM complaints WHERE id = ?");
        sqlx::query_as::<_, Complaint>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List complaints, newest first. `search` matches title,
    /// description, resident name (case-insensitive substring), or the
    /// resident id as text; `status` and `priority` are exact filters.
    pub async fn list(
        pool: &SqlitePool,
        search: Option<&str>,
        status: Option<&str>,
        priority: Option<&str>,
    ) -> Result<Vec<Complaint>, sqlx::Error> {
        let mut clauses: Vec<&str> = Vec::new();
        if search.is_some() {
            clauses.push(
                "(LOWER(title) LIKE ? OR LOWER(description) LIKE ? \
                 OR LOWER(resident_name) LIKE ? OR CAST(resident_id AS TEXT) LIKE ?)",
            );
        }
        if status.is_some() {
            clauses.push("status = ?");
        }
        if priority.is_some() {
            clauses.push("priority = ?");
        }
        let where_clause = if clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", clauses.join(" AND "))
        };
        let query = format!(
            "SELECT {COLUMNS} FROM complaints{where_clause} ORDER BY created_at DESC, id DESC"
        );

        let mut q = sqlx::query_as::<_, Complaint>(&query);
        if let Some(s) = search {
            let pattern = format!("%{}%", s.to_lowercase());
            q = q
                .bind(pattern.clone())
                .bind(pattern.clone())
                .bind(pattern.clone())
                .bind(pattern);
        }
        if let Some(s) = status {
            q = q.bind(s.to_string());
        }
        if let Some(p) = priority {
            q = q.bind(p.to_string());
        }
        q.fetch_all(pool).await
    }

    /// List one resident's complaints, newest first.
    pub async fn list_by_resident(
        pool: &SqlitePool,
        resident_id: DbId,
    ) -> Result<Vec<Complaint>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM complaints
             WHERE resident_id = ?
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(resident_id)
            .fetch_all(pool)
            .await
    }

    /// Set status and, when provided, admin notes.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &SqlitePool,
        id: DbId,
        status: &str,
        admin_notes: Option<&str>,
    ) -> Result<Option<Complaint>, sqlx::Error> {
        let query = format!(
            "UPDATE complaints SET
                status = ?,
                admin_notes = COALESCE(?, admin_notes),
                updated_at = {SQL_NOW}
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(status)
            .bind(admin_notes)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a complaint. Authorization happens in the handler.
    ///
    /// Returns `true` if the row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM complaints WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
