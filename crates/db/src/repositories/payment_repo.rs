//! Repository for the `payments` table.
//!
//! The ledger is append-plus-transition only: there is no delete method,
//! and status changes go through the pending-guarded [`PaymentRepo::mark`].

use hostelease_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::payment::{CreatePayment, Payment, PaymentSummary};
use crate::repositories::SQL_NOW;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, resident_id, resident_name, amount, payment_type, \
    payment_method, status, due_date, paid_date, created_at, updated_at";

/// Provides ledger operations for payments.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Insert a new due with the resident's name snapshotted.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreatePayment,
        resident_name: &str,
    ) -> Result<Payment, sqlx::Error> {
        let query = format!(
            "INSERT INTO payments
                (resident_id, resident_name, amount, payment_type, payment_method, due_date)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(input.user_id)
            .bind(resident_name)
            .bind(input.amount)
            .bind(&input.payment_type)
            .bind(&input.payment_method)
            .bind(&input.due_date)
            .fetch_one(pool)
            .await
    }

    /// Find a payment by internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments WHERE id = ?");
        sqlx::query_as::<_, Payment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List payments, newest first.
    ///
    /// `search` matches the resident name (case-insensitive substring)
    /// or the resident id as text; `status` is an exact filter;
    /// `resident_id` scopes the list to one resident's entries.
    pub async fn list(
        pool: &SqlitePool,
        search: Option<&str>,
        status: Option<&str>,
        resident_id: Option<DbId>,
    ) -> Result<Vec<Payment>, sqlx::Error> {
        let mut clauses: Vec<&str> = Vec::new();
        if search.is_some() {
            clauses.push("(LOWER(resident_name) LIKE ? OR CAST(resident_id AS TEXT) LIKE ?)");
        }
        if status.is_some() {
            clauses.push("status = ?");
        }
        if resident_id.is_some() {
            clauses.push("resident_id = ?");
        }
        let where_clause = if clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", clauses.join(" AND "))
        };
        let query =
            format!("SELECT {COLUMNS} FROM payments{where_clause} ORDER BY created_at DESC, id DESC");

        let mut q = sqlx::query_as::<_, Payment>(&query);
        if let Some(s) = search {
            let pattern = format!("%{}%", s.to_lowercase());
            q = q.bind(pattern.clone()).bind(pattern);
        }
        if let Some(s) = status {
            q = q.bind(s.to_string());
        }
        if let Some(id) = resident_id {
            q = q.bind(id);
        }
        q.fetch_all(pool).await
    }

    /// Transition a pending payment to a terminal status. `paid_date`
    /// is stamped only when marking paid.
    ///
    /// Returns `None` when the row is missing or no longer pending; the
    /// caller disambiguates.
    pub async fn mark(
        pool: &SqlitePool,
        id: DbId,
        status: &str,
        stamp_paid_date: bool,
    ) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!(
            "UPDATE payments SET
                status = ?,
                paid_date = CASE WHEN ? THEN date('now') ELSE paid_date END,
                updated_at = {SQL_NOW}
             WHERE id = ? AND status = 'pending'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(status)
            .bind(stamp_paid_date)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Aggregate totals over the whole ledger, recomputed per call.
    pub async fn summary(pool: &SqlitePool) -> Result<PaymentSummary, sqlx::Error> {
        sqlx::query_as::<_, PaymentSummary>(
            "SELECT
                COALESCE(SUM(amount), 0) AS total_amount,
                COALESCE(SUM(CASE WHEN status = 'pending' THEN amount ELSE 0 END), 0) AS pending_amount,
                COALESCE(SUM(CASE WHEN status = 'paid' THEN amount ELSE 0 END), 0) AS paid_amount
             FROM payments",
        )
        .fetch_one(pool)
        .await
    }
}
