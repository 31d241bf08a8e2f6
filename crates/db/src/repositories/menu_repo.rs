//! Repository for the menu catalog (`menu_meals` + `menu_items`).
//!
//! Day and meal keys are validated against the closed vocabularies
//! before they reach this layer; here they are plain strings.

use sqlx::SqlitePool;

use crate::models::menu::{MealSection, MenuCatalog, MenuHit, MenuItemRow, MenuMealRow};

/// Provides catalog operations for the weekly menu.
pub struct MenuRepo;

impl MenuRepo {
    /// Assemble the whole catalog: day -> meal -> `{time, items}`, with
    /// item order preserved by the `position` column.
    pub async fn catalog(pool: &SqlitePool) -> Result<MenuCatalog, sqlx::Error> {
        let meals = sqlx::query_as::<_, MenuMealRow>(
            "SELECT day, meal, time FROM menu_meals ORDER BY day, meal",
        )
        .fetch_all(pool)
        .await?;
        let items = sqlx::query_as::<_, MenuItemRow>(
            "SELECT day, meal, name, position FROM menu_items ORDER BY day, meal, position",
        )
        .fetch_all(pool)
        .await?;

        let mut catalog = MenuCatalog::new();
        for row in meals {
            catalog.entry(row.day).or_default().insert(
                row.meal,
                MealSection {
                    time: row.time,
                    items: Vec::new(),
                },
            );
        }
        for row in items {
            if let Some(section) = catalog
                .get_mut(&row.day)
                .and_then(|day| day.get_mut(&row.meal))
            {
                section.items.push(row.name);
            }
        }
        Ok(catalog)
    }

    /// Append an item to a (day, meal) section, creating the section on
    /// first use. A duplicate name within the section violates the
    /// unique constraint and surfaces as a database error.
    pub async fn add_item(
        pool: &SqlitePool,
        day: &str,
        meal: &str,
        name: &str,
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("INSERT OR IGNORE INTO menu_meals (day, meal) VALUES (?, ?)")
            .bind(day)
            .bind(meal)
            .execute(&mut *tx)
            .await?;
        sqlx::query(
            "INSERT INTO menu_items (day, meal, name, position)
             VALUES (?, ?, ?,
                (SELECT COALESCE(MAX(position), -1) + 1 FROM menu_items WHERE day = ? AND meal = ?))",
        )
        .bind(day)
        .bind(meal)
        .bind(name)
        .bind(day)
        .bind(meal)
        .execute(&mut *tx)
        .await?;
        tx.commit().await
    }

    /// Rename an item in place; its position is untouched. A collision
    /// with an existing name surfaces as a database error.
    ///
    /// Returns `false` if `old_name` is not present in the section.
    pub async fn rename_item(
        pool: &SqlitePool,
        day: &str,
        meal: &str,
        old_name: &str,
        new_name: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE menu_items SET name = ? WHERE day = ? AND meal = ? AND name = ?",
        )
        .bind(new_name)
        .bind(day)
        .bind(meal)
        .bind(old_name)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove one item by exact name.
    ///
    /// Returns `true` if the row was deleted.
    pub async fn remove_item(
        pool: &SqlitePool,
        day: &str,
        meal: &str,
        name: &str,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM menu_items WHERE day = ? AND meal = ? AND name = ?")
                .bind(day)
                .bind(meal)
                .bind(name)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set a section's serving-time text, creating the section if absent.
    pub async fn set_meal_time(
        pool: &SqlitePool,
        day: &str,
        meal: &str,
        time: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO menu_meals (day, meal, time) VALUES (?, ?, ?)
             ON CONFLICT(day, meal) DO UPDATE SET time = excluded.time",
        )
        .bind(day)
        .bind(meal)
        .bind(time)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Remove a whole section; its items go with it (cascade).
    ///
    /// Returns `true` if the section existed.
    pub async fn remove_meal(
        pool: &SqlitePool,
        day: &str,
        meal: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM menu_meals WHERE day = ? AND meal = ?")
            .bind(day)
            .bind(meal)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search over all item names.
    pub async fn search(pool: &SqlitePool, term: &str) -> Result<Vec<MenuHit>, sqlx::Error> {
        let pattern = format!("%{}%", term.to_lowercase());
        sqlx::query_as::<_, MenuHit>(
            "SELECT day, meal, name AS item FROM menu_items
             WHERE LOWER(name) LIKE ?
             ORDER BY day, meal, position",
        )
        .bind(pattern)
        .fetch_all(pool)
        .await
    }
}
