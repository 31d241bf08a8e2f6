//! Menu catalog model types.
//!
//! The catalog is served as a nested map: day -> meal -> section. Item
//! order inside a section is the insertion order (the `position` column).

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::FromRow;

/// One meal section: serving-time text plus ordered item names.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MealSection {
    pub time: String,
    pub items: Vec<String>,
}

/// Whole catalog keyed day -> meal.
pub type MenuCatalog = BTreeMap<String, BTreeMap<String, MealSection>>;

/// Row shape used when assembling the catalog.
#[derive(Debug, Clone, FromRow)]
pub struct MenuMealRow {
    pub day: String,
    pub meal: String,
    pub time: String,
}

/// Row shape for a single item.
#[derive(Debug, Clone, FromRow)]
pub struct MenuItemRow {
    pub day: String,
    pub meal: String,
    pub name: String,
    pub position: i64,
}

/// A search hit: where a matching item name lives.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MenuHit {
    pub day: String,
    pub meal: String,
    pub item: String,
}
