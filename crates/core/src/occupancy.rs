//! Room occupancy invariants and list-query vocabulary.
//!
//! The availability flag is *derived*: a room is available iff its
//! occupant count is below capacity. Every mutation path recomputes it
//! through [`is_available`]; no caller sets the flag directly.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Room type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Single,
    Double,
    Triple,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Triple => "triple",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "single" => Some(Self::Single),
            "double" => Some(Self::Double),
            "triple" => Some(Self::Triple),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The availability invariant: `isAvailable == (currentOccupants < capacity)`.
pub fn is_available(current_occupants: i64, capacity: i64) -> bool {
    current_occupants < capacity
}

/// Capacity must be a positive integer.
pub fn validate_capacity(capacity: i64) -> Result<(), CoreError> {
    if capacity <= 0 {
        return Err(CoreError::Validation(
            "Room capacity must be a positive integer".into(),
        ));
    }
    Ok(())
}

/// Monthly price must be non-negative.
pub fn validate_price(price: i64) -> Result<(), CoreError> {
    if price < 0 {
        return Err(CoreError::Validation(
            "Room price must not be negative".into(),
        ));
    }
    Ok(())
}

/// Occupant count may never exceed capacity (nor go negative).
pub fn validate_occupants(current_occupants: i64, capacity: i64) -> Result<(), CoreError> {
    if current_occupants < 0 {
        return Err(CoreError::Validation(
            "Occupant count must not be negative".into(),
        ));
    }
    if current_occupants > capacity {
        return Err(CoreError::Validation(format!(
            "Occupant count {current_occupants} exceeds capacity {capacity}"
        )));
    }
    Ok(())
}

/// Sort key for room listings. Ties are broken by insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RoomSortKey {
    #[serde(rename = "roomNumber")]
    RoomNumber,
    #[serde(rename = "price")]
    Price,
    #[serde(rename = "capacity")]
    Capacity,
}

impl RoomSortKey {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "roomNumber" => Some(Self::RoomNumber),
            "price" => Some(Self::Price),
            "capacity" => Some(Self::Capacity),
            _ => None,
        }
    }
}

impl Default for RoomSortKey {
    fn default() -> Self {
        Self::RoomNumber
    }
}

/// Availability filter for room listings (`all` / `available` / `occupied`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityFilter {
    All,
    Available,
    Occupied,
}

impl AvailabilityFilter {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "available" => Some(Self::Available),
            "occupied" => Some(Self::Occupied),
            _ => None,
        }
    }
}

impl Default for AvailabilityFilter {
    fn default() -> Self {
        Self::All
    }
}
