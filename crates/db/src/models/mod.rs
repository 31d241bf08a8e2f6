//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Where the entity is patchable, a `Deserialize` update DTO with
//!   all-`Option` fields
//!
//! Wire payloads use the camelCase field names the dashboard clients
//! expect; statuses are stored as their exact wire strings.

pub mod complaint;
pub mod menu;
pub mod payment;
pub mod resident;
pub mod room;
