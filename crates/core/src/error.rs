use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Room is at full capacity. Kept separate from [`CoreError::Conflict`]
    /// so callers can offer an alternative room instead of a generic retry.
    #[error("Capacity exceeded: {0}")]
    Capacity(String),

    /// Illegal status transition (e.g. re-marking a terminal payment).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
