use crate::types::DbId;

/// Domain-level error taxonomy shared by all crates.
///
/// Ownership failures are reported as [`CoreError::NotFound`]: a row the
/// caller does not own is indistinguishable from a row that does not exist,
/// so cross-user probing cannot leak existence.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
