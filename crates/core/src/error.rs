//! Domain failures raised outside the store.
//!
//! Field validation lives in `validator::ValidationErrors` and constraint
//! violations surface as `sqlx::Error`; this enum covers the rest.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Absent, or owned by another user. The two are never told apart.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Missing, malformed, or expired credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but refused: locked or deactivated account.
    #[error("Forbidden: {0}")]
    Forbidden(String),
}
