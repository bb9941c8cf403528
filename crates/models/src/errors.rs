use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0} was modified concurrently")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ModelError::Validation(msg.into())
    }
}

/// Unique-key violations are caller errors; everything else is a store failure.
pub(crate) fn db(e: sea_orm::DbErr) -> ModelError {
    match e.sql_err() {
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => ModelError::validation("value is already taken"),
        _ => ModelError::Db(e.to_string()),
    }
}
