use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0} was modified concurrently")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(entity.to_string())
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(m) => ServiceError::Validation(m),
            ModelError::NotFound(m) => ServiceError::NotFound(m),
            ModelError::Conflict(m) => ServiceError::Conflict(m),
            ModelError::Db(m) => ServiceError::Db(m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_keep_their_kind() {
        let e = ServiceError::from(ModelError::Conflict("skill".into()));
        assert_eq!(e.to_string(), "skill was modified concurrently");
        assert!(matches!(ServiceError::from(ModelError::validation("x")), ServiceError::Validation(_)));
        assert_eq!(ServiceError::not_found("project").to_string(), "project not found");
    }
}
