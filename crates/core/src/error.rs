use crate::repository::{ConstraintViolation, RepositoryError};
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Entity not found: {entity} with name {name}")]
    NameNotFound { entity: &'static str, name: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for CoreError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => CoreError::NotFound { entity, id },
            RepositoryError::Constraint(ConstraintViolation::MissingField(field)) => {
                CoreError::Validation(format!("{field} must not be empty"))
            }
            RepositoryError::Constraint(ConstraintViolation::UnstorableText(field)) => {
                CoreError::Validation(format!("{field} must not contain NUL characters"))
            }
            RepositoryError::Constraint(ConstraintViolation::DuplicateName(name)) => {
                CoreError::Conflict(format!("A planet named '{name}' already exists"))
            }
            RepositoryError::Storage(msg) => CoreError::Internal(msg),
        }
    }
}
