//! Persistence port for planets.
//!
//! Implementations translate backend-specific failures into
//! [`RepositoryError`] so callers never see storage types.

use async_trait::async_trait;

use crate::planet::{CreatePlanet, Planet};
use crate::query::PlanetFilter;
use crate::types::DbId;

/// A storage-level constraint that rejected a write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintViolation {
    /// A required column was empty or null.
    #[error("required field '{0}' is empty")]
    MissingField(&'static str),

    /// A field held a character the column type cannot store (U+0000).
    #[error("field '{0}' contains a NUL character")]
    UnstorableText(&'static str),

    /// The unique constraint on `name` was violated.
    #[error("name '{0}' is already taken")]
    DuplicateName(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Constraint violation: {0}")]
    Constraint(#[from] ConstraintViolation),

    /// Backend failure (connectivity, unexpected SQL error). Never retried.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Durable storage and retrieval of planets.
#[async_trait]
pub trait PlanetRepository: Send + Sync {
    /// Insert a new planet and return it with its assigned id.
    ///
    /// Nothing is persisted when a constraint rejects the row.
    async fn save(&self, input: &CreatePlanet) -> Result<Planet, RepositoryError>;

    /// Returns `None` when no planet has this id.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Planet>, RepositoryError>;

    /// Returns `None` when no planet has this name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Planet>, RepositoryError>;

    /// All planets matching `filter`, ordered by id.
    async fn find_all(&self, filter: &PlanetFilter) -> Result<Vec<Planet>, RepositoryError>;

    /// Delete by id. Fails with [`RepositoryError::NotFound`] if absent.
    async fn delete_by_id(&self, id: DbId) -> Result<(), RepositoryError>;

    /// Verify the backend is reachable.
    async fn health_check(&self) -> Result<(), RepositoryError>;
}
