//! In-memory [`PlanetRepository`] for tests.
//!
//! Enforces the same constraints as the PostgreSQL schema: non-empty
//! required fields and a unique name.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::planet::{CreatePlanet, Planet};
use crate::query::PlanetFilter;
use crate::repository::{ConstraintViolation, PlanetRepository, RepositoryError};
use crate::types::DbId;

#[derive(Default)]
struct Store {
    next_id: DbId,
    planets: Vec<Planet>,
}

/// Vec-backed planet store. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct InMemoryPlanetRepo {
    store: Mutex<Store>,
}

impl InMemoryPlanetRepo {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl PlanetRepository for InMemoryPlanetRepo {
    async fn save(&self, input: &CreatePlanet) -> Result<Planet, RepositoryError> {
        if let Some(field) = input.first_missing_field() {
            return Err(ConstraintViolation::MissingField(field).into());
        }
        if let Some(field) = input.first_unstorable_field() {
            return Err(ConstraintViolation::UnstorableText(field).into());
        }

        let mut store = self.lock();
        if store.planets.iter().any(|p| p.name == input.name) {
            return Err(ConstraintViolation::DuplicateName(input.name.clone()).into());
        }

        store.next_id += 1;
        let planet = input.clone().into_planet(store.next_id);
        store.planets.push(planet.clone());
        Ok(planet)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Planet>, RepositoryError> {
        Ok(self.lock().planets.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Planet>, RepositoryError> {
        Ok(self.lock().planets.iter().find(|p| p.name == name).cloned())
    }

    async fn find_all(&self, filter: &PlanetFilter) -> Result<Vec<Planet>, RepositoryError> {
        Ok(self
            .lock()
            .planets
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), RepositoryError> {
        let mut store = self.lock();
        let before = store.planets.len();
        store.planets.retain(|p| p.id != id);
        if store.planets.len() == before {
            return Err(RepositoryError::NotFound {
                entity: "Planet",
                id,
            });
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
