//! Planet service: thin orchestration over a [`PlanetRepository`].

use std::sync::Arc;

use crate::error::CoreError;
use crate::planet::{CreatePlanet, Planet};
use crate::query::{PlanetExample, PlanetFilter};
use crate::repository::PlanetRepository;
use crate::types::DbId;

/// Service for planet operations.
#[derive(Clone)]
pub struct PlanetService {
    repo: Arc<dyn PlanetRepository>,
}

impl PlanetService {
    pub fn new(repo: Arc<dyn PlanetRepository>) -> Self {
        Self { repo }
    }

    /// Persist a new planet.
    ///
    /// Empty required fields surface as [`CoreError::Validation`], a taken
    /// name as [`CoreError::Conflict`].
    pub async fn create(&self, input: &CreatePlanet) -> Result<Planet, CoreError> {
        let planet = self.repo.save(input).await?;
        tracing::info!(planet_id = planet.id, name = %planet.name, "Planet created");
        Ok(planet)
    }

    pub async fn get(&self, id: DbId) -> Result<Option<Planet>, CoreError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<Planet>, CoreError> {
        Ok(self.repo.find_by_name(name).await?)
    }

    /// List planets, optionally filtered by terrain and/or climate.
    pub async fn list(
        &self,
        terrain: Option<String>,
        climate: Option<String>,
    ) -> Result<Vec<Planet>, CoreError> {
        let example = PlanetExample::from_terrain_and_climate(terrain, climate);
        let filter = PlanetFilter::from_example(&example);
        tracing::debug!(conditions = filter.conditions().len(), "Listing planets");
        Ok(self.repo.find_all(&filter).await?)
    }

    /// Delete a planet; [`CoreError::NotFound`] if the id does not exist.
    pub async fn remove(&self, id: DbId) -> Result<(), CoreError> {
        self.repo.delete_by_id(id).await?;
        tracing::info!(planet_id = id, "Planet deleted");
        Ok(())
    }

    pub async fn health(&self) -> Result<(), CoreError> {
        Ok(self.repo.health_check().await?)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use super::*;
    use crate::repository::RepositoryError;
    use crate::testing::InMemoryPlanetRepo;

    fn service() -> PlanetService {
        PlanetService::new(Arc::new(InMemoryPlanetRepo::new()))
    }

    async fn seeded() -> PlanetService {
        let service = service();
        for (name, climate, terrain) in [
            ("Tatooine", "arid", "desert"),
            ("Alderaan", "temperate", "grasslands, mountains"),
            ("Yavin IV", "temperate, tropical", "jungle, rainforests"),
        ] {
            service
                .create(&CreatePlanet::new(name, climate, terrain))
                .await
                .unwrap();
        }
        service
    }

    /// Repository whose backend is always down.
    struct UnreachableRepo;

    #[async_trait]
    impl PlanetRepository for UnreachableRepo {
        async fn save(&self, _: &CreatePlanet) -> Result<Planet, RepositoryError> {
            Err(RepositoryError::Storage("connection refused".into()))
        }
        async fn find_by_id(&self, _: DbId) -> Result<Option<Planet>, RepositoryError> {
            Err(RepositoryError::Storage("connection refused".into()))
        }
        async fn find_by_name(&self, _: &str) -> Result<Option<Planet>, RepositoryError> {
            Err(RepositoryError::Storage("connection refused".into()))
        }
        async fn find_all(&self, _: &PlanetFilter) -> Result<Vec<Planet>, RepositoryError> {
            Err(RepositoryError::Storage("connection refused".into()))
        }
        async fn delete_by_id(&self, _: DbId) -> Result<(), RepositoryError> {
            Err(RepositoryError::Storage("connection refused".into()))
        }
        async fn health_check(&self) -> Result<(), RepositoryError> {
            Err(RepositoryError::Storage("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn create_returns_planet_with_id() {
        let service = service();
        let input = CreatePlanet::new("Tatooine", "arid", "desert");

        let planet = service.create(&input).await.unwrap();

        assert_eq!(planet, input.into_planet(planet.id));
    }

    #[tokio::test]
    async fn create_with_invalid_data_fails_validation() {
        let service = service();

        let err = service.create(&CreatePlanet::default()).await.unwrap_err();

        assert_matches!(err, CoreError::Validation(_));
        assert!(service.list(None, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_with_existing_name_conflicts() {
        let service = seeded().await;

        let err = service
            .create(&CreatePlanet::new("Tatooine", "temperate", "ocean"))
            .await
            .unwrap_err();

        assert_matches!(err, CoreError::Conflict(_));
        let original = service.get_by_name("Tatooine").await.unwrap().unwrap();
        assert_eq!(original.climate, "arid");
    }

    #[tokio::test]
    async fn get_round_trips_created_planet() {
        let service = service();
        let created = service
            .create(&CreatePlanet::new("Hoth", "frozen", "tundra"))
            .await
            .unwrap();

        let fetched = service.get(created.id).await.unwrap();

        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn get_unknown_id_is_empty() {
        assert_eq!(service().get(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn get_by_name_finds_planet() {
        let service = seeded().await;

        let planet = service.get_by_name("Alderaan").await.unwrap().unwrap();

        assert_eq!(planet.terrain, "grasslands, mountains");
    }

    #[tokio::test]
    async fn get_by_unknown_name_is_empty() {
        assert_eq!(service().get_by_name("Kamino").await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_without_filters_returns_all() {
        let service = seeded().await;

        let planets = service.list(None, None).await.unwrap();

        let names: Vec<_> = planets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Tatooine", "Alderaan", "Yavin IV"]);
    }

    #[tokio::test]
    async fn list_filters_by_terrain_and_climate() {
        let service = seeded().await;

        let planets = service
            .list(Some("desert".into()), Some("arid".into()))
            .await
            .unwrap();

        assert_eq!(planets.len(), 1);
        assert_eq!(planets[0].name, "Tatooine");
    }

    #[tokio::test]
    async fn list_with_no_match_is_empty() {
        let service = seeded().await;

        let planets = service.list(Some("ocean".into()), None).await.unwrap();

        assert!(planets.is_empty());
    }

    #[tokio::test]
    async fn remove_existing_planet() {
        let service = seeded().await;
        let planet = service.get_by_name("Tatooine").await.unwrap().unwrap();

        service.remove(planet.id).await.unwrap();

        assert_eq!(service.get(planet.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn remove_unknown_id_is_not_found() {
        let service = seeded().await;

        let err = service.remove(99).await.unwrap_err();

        assert_matches!(err, CoreError::NotFound { entity: "Planet", id: 99 });
        assert_eq!(service.list(None, None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn storage_failures_are_internal() {
        let service = PlanetService::new(Arc::new(UnreachableRepo));

        assert_matches!(service.get(1).await, Err(CoreError::Internal(_)));
        assert_matches!(service.health().await, Err(CoreError::Internal(_)));
    }
}
