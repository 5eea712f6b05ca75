//! Repository for the `planets` table.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use starwars_core::planet::{is_storable_text, CreatePlanet, Planet};
use starwars_core::query::PlanetFilter;
use starwars_core::repository::{ConstraintViolation, PlanetRepository, RepositoryError};
use starwars_core::types::DbId;

use super::errors::{classify_sqlx_error, storage_error};
use crate::models::planet::PlanetRow;

/// Column list for `planets` queries.
const COLUMNS: &str = "id, name, climate, terrain";

/// sqlx-backed [`PlanetRepository`].
#[derive(Clone)]
pub struct PgPlanetRepo {
    pool: PgPool,
}

impl PgPlanetRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Build the `SELECT` for a filter: one bound equality per condition,
/// joined with `AND`, ordered by id.
fn select_matching(filter: &PlanetFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {COLUMNS} FROM planets"));
    for (i, condition) in filter.conditions().iter().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });
        builder.push(condition.column.as_str());
        builder.push(" = ");
        builder.push_bind(condition.value.clone());
    }
    builder.push(" ORDER BY id");
    builder
}

#[async_trait]
impl PlanetRepository for PgPlanetRepo {
    async fn save(&self, input: &CreatePlanet) -> Result<Planet, RepositoryError> {
        if let Some(field) = input.first_unstorable_field() {
            return Err(ConstraintViolation::UnstorableText(field).into());
        }
        let query = format!(
            "INSERT INTO planets (name, climate, terrain) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlanetRow>(&query)
            .bind(&input.name)
            .bind(&input.climate)
            .bind(&input.terrain)
            .fetch_one(&self.pool)
            .await
            .map(Planet::from)
            .map_err(|e| classify_sqlx_error(e, input))
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Planet>, RepositoryError> {
        let query = format!("SELECT {COLUMNS} FROM planets WHERE id = $1");
        let row = sqlx::query_as::<_, PlanetRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(row.map(Planet::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Planet>, RepositoryError> {
        if !is_storable_text(name) {
            return Ok(None);
        }
        let query = format!("SELECT {COLUMNS} FROM planets WHERE name = $1");
        let row = sqlx::query_as::<_, PlanetRow>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(row.map(Planet::from))
    }

    async fn find_all(&self, filter: &PlanetFilter) -> Result<Vec<Planet>, RepositoryError> {
        if !filter.is_satisfiable() {
            return Ok(Vec::new());
        }
        let mut builder = select_matching(filter);
        let rows = builder
            .build_query_as::<PlanetRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(rows.into_iter().map(Planet::from).collect())
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM planets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Planet",
                id,
            });
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        crate::health_check(&self.pool).await.map_err(storage_error)
    }
}
