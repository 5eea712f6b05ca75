//! Handlers for the `/planets` resource.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use starwars_core::error::CoreError;
use starwars_core::planet::{validate_create_planet, CreatePlanet, Planet};
use starwars_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::query::PlanetListParams;
use crate::state::AppState;

/// Unwrap a numeric id path segment, reporting parse failures as JSON 400s.
fn planet_id(path: Result<Path<DbId>, PathRejection>) -> AppResult<DbId> {
    path.map(|Path(id)| id)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// POST /planets
///
/// An unparsable body or an empty required field yields 422; a taken name
/// yields 409.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlanet>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Planet>)> {
    let Json(input) =
        payload.map_err(|rejection| CoreError::Validation(rejection.body_text()))?;
    validate_create_planet(&input)?;

    let planet = state.planets.create(&input).await?;
    Ok((StatusCode::CREATED, Json(planet)))
}

/// GET /planets?terrain=&climate=
///
/// A repeated filter key uses its first value.
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<Vec<Planet>>> {
    let Query(pairs) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let params = PlanetListParams::from_pairs(pairs);
    let planets = state.planets.list(params.terrain, params.climate).await?;
    Ok(Json(planets))
}

/// GET /planets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Planet>> {
    let id = planet_id(path)?;
    let planet = state
        .planets
        .get(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Planet",
            id,
        }))?;
    Ok(Json(planet))
}

/// GET /planets/name/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Planet>> {
    match state.planets.get_by_name(&name).await? {
        Some(planet) => Ok(Json(planet)),
        None => Err(AppError::Core(CoreError::NameNotFound {
            entity: "Planet",
            name,
        })),
    }
}

/// DELETE /planets/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = planet_id(path)?;
    state.planets.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
