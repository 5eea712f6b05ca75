//! Route definitions for the `/planets` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::planet;
use crate::state::AppState;

/// Routes mounted at `/planets`.
///
/// ```text
/// GET    /                 -> list (?terrain=&climate=)
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// DELETE /{id}             -> delete
/// GET    /name/{name}      -> get_by_name
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(planet::list).post(planet::create))
        .route("/{id}", get(planet::get_by_id).delete(planet::delete))
        .route("/name/{name}", get(planet::get_by_name))
}
