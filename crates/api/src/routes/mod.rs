pub mod health;
pub mod planet;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /planets                                         list, create
/// /planets/{id}                                    get, delete
/// /planets/name/{name}                             get by name
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/planets", planet::router())
}
